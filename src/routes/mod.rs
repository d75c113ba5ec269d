use crate::utils::webutils::json_error_handler;
use actix_web::{http::header, middleware::DefaultHeaders, web};

pub mod home;
pub mod login;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    cfg.service(
        web::scope("")
            .wrap(DefaultHeaders::new().add((header::CONTENT_TYPE, "application/json")))
            .service(home::home)
            .service(login::login)
            .service(
                web::scope("/users")
                    .service(user::create::create)
                    .service(user::list::list)
                    .service(user::get::get)
                    .service(user::update::update)
                    .service(user::delete::delete)
            )
    );
}
