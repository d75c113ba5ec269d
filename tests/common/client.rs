use account_service::{
    db::database_service::DatabaseService,
    types::{error::AppError, user::DBUserCreate},
    utils::token::TokenService,
};
use actix_web::{web, App};
use std::sync::Arc;

pub struct TestClient {
    pub db: Arc<DatabaseService>,
    pub tokens: TokenService,
}

impl TestClient {
    pub fn new(db: Arc<DatabaseService>, tokens: TokenService) -> Self {
        TestClient { db, tokens }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(self.tokens.clone()))
            .configure(account_service::routes::configure_routes)
    }

    /// Inserts a user straight through the repository and hands back its id
    /// plus a freshly issued bearer token.
    pub async fn create_test_user(&self, username: &str, email: &str) -> Result<(i32, String), AppError> {
        let user = self.db.create_user(DBUserCreate {
            username: username.to_string(),
            email: email.to_string(),
            password: "password".to_string(),
        }).await?;

        let token = self.tokens.issue(user.id)?;
        Ok((user.id, token))
    }
}
