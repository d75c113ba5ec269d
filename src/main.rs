use account_service::config::EnvConfig;
use account_service::db::database_service::DatabaseService;
use account_service::routes::configure_routes;
use account_service::utils::token::TokenService;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::io;
use std::sync::Arc;
use tracing::{error, info};

fn fatal(context: &str, e: impl std::fmt::Display) -> io::Error {
    error!("{context}: {e}");
    io::Error::other(format!("{context}: {e}"))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env().map_err(|e| fatal("Invalid configuration", e))?;
    let addr = format!("0.0.0.0:{}", config.port);

    let database_service = Arc::new(
        DatabaseService::new(&config.db_url)
            .await
            .map_err(|e| fatal("Failed to initialize DatabaseService", e))?,
    );

    if config.seed {
        database_service
            .seed()
            .await
            .map_err(|e| fatal("Failed to seed database", e))?;
    }

    let tokens = web::Data::new(TokenService::from_config(&config.token));
    let db_data = web::Data::new(Arc::clone(&database_service));

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(db_data.clone())
            .app_data(tokens.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await?;

    database_service
        .close()
        .await
        .map_err(|e| fatal("Failed to close database", e))
}
