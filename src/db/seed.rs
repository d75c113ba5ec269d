use migration::{Migrator, MigratorTrait};
use tracing::info;

use crate::db::database_service::DatabaseService;
use crate::types::{error::AppError, user::DBUserCreate};

const SEED_PASSWORD: &str = "password";

fn seed_users() -> Vec<DBUserCreate> {
    [("Steven Victor", "steven@email.com"), ("Martin Luther", "luther@email.com")]
        .into_iter()
        .map(|(username, email)| DBUserCreate {
            username: username.to_string(),
            email: email.to_string(),
            password: SEED_PASSWORD.to_string(),
        })
        .collect()
}

impl DatabaseService {
    /// Drops every table, re-applies the migrations and inserts the sample users.
    pub async fn seed(&self) -> Result<(), AppError> {
        info!("Resetting schema for seeding...");
        Migrator::fresh(&self.database_connection).await?;

        for user in seed_users() {
            self.create_user(user).await?;
        }
        info!("Seeded users table.");
        Ok(())
    }
}
