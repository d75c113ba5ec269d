#![allow(dead_code)]

use account_service::db::database_service::DatabaseService;
use account_service::utils::token::TokenService;
use chrono::Duration;
use std::sync::Arc;
use tempfile::TempDir;

pub mod client;

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct TestContext {
    pub db: Arc<DatabaseService>,
    pub tokens: TokenService,
    pub _dir: TempDir,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}?mode=rwc", dir.path().join("accounts.db").display());

        let db = Arc::new(
            DatabaseService::new(&db_url)
                .await
                .expect("Failed to initialize DatabaseService")
        );

        TestContext {
            db,
            tokens: TokenService::new(TEST_SECRET, Duration::hours(1)),
            _dir: dir,
        }
    }
}

// Test data helpers
pub mod test_data {
    use account_service::types::user::{RLogin, RUserCreate};

    pub fn sample_user() -> RUserCreate {
        sample_user_with("pet", "pet@gmail.com")
    }

    pub fn sample_user_with(username: &str, email: &str) -> RUserCreate {
        RUserCreate {
            username: username.to_string(),
            email: email.to_string(),
            password: "password".to_string(),
        }
    }

    pub fn login_for(email: &str) -> RLogin {
        RLogin {
            email: email.to_string(),
            password: "password".to_string(),
        }
    }
}
