use chrono::{DateTime, Utc};
use entity::user::Model as UserModel;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::types::error::AppError;

pub const MAX_USERNAME_LENGTH: usize = 255;

/// Body of `POST /users/create` and `PUT /users/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct RUserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct RLogin {
    pub email: String,
    pub password: String,
}

/// What the repository writes. The password is still plaintext here and is
/// hashed inside the write transaction.
#[derive(Debug, Clone)]
pub struct DBUserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserRes {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserModel> for UserRes {
    fn from(m: UserModel) -> Self {
        UserRes {
            id: m.id,
            username: m.username,
            email: m.email,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

fn check_email(email: &str) -> Result<(), AppError> {
    if email.is_empty() {
        return Err(AppError::Validation("Required Email".into()));
    }
    if !email.validate_email() {
        return Err(AppError::Validation("Invalid Email".into()));
    }
    Ok(())
}

impl RUserCreate {
    /// Trims and validates the payload, yielding the repository input.
    pub fn into_validated(self) -> Result<DBUserCreate, AppError> {
        let username = self.username.trim().to_string();
        let email = self.email.trim().to_string();

        if username.is_empty() {
            return Err(AppError::Validation("Required Username".into()));
        }
        if username.chars().count() > MAX_USERNAME_LENGTH {
            return Err(AppError::Validation("Username Too Long".into()));
        }
        if self.password.is_empty() {
            return Err(AppError::Validation("Required Password".into()));
        }
        check_email(&email)?;

        Ok(DBUserCreate { username, email, password: self.password })
    }
}

impl RLogin {
    pub fn into_validated(self) -> Result<RLogin, AppError> {
        let email = self.email.trim().to_string();
        if self.password.is_empty() {
            return Err(AppError::Validation("Required Password".into()));
        }
        check_email(&email)?;
        Ok(RLogin { email, password: self.password })
    }
}
