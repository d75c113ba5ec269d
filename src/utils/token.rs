use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use crate::config::TokenConfig;
use crate::types::{error::AppError, token::Claims};

/// Issues and verifies the HS256 bearer tokens handed out by `/login`.
///
/// Tokens are stateless: the signature and `exp` are the only things checked,
/// there is no revocation.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    pub fn from_config(config: &TokenConfig) -> Self {
        Self::new(&config.secret, Duration::seconds(config.ttl_secs))
    }

    pub fn issue(&self, user_id: i32) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            authorized: true,
            user_id,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))
    }

    /// Returns the embedded user id. Bad signature, bad shape and expiry all
    /// collapse into `Unauthorized`.
    pub fn verify(&self, token: &str) -> Result<i32, AppError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            debug!("rejected bearer token: {e}");
            AppError::Unauthorized
        })?;

        if !data.claims.authorized {
            return Err(AppError::Unauthorized);
        }
        Ok(data.claims.user_id)
    }
}
