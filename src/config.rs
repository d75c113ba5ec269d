use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("environment variable {0} is not valid: {1}")]
    Invalid(&'static str, String),
}

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub seed: bool,
    pub token: TokenConfig,
}

#[derive(Clone, Debug)]
pub struct TokenConfig {
    pub secret: String,
    pub ttl_secs: i64,
}

impl EnvConfig {
    fn get_env(key: &'static str) -> Result<String, ConfigError> {
        env::var(key).map_err(|_| ConfigError::Missing(key))
    }

    fn get_env_or<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
        match env::var(key) {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(key, raw)),
            Err(_) => Ok(default),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let secret = Self::get_env("API_SECRET")?;
        if secret.is_empty() {
            return Err(ConfigError::Invalid("API_SECRET", secret));
        }

        Ok(EnvConfig {
            port: Self::get_env_or("PORT", 8080)?,
            db_url: Self::get_env("DATABASE_URL")?,
            seed: Self::get_env_or("SEED_DB", false)?,
            token: TokenConfig {
                secret,
                ttl_secs: Self::get_env_or("TOKEN_TTL_SECS", 3600)?,
            },
        })
    }
}
