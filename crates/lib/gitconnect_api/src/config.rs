//! API server configuration.

use thiserror::Error;

use gitconnect_core::auth::password::DEFAULT_BCRYPT_COST;

/// Configuration errors, fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set and non-empty")]
    MissingJwtSecret,

    #[error("BCRYPT_COST must be an integer: {0}")]
    InvalidBcryptCost(String),
}

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:8080").
    pub bind_addr: String,
    /// PostgreSQL connection URL.
    pub pg_connection_url: String,
    /// JWT signing secret. Mandatory; there is no generated fallback.
    pub jwt_secret: String,
    /// bcrypt work factor for password hashing.
    pub bcrypt_cost: u32,
}

impl ApiConfig {
    /// Reads configuration from environment variables.
    ///
    /// | Variable       | Default                                  |
    /// |----------------|------------------------------------------|
    /// | `BIND_ADDR`    | `0.0.0.0:8080`                           |
    /// | `DATABASE_URL` | `postgres://localhost:5432/gitconnect`   |
    /// | `JWT_SECRET`   | none — startup fails without it          |
    /// | `BCRYPT_COST`  | `10`                                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(s) if !s.is_empty() => s,
            _ => return Err(ConfigError::MissingJwtSecret),
        };

        let bcrypt_cost = match std::env::var("BCRYPT_COST") {
            Ok(raw) => raw
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidBcryptCost(raw))?,
            Err(_) => DEFAULT_BCRYPT_COST,
        };

        Ok(Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            pg_connection_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost:5432/gitconnect".into()),
            jwt_secret,
            bcrypt_cost,
        })
    }
}
