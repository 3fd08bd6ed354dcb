//! Authentication configuration

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Default session token lifetime in hours
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for HMAC-SHA256 signing
    pub secret: String,

    /// Session token lifetime in hours
    pub session_ttl_hours: i64,
}

impl JwtConfig {
    /// Create a new JWT configuration with a secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
        }
    }

    /// Set the session token lifetime in hours
    pub fn with_session_ttl_hours(mut self, hours: i64) -> Self {
        self.session_ttl_hours = hours;
        self
    }

    /// Create from environment variables
    ///
    /// A missing or empty `JWT_SECRET` is a fatal configuration error; there
    /// is no default secret to fall back to.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingJwtSecret)?;
        if secret.trim().is_empty() {
            return Err(ConfigError::MissingJwtSecret);
        }

        let session_ttl_hours = match std::env::var("SESSION_TTL_HOURS") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "SESSION_TTL_HOURS".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_SESSION_TTL_HOURS,
        };

        Ok(Self {
            secret,
            session_ttl_hours,
        })
    }
}
