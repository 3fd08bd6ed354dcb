//! Token service configuration

use vt_shared::config::JwtConfig;

use crate::domain::entities::token::SESSION_TOKEN_EXPIRY_HOURS;

/// Configuration for the session token codec
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret for HMAC-SHA256 signing; held in memory for the process
    /// lifetime and never logged
    pub secret: String,

    /// Session token lifetime in hours
    pub session_ttl_hours: i64,
}

impl TokenServiceConfig {
    /// Create a configuration with the default 24-hour lifetime
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            session_ttl_hours: SESSION_TOKEN_EXPIRY_HOURS,
        }
    }

    /// Set the session token lifetime in hours
    pub fn with_session_ttl_hours(mut self, hours: i64) -> Self {
        self.session_ttl_hours = hours;
        self
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            secret: config.secret,
            session_ttl_hours: config.session_ttl_hours,
        }
    }
}
