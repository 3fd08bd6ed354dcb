//! Process configuration assembled from environment variables

use vt_shared::config::{
    CorsConfig, DatabaseConfig, Environment, JwtConfig, OtpConfig, ServerConfig,
};
use vt_shared::errors::ConfigError;

/// Complete API process configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub otp: OtpConfig,
    pub cors: CorsConfig,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// A missing signing secret (or missing Twilio credentials when the
    /// twilio provider is selected) is a fatal configuration error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env()?,
            otp: OtpConfig::from_env()?,
            cors: CorsConfig::from_env(),
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }
}
