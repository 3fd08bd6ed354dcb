//! Shared error types for process configuration

use thiserror::Error;

/// Startup-fatal configuration errors
///
/// Any of these aborts process start; they are never mapped to an HTTP
/// response.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JWT_SECRET environment variable is not set")]
    MissingJwtSecret,

    #[error("Missing required environment variable: {name}")]
    MissingVariable { name: String },

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}
