//! Shared utilities and common types for the VeriTel server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error types and response structures
//! - Utility functions (phone/email validation, phone masking)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    CorsConfig, DatabaseConfig, Environment, JwtConfig, OtpConfig, OtpProviderKind, ServerConfig,
};
pub use errors::ConfigError;
pub use types::response::{ErrorResponse, MessageResponse};
pub use utils::{phone, validation};
