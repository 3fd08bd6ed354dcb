//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `otp` - OTP provider (Twilio Verify) configuration
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod otp;
pub mod server;

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use otp::{OtpConfig, OtpProviderKind};
pub use server::{CorsConfig, ServerConfig};
