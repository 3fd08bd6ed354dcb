//! # VeriTel Infrastructure
//!
//! Concrete implementations of the core layer's collaborator interfaces:
//! - MySQL user repository (sqlx)
//! - Twilio Verify OTP provider (reqwest)

pub mod database;
pub mod otp;

use thiserror::Error;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("OTP provider error: {0}")]
    Provider(String),
}
