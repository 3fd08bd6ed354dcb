//! Error type definitions for authentication, token and validation failures.
//!
//! Messages here are short and free of internal detail; the presentation
//! layer decides what reaches the caller.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid phone number format: {phone}")]
    InvalidPhoneFormat { phone: String },

    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Failed to dispatch verification code: {message}")]
    OtpDispatchFailed { message: String },

    #[error("Invalid OTP")]
    InvalidOtp,

    #[error("OTP verification failed: {message}")]
    OtpVerificationFailed { message: String },
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid email format")]
    InvalidEmail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = AuthError::InvalidPhoneFormat {
            phone: "+14******1234".to_string(),
        };
        assert!(error.to_string().contains("+14******1234"));

        let error = ValidationError::RequiredField {
            field: "phone".to_string(),
        };
        assert!(error.to_string().contains("phone"));
    }

    #[test]
    fn test_dispatch_failure_carries_diagnostic() {
        let error = AuthError::OtpDispatchFailed {
            message: "provider unreachable".to_string(),
        };
        assert!(error.to_string().contains("provider unreachable"));
    }
}
