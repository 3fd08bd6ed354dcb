//! Domain error to HTTP response mapping
//!
//! Validation and business-rule errors map to the documented status codes
//! with short messages. Provider diagnostics and database detail are logged
//! server-side and never echoed to the caller. Token-verification failures
//! are a single undifferentiated 401.

use actix_web::HttpResponse;

use vt_core::errors::{AuthError, DomainError, ValidationError};
use vt_shared::types::response::ErrorResponse;

/// Convert a domain error into the appropriate HTTP response
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    log::error!("Domain error: {:?}", error);

    match error {
        DomainError::ValidationErr(validation_error) => match validation_error {
            ValidationError::RequiredField { field } => HttpResponse::BadRequest().json(
                ErrorResponse::new("missing_field", format!("Required field: {}", field)),
            ),
            ValidationError::InvalidEmail => HttpResponse::BadRequest()
                .json(ErrorResponse::new("invalid_email", "Invalid email format")),
        },
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidPhoneFormat { .. } => HttpResponse::BadRequest().json(
                ErrorResponse::new("invalid_phone", "Invalid phone number format"),
            ),
            AuthError::InvalidOtp => {
                HttpResponse::BadRequest().json(ErrorResponse::new("invalid_otp", "Invalid OTP"))
            }
            AuthError::UserNotFound => HttpResponse::NotFound()
                .json(ErrorResponse::new("user_not_found", "User not found")),
            AuthError::UserAlreadyExists => HttpResponse::Conflict().json(ErrorResponse::new(
                "user_already_exists",
                "User already exists",
            )),
            AuthError::OtpDispatchFailed { .. } => {
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    "otp_dispatch_failed",
                    "Failed to send OTP. Please try again later",
                ))
            }
            AuthError::OtpVerificationFailed { .. } => {
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    "otp_verification_failed",
                    "Failed to verify OTP. Please try again later",
                ))
            }
        },
        DomainError::Unauthorized | DomainError::Token(_) => {
            HttpResponse::Unauthorized().json(ErrorResponse::new("unauthorized", "Unauthorized"))
        }
        DomainError::Database { .. } | DomainError::Internal { .. } => {
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use vt_core::errors::TokenError;

    #[test]
    fn test_status_code_mapping() {
        let cases: Vec<(DomainError, StatusCode)> = vec![
            (
                ValidationError::RequiredField {
                    field: "phone".to_string(),
                }
                .into(),
                StatusCode::BAD_REQUEST,
            ),
            (ValidationError::InvalidEmail.into(), StatusCode::BAD_REQUEST),
            (
                AuthError::InvalidPhoneFormat {
                    phone: "***".to_string(),
                }
                .into(),
                StatusCode::BAD_REQUEST,
            ),
            (AuthError::InvalidOtp.into(), StatusCode::BAD_REQUEST),
            (AuthError::UserNotFound.into(), StatusCode::NOT_FOUND),
            (AuthError::UserAlreadyExists.into(), StatusCode::CONFLICT),
            (
                AuthError::OtpDispatchFailed {
                    message: "x".to_string(),
                }
                .into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (DomainError::Unauthorized, StatusCode::UNAUTHORIZED),
            (
                TokenError::TokenExpired.into(),
                StatusCode::UNAUTHORIZED,
            ),
            (
                DomainError::Database {
                    message: "x".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let response = domain_error_response(&error);
            assert_eq!(response.status(), expected, "wrong status for {:?}", error);
        }
    }
}
