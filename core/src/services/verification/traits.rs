//! Trait for OTP provider integration

use async_trait::async_trait;

use super::types::CodeCheck;

/// Trait for the remote OTP verification capability
///
/// Errors cross the layer seam as plain strings; the auth service wraps them
/// into domain errors (`OtpDispatchFailed` / `OtpVerificationFailed`).
#[async_trait]
pub trait OtpProvider: Send + Sync {
    /// Ask the provider to deliver a fresh one-time code to `phone` via SMS.
    /// Returns the provider's dispatch identifier.
    async fn request_code(&self, phone: &str) -> Result<String, String>;

    /// Ask the provider whether `code` is the currently valid code for
    /// `phone`.
    async fn check_code(&self, phone: &str, code: &str) -> Result<CodeCheck, String>;
}
