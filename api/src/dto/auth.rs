//! Authentication request/response DTOs
//!
//! Request fields are optional so that absent JSON fields reach the core's
//! missing-field handling instead of failing deserialization; admission
//! gating belongs to the authentication service, not the HTTP edge.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpRequest {
    /// Phone number in E.164 format
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    /// Phone number in E.164 format
    pub phone: Option<String>,
    /// One-time code received via SMS
    pub code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
