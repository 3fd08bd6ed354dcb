//! Authentication service module
//!
//! Orchestrates the validators, user repository, OTP provider and session
//! token codec into the four authentication flows:
//! - registration by contact details
//! - login initiation (OTP dispatch)
//! - login completion (OTP check and token issuance)
//! - authenticated profile lookup from a bearer token

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
