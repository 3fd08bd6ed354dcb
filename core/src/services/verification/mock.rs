//! Mock OTP provider for development and testing
//!
//! Stands in for the remote verification service: records which phones have
//! a pending challenge, approves a single configured code, and can simulate
//! provider failures on either call.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::traits::OtpProvider;
use super::types::CodeCheck;
use uuid::Uuid;

/// Default code the mock approves
pub const DEFAULT_ACCEPTED_CODE: &str = "123456";

/// Mock OTP provider
#[derive(Clone)]
pub struct MockOtpProvider {
    accepted_code: String,
    pending: Arc<Mutex<Vec<String>>>,
    fail_dispatch: Arc<AtomicBool>,
    fail_check: Arc<AtomicBool>,
}

impl MockOtpProvider {
    /// Create a mock that approves [`DEFAULT_ACCEPTED_CODE`]
    pub fn new() -> Self {
        Self::with_accepted_code(DEFAULT_ACCEPTED_CODE)
    }

    /// Create a mock that approves the given code
    pub fn with_accepted_code(code: impl Into<String>) -> Self {
        Self {
            accepted_code: code.into(),
            pending: Arc::new(Mutex::new(Vec::new())),
            fail_dispatch: Arc::new(AtomicBool::new(false)),
            fail_check: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make `request_code` fail with a provider diagnostic
    pub fn set_fail_dispatch(&self, fail: bool) {
        self.fail_dispatch.store(fail, Ordering::SeqCst);
    }

    /// Make `check_code` fail with a provider diagnostic
    pub fn set_fail_check(&self, fail: bool) {
        self.fail_check.store(fail, Ordering::SeqCst);
    }

    /// Whether a challenge was requested for `phone`
    pub fn has_pending(&self, phone: &str) -> bool {
        self.pending.lock().unwrap().iter().any(|p| p == phone)
    }

    /// Number of challenges requested so far
    pub fn request_count(&self) -> usize {
        self.pending.lock().unwrap().len()
    }
}

impl Default for MockOtpProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OtpProvider for MockOtpProvider {
    async fn request_code(&self, phone: &str) -> Result<String, String> {
        if self.fail_dispatch.load(Ordering::SeqCst) {
            return Err("simulated dispatch failure".to_string());
        }

        self.pending.lock().unwrap().push(phone.to_string());
        Ok(format!("mock_{}", Uuid::new_v4()))
    }

    async fn check_code(&self, _phone: &str, code: &str) -> Result<CodeCheck, String> {
        if self.fail_check.load(Ordering::SeqCst) {
            return Err("simulated check failure".to_string());
        }

        if code == self.accepted_code {
            Ok(CodeCheck::Approved)
        } else {
            Ok(CodeCheck::Denied)
        }
    }
}
