//! OTP verification provider interface
//!
//! The remote provider owns the whole challenge lifecycle: code generation,
//! delivery, expiry and single-use enforcement. The core holds no pending
//! challenge state between the request and check calls.

mod mock;
mod traits;
mod types;

pub use mock::MockOtpProvider;
pub use traits::OtpProvider;
pub use types::CodeCheck;
