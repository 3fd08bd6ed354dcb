//! OTP provider implementations

mod twilio_verify;

pub use twilio_verify::{TwilioVerifyConfig, TwilioVerifyProvider};
