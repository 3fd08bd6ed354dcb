//! Authentication routes

pub mod register;
pub mod send_otp;
pub mod verify_otp;

pub use register::register;
pub use send_otp::send_otp;
pub use verify_otp::verify_otp;
