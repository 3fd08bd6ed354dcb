//! Types for the OTP verification workflow

/// Outcome of a provider-side code check
///
/// Anything the provider reports other than approval (wrong code, expired
/// challenge, already-consumed code) collapses to `Denied`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeCheck {
    Approved,
    Denied,
}

impl CodeCheck {
    pub fn is_approved(&self) -> bool {
        matches!(self, CodeCheck::Approved)
    }
}
