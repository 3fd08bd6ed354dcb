//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

// local-part@domain.tld with a 2+ letter top-level segment. Not an RFC 5322
// parser; it only rejects obviously malformed input.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

/// Check if an email address is syntactically valid
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check if a string is non-empty after trimming
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@example.co.uk"));
        assert!(is_valid_email("user+tag@sub.domain.org"));
        assert!(is_valid_email("u_1%2-3@host-name.io"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("missing-at.example.com"));
        assert!(!is_valid_email("no-dot@domain"));
        assert!(!is_valid_email("short-tld@example.c"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_not_empty() {
        assert!(not_empty("a"));
        assert!(!not_empty(""));
        assert!(!not_empty("   "));
    }
}
