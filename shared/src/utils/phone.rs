//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// E.164: '+' followed by a 1-9 country-code digit and 1-14 further digits.
// Deliberately strict: separators, spaces and parentheses are rejected,
// not stripped.
static E164_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{1,14}$").unwrap()
});

/// Check if a phone number is valid E.164 format
pub fn is_valid_phone(phone: &str) -> bool {
    E164_PHONE_REGEX.is_match(phone)
}

/// Mask a phone number for display and logging (e.g. `+14******1234`)
///
/// Works on characters, not bytes; the input may be arbitrary rejected
/// user input.
pub fn mask_phone(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() >= 7 {
        let prefix: String = chars[..3].iter().collect();
        let suffix: String = chars[chars.len() - 4..].iter().collect();
        format!("{}******{}", prefix, suffix)
    } else {
        "******".to_string()
    }
}
