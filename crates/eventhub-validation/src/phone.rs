//! Phone number validation functions

use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest accepted phone number, counted in characters including separators
pub const DEFAULT_PHONE_MIN_LENGTH: usize = 10;

static PHONE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s\-+()]+$").expect("phone pattern compiles"));

/// True when every character is a digit, whitespace, '-', '+', '(' or ')'
pub fn has_only_phone_chars(phone: &str) -> bool {
    PHONE_CHARS.is_match(phone)
}

/// Validates a phone number: allowed characters only and at least `min_length` characters.
///
/// The length is the raw character count, so separators count towards it.
pub fn is_valid_phone(phone: &str, min_length: usize) -> bool {
    has_only_phone_chars(phone) && phone.chars().count() >= min_length
}
