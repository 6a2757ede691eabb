//! Phone format predicate.

use once_cell::sync::Lazy;
use regex::Regex;

/// Exactly ten digits.
static TEN_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

/// Optional leading '+' followed by 10 to 15 digits.
static INTERNATIONAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]{10,15}$").unwrap());

/// Phone format check.
///
/// Accepts exactly 10 digits, or an optional leading `+` followed by 10-15
/// digits. Separators such as spaces or hyphens are not allowed. Like
/// [`is_valid_email`](super::is_valid_email) this is advisory only.
///
/// # Example
///
/// ```
/// use contact_vault::domain::is_valid_phone;
///
/// assert!(is_valid_phone("1234567890"));
/// assert!(is_valid_phone("+441234567890"));
/// assert!(!is_valid_phone("555-1234"));
/// ```
pub fn is_valid_phone(phone: &str) -> bool {
    TEN_DIGITS.is_match(phone) || INTERNATIONAL.is_match(phone)
}
