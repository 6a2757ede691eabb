//! Email format predicate.

/// Loose email format check: the address must contain both '@' and '.'.
///
/// Position is not checked, so `"a.b@c"` passes. Failing this check never
/// keeps a contact out of the store; it only produces an advisory warning.
///
/// # Example
///
/// ```
/// use contact_vault::domain::is_valid_email;
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(!is_valid_email("user@localhost"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}
