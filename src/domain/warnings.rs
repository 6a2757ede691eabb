//! Advisory format warnings.

use serde::Serialize;
use std::fmt;

/// A format problem that does not block a contact from being stored.
///
/// Returned by [`ContactStore::add`](crate::store::ContactStore::add) so the
/// caller can tell the user, but never turned into an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FormatWarning {
    /// The email address may be malformed.
    InvalidEmail(String),

    /// The phone number may be malformed.
    InvalidPhone(String),
}

impl fmt::Display for FormatWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(email) => write!(f, "Email format may be invalid: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Phone format may be invalid: {}", phone),
        }
    }
}
