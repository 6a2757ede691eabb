//! Contact model representing a single address book entry.

use crate::domain::{eq_ignore_case, fold_case, is_valid_email, is_valid_phone, FormatWarning};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields as they arrive from outside, before normalization.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawContact {
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
}

impl From<RawContact> for Contact {
    fn from(raw: RawContact) -> Self {
        Contact::from_optional(raw.name.as_deref(), raw.phone.as_deref(), raw.email.as_deref())
    }
}

/// A contact in the address book.
///
/// Every field is stored trimmed of surrounding whitespace. Construction never
/// fails; call [`Contact::validate`] to check the record is complete before
/// handing it to a store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawContact")]
pub struct Contact {
    name: String,
    phone: String,
    email: String,
}

impl Contact {
    /// Create a new contact, trimming every field.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: trimmed(name.into()),
            phone: trimmed(phone.into()),
            email: trimmed(email.into()),
        }
    }

    /// Create a contact from possibly-absent fields. Absent fields become empty.
    pub fn from_optional(name: Option<&str>, phone: Option<&str>, email: Option<&str>) -> Self {
        Self {
            name: normalize(name),
            phone: normalize(phone),
            email: normalize(email),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = normalize(Some(name));
    }

    pub fn set_phone(&mut self, phone: &str) {
        self.phone = normalize(Some(phone));
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = normalize(Some(email));
    }

    /// True iff name, phone and email are all non-empty.
    pub fn validate(&self) -> bool {
        !self.name.is_empty() && !self.phone.is_empty() && !self.email.is_empty()
    }

    /// Loose email format check, independent of [`Contact::validate`].
    pub fn validate_email(&self) -> bool {
        is_valid_email(&self.email)
    }

    /// Phone format check, independent of [`Contact::validate`].
    pub fn validate_phone(&self) -> bool {
        is_valid_phone(&self.phone)
    }

    /// Advisory warnings for every failed format check (email first).
    pub fn format_warnings(&self) -> Vec<FormatWarning> {
        let mut warnings = Vec::new();
        if !self.validate_email() {
            warnings.push(FormatWarning::InvalidEmail(self.email.clone()));
        }
        if !self.validate_phone() {
            warnings.push(FormatWarning::InvalidPhone(self.phone.clone()));
        }
        warnings
    }

    /// Keyword match: case-insensitive on name and email, case-sensitive on phone.
    ///
    /// An empty keyword matches every contact; callers are expected to reject
    /// blank keywords first.
    pub fn matches(&self, keyword: &str) -> bool {
        let folded = fold_case(keyword);
        fold_case(&self.name).contains(&folded)
            || self.phone.contains(keyword)
            || fold_case(&self.email).contains(&folded)
    }

    /// Duplicate relation: equal phone, or case-insensitively equal email.
    ///
    /// This is a pairwise check and is not transitive.
    pub fn same_as(&self, other: &Contact) -> bool {
        self.phone == other.phone || eq_ignore_case(&self.email, &other.email)
    }

    /// Fixed-width single-line rendering for listings.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// `"name","phone","email"`, without escaping embedded quotes or commas.
    pub fn to_csv_row(&self) -> String {
        format!("\"{}\",\"{}\",\"{}\"", self.name, self.phone, self.email)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {:<20.20} | Phone: {:<15.15} | Email: {:<25.25}",
            self.name, self.phone, self.email
        )
    }
}

fn normalize(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

fn trimmed(value: String) -> String {
    normalize(Some(value.as_str()))
}
