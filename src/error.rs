//! Error types for Contact Vault.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::FormatWarning;
use thiserror::Error;

/// Errors that can occur when operating on a [`ContactStore`](crate::store::ContactStore).
#[derive(Error, Debug)]
pub enum StoreError {
    /// Name, phone or email is empty after trimming
    #[error("Invalid contact data: name, phone and email are all required")]
    InvalidData,

    /// Another contact already has the same phone or (case-insensitive) email.
    /// Carries the format warnings of the rejected contact.
    #[error("Contact with same phone or email already exists")]
    DuplicateContact { warnings: Vec<FormatWarning> },

    /// Positional index outside the current collection
    #[error("Invalid contact index {index} (store holds {len} contacts)")]
    IndexOutOfRange { index: usize, len: usize },

    /// No contact at the requested position
    #[error("Contact not found at index {0}")]
    NotFound(usize),

    /// File could not be opened, read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Advisory format warnings attached to this error, if any.
    pub fn warnings(&self) -> &[FormatWarning] {
        match self {
            Self::DuplicateContact { warnings } => warnings,
            _ => &[],
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
