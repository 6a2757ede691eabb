//! Contact Vault - a personal address book engine.
//!
//! This library owns an ordered collection of contacts, enforces that no two
//! share a phone number or (case-insensitively) an email address, and offers
//! keyword search, stable sorting and a flat CSV import/export format.
//!
//! # Architecture
//!
//! - **domain**: Email/phone format predicates and advisory warnings
//! - **models**: The `Contact` record
//! - **store**: `ContactStore` engine and the CSV codec
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **console**: Interactive menu over any reader/writer pair

pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod models;
pub mod store;

pub use config::Config;
pub use console::Console;
pub use domain::FormatWarning;
pub use error::{ConfigError, StoreError, StoreResult};
pub use models::Contact;
pub use store::{ContactStore, ImportReport, SkipReason, SkippedRow, StoreStats};
