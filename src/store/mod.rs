//! The record-management engine.
//!
//! [`ContactStore`] owns the ordered collection of contacts and enforces its
//! invariants. The [`codec`] submodule holds the file format shared by export
//! and import.

pub mod codec;
pub mod contact_store;
pub mod import;

pub use contact_store::{ContactStore, StoreStats};
pub use import::{ImportReport, SkipReason, SkippedRow};
