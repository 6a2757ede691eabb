//! Domain format rules.
//!
//! Loose format predicates for email addresses and phone numbers, the
//! advisory warning type produced when a contact fails them, and the
//! case-insensitive comparisons used for matching and sorting. The format
//! checks never reject data; they only inform the caller.

pub mod case;
pub mod email;
pub mod phone;
pub mod warnings;

pub use case::{cmp_ignore_case, eq_ignore_case, fold_case};
pub use email::is_valid_email;
pub use phone::is_valid_phone;
pub use warnings::FormatWarning;
