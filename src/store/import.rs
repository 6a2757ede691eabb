//! Per-row diagnostics collected while importing a file.

use serde::Serialize;
use std::fmt;

/// Why a data line did not become a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "fields", rename_all = "snake_case")]
pub enum SkipReason {
    /// The line did not split into exactly three fields.
    WrongFieldCount(usize),

    /// A field was empty after cleaning.
    Invalid,

    /// The contact collides with one already in the store.
    Duplicate,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongFieldCount(n) => write!(f, "expected 3 fields, found {}", n),
            Self::Invalid => write!(f, "missing name, phone or email"),
            Self::Duplicate => write!(f, "duplicate phone or email"),
        }
    }
}

/// A data line that was dropped during import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// 1-based line number within the file (the header is line 1).
    pub line: usize,

    pub reason: SkipReason,
}

/// Outcome of a best-effort import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Number of contacts appended to the store.
    pub imported: usize,

    /// Lines that were dropped, in file order.
    pub skipped: Vec<SkippedRow>,
}

impl ImportReport {
    pub(crate) fn skip(&mut self, line: usize, reason: SkipReason) {
        tracing::debug!(line = line, reason = %reason, "Skipping import row");
        self.skipped.push(SkippedRow { line, reason });
    }
}
