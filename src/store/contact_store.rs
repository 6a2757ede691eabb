//! In-memory contact collection with CRUD, search, sort and file I/O.

use super::codec::{self, DataRow, HEADER, LINE_ENDING};
use super::import::{ImportReport, SkipReason};
use crate::domain::{cmp_ignore_case, FormatWarning};
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Aggregate format statistics over the whole store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub total: usize,
    pub valid_emails: usize,
    pub valid_phones: usize,
}

/// Ordered collection of contacts.
///
/// Insertion order is the display order, and a contact's position is its only
/// address. No two members satisfy [`Contact::same_as`]; this is checked on
/// every insert and update.
///
/// Removing or sorting changes the meaning of positions, so callers must not
/// hold indices across those calls.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a 1-based display position into a 0-based index.
    pub fn index_from_position(position: usize) -> Option<usize> {
        position.checked_sub(1)
    }

    /// Append a contact.
    ///
    /// Returns the advisory format warnings for the stored contact; they never
    /// cause a rejection.
    ///
    /// # Errors
    ///
    /// - `StoreError::InvalidData` if any field is empty
    /// - `StoreError::DuplicateContact` if an existing member has the same
    ///   phone or email; the rejected contact's warnings ride along
    pub fn add(&mut self, contact: Contact) -> StoreResult<Vec<FormatWarning>> {
        if !contact.validate() {
            return Err(StoreError::InvalidData);
        }

        let warnings = contact.format_warnings();

        if self.conflicts_with(&contact, None) {
            return Err(StoreError::DuplicateContact { warnings });
        }

        debug!(name = %contact.name(), index = self.contacts.len(), "Contact added");
        self.contacts.push(contact);
        Ok(warnings)
    }

    /// Get the contact at a 0-based index.
    pub fn get(&self, index: usize) -> StoreResult<&Contact> {
        self.contacts.get(index).ok_or(StoreError::NotFound(index))
    }

    /// Replace the contact at `index`.
    ///
    /// The slot being replaced is excluded from the duplicate check, so a
    /// contact may keep its own phone or email. On any error the store is left
    /// untouched.
    pub fn update(&mut self, index: usize, contact: Contact) -> StoreResult<()> {
        let len = self.contacts.len();
        if index >= len {
            return Err(StoreError::IndexOutOfRange { index, len });
        }

        if !contact.validate() {
            return Err(StoreError::InvalidData);
        }

        if self.conflicts_with(&contact, Some(index)) {
            return Err(StoreError::DuplicateContact {
                warnings: contact.format_warnings(),
            });
        }

        debug!(name = %contact.name(), index = index, "Contact updated");
        self.contacts[index] = contact;
        Ok(())
    }

    /// Remove and return the contact at `index`, shifting later contacts down.
    pub fn remove(&mut self, index: usize) -> StoreResult<Contact> {
        let len = self.contacts.len();
        if index >= len {
            return Err(StoreError::IndexOutOfRange { index, len });
        }

        let removed = self.contacts.remove(index);
        debug!(name = %removed.name(), index = index, "Contact removed");
        Ok(removed)
    }

    /// All contacts matching `keyword`, paired with their current index, in
    /// store order. A blank keyword yields nothing.
    pub fn search(&self, keyword: &str) -> Vec<(usize, &Contact)> {
        if keyword.trim().is_empty() {
            return Vec::new();
        }

        self.contacts
            .iter()
            .enumerate()
            .filter(|(_, contact)| contact.matches(keyword))
            .collect()
    }

    /// Stable sort by name, ignoring case.
    pub fn sort_by_name(&mut self) {
        self.contacts.sort_by(|a, b| cmp_ignore_case(a.name(), b.name()));
    }

    /// Stable sort by phone, comparing the raw strings.
    pub fn sort_by_phone(&mut self) {
        self.contacts.sort_by(|a, b| a.phone().cmp(b.phone()));
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Alias for [`ContactStore::len`].
    pub fn count(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    /// Count contacts passing each format check.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            total: self.contacts.len(),
            valid_emails: self.contacts.iter().filter(|c| c.validate_email()).count(),
            valid_phones: self.contacts.iter().filter(|c| c.validate_phone()).count(),
        }
    }

    /// Write the header and every contact, in store order, to `path`.
    ///
    /// An existing file is overwritten. If this fails the destination may be
    /// left truncated.
    pub fn export_to(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);

        write!(writer, "{}{}", HEADER, LINE_ENDING)?;
        for contact in &self.contacts {
            write!(writer, "{}{}", codec::render_row(contact), LINE_ENDING)?;
        }
        writer.flush()?;

        info!(path = %path.display(), count = self.contacts.len(), "Contacts exported");
        Ok(())
    }

    /// Import contacts from `path`, returning how many were added.
    ///
    /// See [`ContactStore::import_with_report`].
    pub fn import_from(&mut self, path: impl AsRef<Path>) -> StoreResult<usize> {
        self.import_with_report(path).map(|report| report.imported)
    }

    /// Import contacts from `path`, recording every dropped line.
    ///
    /// The first line is skipped unconditionally and blank lines are ignored.
    /// Each later line must split into exactly three fields and then pass
    /// [`ContactStore::add`]; lines that don't are dropped and listed in the
    /// report rather than failing the import. Lines may end in `\n`, `\r\n`
    /// or a lone `\r`. Invalid UTF-8 is replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` only if the file cannot be read. The file is
    /// read in full before the store is touched.
    pub fn import_with_report(&mut self, path: impl AsRef<Path>) -> StoreResult<ImportReport> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let rows = codec::data_rows(&bytes)?;

        let mut report = ImportReport::default();
        for DataRow { line: line_no, fields } in rows {
            let [name, phone, email] = match fields {
                Ok(fields) => fields,
                Err(found) => {
                    report.skip(line_no, SkipReason::WrongFieldCount(found));
                    continue;
                }
            };

            match self.add(Contact::new(name, phone, email)) {
                Ok(_) => report.imported += 1,
                Err(StoreError::DuplicateContact { .. }) => report.skip(line_no, SkipReason::Duplicate),
                Err(_) => report.skip(line_no, SkipReason::Invalid),
            }
        }

        info!(
            path = %path.display(),
            imported = report.imported,
            skipped = report.skipped.len(),
            "Contacts imported"
        );
        Ok(report)
    }

    /// Whether any member other than the one at `skip` collides with `contact`.
    fn conflicts_with(&self, contact: &Contact, skip: Option<usize>) -> bool {
        self.contacts
            .iter()
            .enumerate()
            .any(|(i, existing)| Some(i) != skip && existing.same_as(contact))
    }
}
