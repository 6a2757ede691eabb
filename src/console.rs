//! Interactive text front end.
//!
//! A thin adapter over [`ContactStore`]: it reads raw lines, translates
//! 1-based display positions into store indices, and renders results,
//! warnings and errors. Input and output are injected so the whole menu can
//! be driven from tests.

use crate::models::Contact;
use crate::store::ContactStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const WIDE_RULE: usize = 70;
const MENU_RULE: usize = 50;
const SECTION_RULE: usize = 40;

/// Menu-driven session over a contact store.
pub struct Console<R, W> {
    input: R,
    output: W,
    store: ContactStore,
    default_file: Option<PathBuf>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, store: ContactStore) -> Self {
        Self {
            input,
            output,
            store,
            default_file: None,
        }
    }

    /// File used for export/import when the user enters a blank filename.
    pub fn with_default_file(mut self, path: Option<PathBuf>) -> Self {
        self.default_file = path;
        self
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// Tear the session down, returning the store and the output sink.
    pub fn into_parts(self) -> (ContactStore, W) {
        (self.store, self.output)
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", "=".repeat(60))?;
        writeln!(self.output, "        WELCOME TO CONTACT VAULT")?;
        writeln!(self.output, "     Your Personal Contact Manager")?;
        writeln!(self.output, "{}", "=".repeat(60))?;

        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };

            match choice.trim() {
                "1" => self.add_contact()?,
                "2" => self.list_all()?,
                "3" => self.search()?,
                "4" => self.update_contact()?,
                "5" => self.delete_contact()?,
                "6" => self.sort()?,
                "7" => self.export()?,
                "8" => self.import()?,
                "9" => self.show_stats()?,
                "0" => {
                    writeln!(self.output, "Thank you for using Contact Vault! Goodbye!")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice! Please try again.")?,
            }
        }

        self.output.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let rule = "=".repeat(MENU_RULE);
        writeln!(self.output)?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "                MAIN MENU")?;
        writeln!(self.output, "{}", rule)?;
        for entry in [
            "1. Add New Contact",
            "2. View All Contacts",
            "3. Search Contacts",
            "4. Update Contact",
            "5. Delete Contact",
            "6. Sort Contacts",
            "7. Export to File",
            "8. Import from File",
            "9. Show Statistics",
            "0. Exit",
        ] {
            writeln!(self.output, "{}", entry)?;
        }
        writeln!(self.output, "{}", rule)
    }

    fn section(&mut self, title: &str) -> io::Result<()> {
        let rule = "-".repeat(SECTION_RULE);
        writeln!(self.output)?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "          {}", title)?;
        writeln!(self.output, "{}", rule)
    }

    /// Print `label` and read one line without its terminator. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Ask for a display position and resolve it to an existing index.
    fn prompt_index(&mut self, label: &str) -> io::Result<Option<usize>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };

        let Ok(position) = raw.trim().parse::<usize>() else {
            writeln!(self.output, "Invalid input! Please enter a number.")?;
            return Ok(None);
        };

        match ContactStore::index_from_position(position) {
            Some(index) if self.store.get(index).is_ok() => Ok(Some(index)),
            _ => {
                writeln!(self.output, "Invalid contact number!")?;
                Ok(None)
            }
        }
    }

    /// Ask for a filename, falling back to the configured default when blank.
    ///
    /// `extension` is appended to a typed name that lacks it; the default
    /// file is always used as configured.
    fn prompt_file(&mut self, label: &str, extension: Option<&str>) -> io::Result<Option<String>> {
        let Some(mut raw) = self.prompt(label)? else {
            return Ok(None);
        };

        if !raw.trim().is_empty() {
            if let Some(ext) = extension {
                if !raw.ends_with(ext) {
                    raw.push_str(ext);
                }
            }
            return Ok(Some(raw));
        }

        match &self.default_file {
            Some(path) => Ok(Some(path.display().to_string())),
            None => {
                writeln!(self.output, "Invalid filename!")?;
                Ok(None)
            }
        }
    }

    fn add_contact(&mut self) -> io::Result<()> {
        self.section("ADD NEW CONTACT")?;

        let Some(name) = self.prompt("Enter name: ")? else {
            return Ok(());
        };
        let Some(phone) = self.prompt("Enter phone: ")? else {
            return Ok(());
        };
        let Some(email) = self.prompt("Enter email: ")? else {
            return Ok(());
        };

        match self.store.add(Contact::new(name, phone, email)) {
            Ok(warnings) => {
                for warning in warnings {
                    writeln!(self.output, "Warning: {}", warning)?;
                }
                writeln!(self.output, "Contact added successfully!")
            }
            Err(e) => {
                for warning in e.warnings() {
                    writeln!(self.output, "Warning: {}", warning)?;
                }
                writeln!(self.output, "Error: {}", e)
            }
        }
    }

    fn list_all(&mut self) -> io::Result<()> {
        if self.store.is_empty() {
            return writeln!(self.output, "No contacts found!");
        }

        let rule = "=".repeat(WIDE_RULE);
        writeln!(self.output)?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "                    ALL CONTACTS")?;
        writeln!(self.output, "{}", rule)?;
        for (i, contact) in self.store.iter().enumerate() {
            writeln!(self.output, "[{}] {}", i + 1, contact)?;
        }
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "Total contacts: {}", self.store.len())
    }

    fn search(&mut self) -> io::Result<()> {
        self.section("SEARCH CONTACTS")?;

        let Some(keyword) = self.prompt("Enter search keyword (name/phone/email): ")? else {
            return Ok(());
        };
        if keyword.trim().is_empty() {
            return writeln!(self.output, "Please enter a valid search keyword!");
        }

        let results = self.store.search(&keyword);
        if results.is_empty() {
            return writeln!(self.output, "No contacts found matching: {}", keyword);
        }

        let rule = "=".repeat(WIDE_RULE);
        writeln!(self.output)?;
        writeln!(self.output, "{}", rule)?;
        writeln!(
            self.output,
            "           SEARCH RESULTS FOR: {}",
            keyword.to_uppercase()
        )?;
        writeln!(self.output, "{}", rule)?;
        for (index, contact) in &results {
            writeln!(self.output, "[{}] {}", index + 1, contact)?;
        }
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "Found {} contact(s)", results.len())
    }

    fn update_contact(&mut self) -> io::Result<()> {
        self.section("UPDATE CONTACT")?;

        if self.store.is_empty() {
            return writeln!(self.output, "No contacts available to update!");
        }

        self.list_all()?;
        let Some(index) = self.prompt_index("\nEnter contact number to update: ")? else {
            return Ok(());
        };

        let current = match self.store.get(index) {
            Ok(contact) => contact.clone(),
            Err(e) => return writeln!(self.output, "Error: {}", e),
        };
        writeln!(self.output, "Current contact: {}", current)?;
        writeln!(
            self.output,
            "Enter new details (press Enter to keep current value):"
        )?;

        let mut updated = current.clone();
        let Some(name) = self.prompt(&format!("Name [{}]: ", current.name()))? else {
            return Ok(());
        };
        if !name.trim().is_empty() {
            updated.set_name(&name);
        }
        let Some(phone) = self.prompt(&format!("Phone [{}]: ", current.phone()))? else {
            return Ok(());
        };
        if !phone.trim().is_empty() {
            updated.set_phone(&phone);
        }
        let Some(email) = self.prompt(&format!("Email [{}]: ", current.email()))? else {
            return Ok(());
        };
        if !email.trim().is_empty() {
            updated.set_email(&email);
        }

        match self.store.update(index, updated) {
            Ok(()) => writeln!(self.output, "Contact updated successfully!"),
            Err(e) => writeln!(self.output, "Error: {}", e),
        }
    }

    fn delete_contact(&mut self) -> io::Result<()> {
        self.section("DELETE CONTACT")?;

        if self.store.is_empty() {
            return writeln!(self.output, "No contacts available to delete!");
        }

        self.list_all()?;
        let Some(index) = self.prompt_index("\nEnter contact number to delete: ")? else {
            return Ok(());
        };

        let name = match self.store.get(index) {
            Ok(contact) => contact.name().to_string(),
            Err(e) => return writeln!(self.output, "Error: {}", e),
        };
        let Some(confirmation) =
            self.prompt(&format!("Are you sure you want to delete '{}'? (y/N): ", name))?
        else {
            return Ok(());
        };

        if !confirmation.to_lowercase().starts_with('y') {
            return writeln!(self.output, "Delete operation cancelled.");
        }

        match self.store.remove(index) {
            Ok(removed) => writeln!(self.output, "Contact deleted: {}", removed.name()),
            Err(e) => writeln!(self.output, "Error: {}", e),
        }
    }

    fn sort(&mut self) -> io::Result<()> {
        self.section("SORT CONTACTS")?;
        writeln!(self.output, "1. Sort by Name")?;
        writeln!(self.output, "2. Sort by Phone")?;

        let Some(choice) = self.prompt("Enter your choice: ")? else {
            return Ok(());
        };

        match choice.trim() {
            "1" => {
                self.store.sort_by_name();
                writeln!(self.output, "Contacts sorted by name!")?;
            }
            "2" => {
                self.store.sort_by_phone();
                writeln!(self.output, "Contacts sorted by phone!")?;
            }
            _ => return writeln!(self.output, "Invalid choice!"),
        }
        self.list_all()
    }

    fn export(&mut self) -> io::Result<()> {
        self.section("EXPORT CONTACTS")?;

        if self.store.is_empty() {
            return writeln!(self.output, "No contacts to export!");
        }

        let Some(filename) =
            self.prompt_file("Enter filename (without extension): ", Some(".csv"))?
        else {
            return Ok(());
        };

        match self.store.export_to(&filename) {
            Ok(()) => writeln!(
                self.output,
                "Contacts exported to {} successfully!",
                filename
            ),
            Err(e) => {
                tracing::warn!(path = %filename, error = %e, "Export failed");
                writeln!(self.output, "Error exporting contacts: {}", e)
            }
        }
    }

    fn import(&mut self) -> io::Result<()> {
        self.section("IMPORT CONTACTS")?;

        let Some(filename) = self.prompt_file("Enter filename (with .csv extension): ", None)? else {
            return Ok(());
        };

        match self.store.import_with_report(&filename) {
            Ok(report) => {
                writeln!(
                    self.output,
                    "Imported {} contacts from {}",
                    report.imported, filename
                )?;
                if !report.skipped.is_empty() {
                    writeln!(self.output, "Skipped {} line(s)", report.skipped.len())?;
                }
                Ok(())
            }
            Err(e) => {
                tracing::warn!(path = %filename, error = %e, "Import failed");
                writeln!(self.output, "Error importing contacts: {}", e)
            }
        }
    }

    fn show_stats(&mut self) -> io::Result<()> {
        self.section("STATISTICS")?;

        let stats = self.store.stats();
        writeln!(self.output, "Total Contacts: {}", stats.total)?;
        if stats.total > 0 {
            writeln!(self.output, "Contacts with valid email: {}", stats.valid_emails)?;
            writeln!(self.output, "Contacts with valid phone: {}", stats.valid_phones)?;
        }
        Ok(())
    }
}
