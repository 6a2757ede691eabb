//! Integration tests for CSV export and import.
//!
//! These tests validate the file format written by `export_to`, the lenient
//! line handling of `import_from`, and round trips through a temporary file.

mod common;
use common::{fixtures::*, *};
use contact_vault::{Contact, ContactStore, SkipReason, SkippedRow, StoreError};
use std::fs;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_export_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");
    let store = store_with(&SAMPLE_ROWS[..2]);

    store.export_to(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "Name,Phone,Email\n\
         \"John Doe\",\"1234567890\",\"john.doe@email.com\"\n\
         \"Jane Smith\",\"9876543210\",\"jane.smith@gmail.com\"\n"
    );
}

#[test]
fn test_export_empty_store_writes_header_only() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");

    ContactStore::new().export_to(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "Name,Phone,Email\n");
}

#[test]
fn test_export_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "old.csv", &"stale line\n".repeat(50));

    store_with(&SAMPLE_ROWS[..1]).export_to(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 2);
    assert!(!contents.contains("stale"));
}

#[test]
fn test_export_follows_current_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sorted.csv");
    let mut store = store_with(&SAMPLE_ROWS);
    store.sort_by_name();

    store.export_to(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let firsts: Vec<&str> = contents.lines().skip(1).collect();
    assert!(firsts[0].starts_with("\"Alice Johnson\""));
    assert!(firsts[2].starts_with("\"John Doe\""));
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("out.csv");

    let result = store_with(&SAMPLE_ROWS).export_to(&path);
    assert!(matches!(result, Err(StoreError::Io(_))));
}

#[test]
fn test_import_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let mut store = ContactStore::new();

    let result = store.import_from(dir.path().join("missing.csv"));
    assert!(matches!(result, Err(StoreError::Io(_))));
    assert!(store.is_empty());
}

#[test]
fn test_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("round.csv");

    let original = store_with(&[
        ("John Doe", "1234567890", "john@x.com"),
        ("Ann", "12", "not-an-email"),
        ("Zoë Ünïcode", "+441234567890", "zoe@example.co.uk"),
    ]);
    original.export_to(&path).unwrap();

    let mut restored = ContactStore::new();
    let imported = restored.import_from(&path).unwrap();

    assert_eq!(imported, 3);
    assert_eq!(restored.contacts(), original.contacts());
}

/// Commas and quotes inside fields do not survive a round trip.
#[test]
fn test_round_trip_corrupts_commas_and_quotes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lossy.csv");

    let original = store_with(&[
        ("Doe, John", "1111111111", "john@x.com"),
        ("Jane \"JJ\" Smith", "2222222222", "jane@x.com"),
    ]);
    original.export_to(&path).unwrap();

    let mut restored = ContactStore::new();
    let report = restored.import_with_report(&path).unwrap();

    // the comma splits the first row into four fields
    assert_eq!(report.imported, 1);
    assert_eq!(
        report.skipped,
        vec![SkippedRow {
            line: 2,
            reason: SkipReason::WrongFieldCount(4)
        }]
    );
    // quotes are stripped from the second
    assert_eq!(restored.get(0).unwrap().name(), "Jane JJ Smith");
}

#[test]
fn test_import_skips_header_unconditionally() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "no_header.csv",
        "Ann,1234567890,ann@x.com\nBob,0987654321,bob@x.com\n",
    );

    let mut store = ContactStore::new();
    assert_eq!(store.import_from(&path).unwrap(), 1);
    assert_eq!(store.get(0).unwrap().name(), "Bob");
}

/// Blank lines are ignored without shifting the reported line numbers.
#[test]
fn test_import_report_lists_dropped_lines() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "mixed.csv",
        "whatever header\n\
         \"Ann\",\"1234567890\",\"ann@x.com\"\n\
         only,two\n\
         \n\
         \"\",\"5555555555\",\"blank@x.com\"\n\
         Dup,1234567890,other@x.com\n\
         Case,7777777777,ANN@X.COM\n\
         a,b,c,d\n\
         Trailing,8888888888,t@x.com,,\n",
    );

    let mut store = ContactStore::new();
    let report = store.import_with_report(&path).unwrap();

    assert_eq!(report.imported, 2);
    assert_eq!(names(&store), vec!["Ann", "Trailing"]);
    assert_eq!(
        report.skipped,
        vec![
            SkippedRow { line: 3, reason: SkipReason::WrongFieldCount(2) },
            SkippedRow { line: 5, reason: SkipReason::Invalid },
            SkippedRow { line: 6, reason: SkipReason::Duplicate },
            SkippedRow { line: 7, reason: SkipReason::Duplicate },
            SkippedRow { line: 8, reason: SkipReason::WrongFieldCount(4) },
        ]
    );
}

#[test]
fn test_import_appends_and_checks_existing_members() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "more.csv",
        "Name,Phone,Email\n\
         John Again,1234567890,again@x.com\n\
         New Person,3213213210,new@x.com\n",
    );

    let mut store = store_with(&SAMPLE_ROWS);
    assert_eq!(store.import_from(&path).unwrap(), 1);
    assert_eq!(store.len(), 4);
    assert_eq!(store.get(3).unwrap(), &Contact::new("New Person", "3213213210", "new@x.com"));
}

#[test]
fn test_import_handles_crlf_and_invalid_utf8() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("windows.csv");
    let mut bytes = b"Name,Phone,Email\r\nAnn,1234567890,ann@x.com\r\n".to_vec();
    bytes.extend_from_slice(b"B\xFFb,0987654321,bob@x.com\r\n");
    fs::write(&path, bytes).unwrap();

    let mut store = ContactStore::new();
    assert_eq!(store.import_from(&path).unwrap(), 2);
    assert_eq!(store.get(0).unwrap().email(), "ann@x.com");
    assert_eq!(store.get(1).unwrap().name(), "B\u{FFFD}b");
}

/// Old Mac-style files end every line with a bare carriage return.
#[test]
fn test_import_splits_on_lone_carriage_return() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "classic_mac.csv",
        "Name,Phone,Email\rAnn,1234567890,ann@x.com\rBob,0987654321,bob@x.com\r",
    );

    let mut store = ContactStore::new();
    assert_eq!(store.import_from(&path).unwrap(), 2);
    assert_eq!(names(&store), vec!["Ann", "Bob"]);
}

#[test]
fn test_import_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "empty.csv", "");

    let mut store = ContactStore::new();
    assert_eq!(store.import_from(&path).unwrap(), 0);
    assert!(store.is_empty());
}
