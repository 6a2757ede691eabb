//! Shared helpers for integration tests.

use contact_vault::{Contact, ContactStore};

pub mod fixtures;

/// Build a store from `(name, phone, email)` triples, asserting every add succeeds.
pub fn store_with(rows: &[(&str, &str, &str)]) -> ContactStore {
    let mut store = ContactStore::new();
    for (name, phone, email) in rows {
        store
            .add(Contact::new(*name, *phone, *email))
            .unwrap_or_else(|e| panic!("fixture {} rejected: {}", name, e));
    }
    store
}

/// Names in current store order.
#[allow(dead_code)]
pub fn names(store: &ContactStore) -> Vec<String> {
    store.iter().map(|c| c.name().to_string()).collect()
}

/// Assert that two contacts carry the same field values.
#[allow(dead_code)]
pub fn assert_same_fields(actual: &Contact, expected: &Contact) {
    assert_eq!(actual.name(), expected.name(), "name mismatch");
    assert_eq!(actual.phone(), expected.phone(), "phone mismatch");
    assert_eq!(actual.email(), expected.email(), "email mismatch");
}
