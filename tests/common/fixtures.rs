//! Sample contacts used across integration tests.

/// Three well-formed contacts.
#[allow(dead_code)]
pub const SAMPLE_ROWS: [(&str, &str, &str); 3] = [
    ("John Doe", "1234567890", "john.doe@email.com"),
    ("Jane Smith", "9876543210", "jane.smith@gmail.com"),
    ("Alice Johnson", "5555123456", "alice.j@company.com"),
];

/// Generate `count` distinct, valid contact rows.
#[allow(dead_code)]
pub fn generated_rows(count: usize) -> Vec<(String, String, String)> {
    (0..count)
        .map(|i| {
            (
                format!("Person {:04}", count - i),
                format!("{:010}", 5_000_000_000u64 + i as u64),
                format!("person{}@example.com", i),
            )
        })
        .collect()
}
