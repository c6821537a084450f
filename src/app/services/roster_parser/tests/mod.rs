//! Test utilities for roster parser testing
//!
//! This module provides fixture builders and helper functions used across
//! the roster parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;


/// Join fields with tabs into a roster line
pub fn roster_line(fields: &[&str]) -> String {
    fields.join("\t")
}

/// A well-formed line for the given household number and first name
pub fn member_line(household_no: &str, first_name: &str) -> String {
    roster_line(&[
        household_no,
        first_name,
        "Lovelace",
        "f",
        "Streetname 71",
        "123 City",
        "1234",
        "4321",
        "ada@lovelace.com",
        "1",
    ])
}

/// Helper to create roster content with malformed and blank lines mixed in
pub fn create_test_roster() -> String {
    [
        member_line("1", "Ada"),
        String::new(),
        "Nonsense".to_string(),
        member_line("1", "Byron"),
        "   \t  ".to_string(),
        roster_line(&["2", "Charles", "Babbage"]),
        roster_line(&[
            "3", "Mary", "Somerville", "xyz", "", "", "", "", "", "0",
        ]),
    ]
    .join("\n")
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
