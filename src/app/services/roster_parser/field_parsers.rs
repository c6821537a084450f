//! Field parsing utilities for roster records
//!
//! This module provides helper functions for normalising and interpreting
//! individual positional fields of a roster line.

use crate::constants::PAID_NUMERIC_TOKEN;
use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is a valid regex"));

/// Trim a field and collapse interior whitespace runs to a single space
pub fn normalize_field(raw: &str) -> String {
    WHITESPACE_RUN.replace_all(raw.trim(), " ").into_owned()
}

/// Parse a normalised household number
pub fn parse_household_no(value: &str) -> Option<u32> {
    value.parse::<u32>().ok()
}

/// Interpret a normalised paid-flag token
///
/// True for a case-insensitive "true" or for "1"; every other value,
/// including an empty one, means not paid.
pub fn parse_paid_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == PAID_NUMERIC_TOKEN
}

/// Keep only the first address of a possibly multi-address email field
pub fn first_email(value: &str, separator: char) -> String {
    value
        .split(separator)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_field() {
        assert_eq!(normalize_field("  Streetname   71 "), "Streetname 71");
        assert_eq!(normalize_field(" Ada   "), "Ada");
        assert_eq!(normalize_field("Depa \u{a0} Epa"), "Depa Epa");
        assert_eq!(normalize_field("   "), "");
    }

    #[test]
    fn test_parse_household_no() {
        assert_eq!(parse_household_no("2"), Some(2));
        assert_eq!(parse_household_no("071"), Some(71));
        assert_eq!(parse_household_no("Nonsense"), None);
        assert_eq!(parse_household_no(""), None);
        assert_eq!(parse_household_no("-1"), None);
    }

    #[test]
    fn test_paid_flag_normalisation() {
        for paid in ["1", "true", "TRUE", "True"] {
            assert!(parse_paid_flag(paid), "{paid:?} should mean paid");
        }
        for unpaid in ["0", "", "false", "yes", "11", "2"] {
            assert!(!parse_paid_flag(unpaid), "{unpaid:?} should mean unpaid");
        }
    }

    #[test]
    fn test_first_email_keeps_first_address() {
        assert_eq!(
            first_email("ada@lovelace.com ; bepa@lovelace.com", ';'),
            "ada@lovelace.com"
        );
        assert_eq!(first_email("ada@lovelace.com", ';'), "ada@lovelace.com");
        assert_eq!(first_email("", ';'), "");
        assert_eq!(first_email(";bepa@lovelace.com", ';'), "");
    }
}
