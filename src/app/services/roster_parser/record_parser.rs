//! Individual roster record parsing
//!
//! This module handles the parsing of a single roster line into a member,
//! including type code translation and the recoverable failure cases.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use super::field_parsers::{first_email, normalize_field, parse_household_no, parse_paid_flag};
use super::membership_type::translate;
use crate::app::models::Member;
use crate::config::RosterConfig;
use crate::constants::{FIELD_COUNT, fields};

/// Why a roster line produced no member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// First field was missing or not a non-negative integer
    InvalidHouseholdNumber { value: String },
    /// Fewer positional fields than a record requires
    MissingFields { found: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHouseholdNumber { value } => {
                write!(f, "household number '{}' is not a valid number", value)
            }
            Self::MissingFields { found } => {
                write!(f, "expected {} fields, found {}", FIELD_COUNT, found)
            }
        }
    }
}

/// Non-fatal observation made while parsing a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordWarning {
    /// Type code outside the vocabulary; the member got the default label
    UnrecognizedType { code: String, member: String },
}

/// Outcome of parsing one roster line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Parsed {
        member: Member,
        warning: Option<RecordWarning>,
    },
    Skipped(SkipReason),
}

impl RecordOutcome {
    /// The parsed member, if any
    pub fn member(&self) -> Option<&Member> {
        match self {
            Self::Parsed { member, .. } => Some(member),
            Self::Skipped(_) => None,
        }
    }

    pub fn into_member(self) -> Option<Member> {
        match self {
            Self::Parsed { member, .. } => Some(member),
            Self::Skipped(_) => None,
        }
    }
}

/// Parse a single roster line
///
/// Every field is trimmed and has its interior whitespace collapsed. The
/// household number is checked first, then the number of fields; extra
/// trailing fields are ignored.
pub fn parse_record(line: &str, config: &RosterConfig) -> RecordOutcome {
    let values: Vec<String> = line
        .split(config.field_separator)
        .map(normalize_field)
        .collect();

    let raw_household_no = values
        .get(fields::HOUSEHOLD_NO)
        .map(String::as_str)
        .unwrap_or_default();
    let Some(household_no) = parse_household_no(raw_household_no) else {
        return RecordOutcome::Skipped(SkipReason::InvalidHouseholdNumber {
            value: raw_household_no.to_string(),
        });
    };

    if values.len() < FIELD_COUNT {
        return RecordOutcome::Skipped(SkipReason::MissingFields {
            found: values.len(),
        });
    }
    if values.len() > FIELD_COUNT {
        debug!(
            "Ignoring {} extra fields for household {}",
            values.len() - FIELD_COUNT,
            household_no
        );
    }

    let first_name = values[fields::FIRST_NAME].clone();
    let surname = values[fields::SURNAME].clone();
    let type_code = &values[fields::TYPE_CODE];

    let translation = translate(type_code);
    let warning = if translation.recognized {
        None
    } else {
        let member = format!("{} {}", first_name, surname);
        warn!(
            "Could not understand member type '{}' for member {}, will treat as '{}'",
            type_code, member, translation.label
        );
        Some(RecordWarning::UnrecognizedType {
            code: type_code.clone(),
            member,
        })
    };

    let member = Member {
        household_no,
        first_name,
        surname,
        membership_type: translation.label.to_string(),
        street: values[fields::STREET].clone(),
        address: values[fields::ADDRESS].clone(),
        telephone: values[fields::TELEPHONE].clone(),
        mobile: values[fields::MOBILE].clone(),
        email: first_email(&values[fields::EMAIL], config.email_separator),
        has_paid: parse_paid_flag(&values[fields::PAID]),
    };

    RecordOutcome::Parsed { member, warning }
}
