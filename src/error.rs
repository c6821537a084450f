//! Error handling for roster ingestion and argument parsing.
//!
//! Household invariant violations and argument errors have their own typed
//! enums so callers can match on the failing rule; both convert into the
//! crate-wide [`Error`].

use std::path::PathBuf;
use thiserror::Error;

/// Violation of a household invariant, raised while constructing a `Household`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HouseholdError {
    #[error("Encountered a household with no members")]
    Empty,

    #[error("The household with number {household_no} has no {property} values")]
    NoValues {
        household_no: u32,
        property: &'static str,
    },

    #[error("The household with number {household_no} has different {property} values")]
    DifferentValues {
        household_no: u32,
        property: &'static str,
    },

    #[error("The household with number {household_no} has blank values for property '{property}'")]
    BlankValues {
        household_no: u32,
        property: &'static str,
    },

    #[error(
        "The household with number {household_no} has several members that are not all of membership type '{family_label}'"
    )]
    NotAllFamily {
        household_no: u32,
        family_label: &'static str,
    },

    #[error("The household with number {household_no} has an email '{email}' that did not validate")]
    InvalidEmail { household_no: u32, email: String },
}

impl HouseholdError {
    /// Household number the violation refers to, if any
    pub fn household_no(&self) -> Option<u32> {
        match self {
            Self::Empty => None,
            Self::NoValues { household_no, .. }
            | Self::DifferentValues { household_no, .. }
            | Self::BlankValues { household_no, .. }
            | Self::NotAllFamily { household_no, .. }
            | Self::InvalidEmail { household_no, .. } => Some(*household_no),
        }
    }
}

/// Fatal command-line argument error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("The argument following '{flag}' must be {expected}")]
    MissingValue {
        flag: &'static str,
        expected: &'static str,
    },

    #[error("The argument following '--input' ('{path}') does not point to a file")]
    InputNotFound { path: PathBuf },

    #[error("The argument following '--output' ('{path}') points to a file, not a directory")]
    OutputNotDirectory { path: PathBuf },

    #[error(
        "The argument following '--email-subject' must be a valid string, enclosed \"like this\""
    )]
    UnterminatedSubject,

    #[error("The argument following '--household-numbers' ('{value}') must be a list of numbers")]
    InvalidHouseholdNumbers { value: String },

    #[error("Can't recognize argument '{argument}'")]
    UnknownArgument { argument: String },

    #[error(
        "You need to specify an input file ('--input <file>') and output folder ('--output <folder>')"
    )]
    MissingMandatory,
}

/// Comprehensive error type for roster notifier operations
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Household invariant violation
    #[error(transparent)]
    Household(#[from] HouseholdError),

    /// Command-line argument error
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    /// Malformed roster line, only raised in strict parse mode
    #[error("Malformed record on line {line_number}: {reason}")]
    MalformedRecord { line_number: usize, reason: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Recipient manifest could not be serialized
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a malformed record error
    pub fn malformed_record(line_number: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line_number,
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Whether the help text should be shown alongside this error
    pub fn shows_help(&self) -> bool {
        matches!(self, Self::Argument(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
