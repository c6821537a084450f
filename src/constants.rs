//! Application constants for the roster notifier
//!
//! This module contains the roster file layout, the closed membership type
//! vocabulary and default values used throughout the application.

// =============================================================================
// Roster File Layout
// =============================================================================

/// Field separator used by roster files
pub const FIELD_SEPARATOR: char = '\t';

/// Separator between several email addresses in a single email field
pub const EMAIL_SEPARATOR: char = ';';

/// Number of positional fields in every roster record
pub const FIELD_COUNT: usize = 10;

/// Positional field indices within a roster record
pub mod fields {
    pub const HOUSEHOLD_NO: usize = 0;
    pub const FIRST_NAME: usize = 1;
    pub const SURNAME: usize = 2;
    pub const TYPE_CODE: usize = 3;
    pub const STREET: usize = 4;
    pub const ADDRESS: usize = 5;
    pub const TELEPHONE: usize = 6;
    pub const MOBILE: usize = 7;
    pub const EMAIL: usize = 8;
    pub const PAID: usize = 9;
}

// =============================================================================
// Membership Type Vocabulary
// =============================================================================

/// Canonical membership type labels
pub mod membership_labels {
    pub const STUDENT: &str = "Student";
    pub const YOUTH: &str = "Ungdom";
    pub const HONORARY: &str = "Hedersmedlem";
    pub const FAMILY: &str = "Familj";
    pub const LEGAL_ENTITY: &str = "Juridisk person";

    /// Label used for an empty type code and for unrecognised codes
    pub const INDIVIDUAL: &str = "Enskild medlem";
}

/// Raw paid-flag token that means "has paid", besides a case-insensitive "true"
pub const PAID_NUMERIC_TOKEN: &str = "1";

// =============================================================================
// Output and Logging
// =============================================================================

/// File written to the output directory listing the selected recipients
pub const MANIFEST_FILE_NAME: &str = "recipients.json";

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "roster_notifier=info";

/// Program name shown in help output
pub const PROGRAM_NAME: &str = "roster_notifier";
