//! Roster parser for tab-separated membership files
//!
//! This module turns raw roster lines into [`Member`](crate::app::models::Member)
//! records. Malformed lines are recoverable: they are reported as skipped
//! records with a reason rather than aborting the run (unless the parser is
//! configured for strict mode).
//!
//! ## Architecture
//!
//! - [`membership_type`] - Translation of short type codes to canonical labels
//! - [`field_parsers`] - Normalisation of individual fields
//! - [`record_parser`] - Parsing of a single roster line
//! - [`parser`] - Lazy line reader and file-level orchestration
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use roster_notifier::app::services::roster_parser::RosterParser;
//!
//! # fn example() -> roster_notifier::Result<()> {
//! let parser = RosterParser::default();
//! let result = parser.parse_file(std::path::Path::new("members.tsv"))?;
//!
//! println!("Parsed {} members from {} lines",
//!          result.stats.members_parsed,
//!          result.stats.lines_read);
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod membership_type;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use membership_type::{MembershipType, Translation, translate};
pub use parser::{ParsedLine, RosterParser, RosterReader};
pub use record_parser::{RecordOutcome, RecordWarning, SkipReason, parse_record};
pub use stats::{ParseResult, RosterStats, SkippedRecord};
