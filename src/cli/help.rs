//! Help text for the roster notifier
//!
//! The flags are documented with a clap derive definition so the help output
//! stays in clap's familiar format. Token scanning itself is done by
//! [`parse_args`](super::args::parse_args), which rejoins quoted subjects
//! and applies last-one-wins between competing flags.

use crate::constants::PROGRAM_NAME;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Flag reference rendered as help output
///
/// Reads a tab-separated roster file with membership information, groups
/// members into households and creates personal messages for every
/// recipient, by email or as a letter.
#[allow(dead_code)]
#[derive(Debug, Clone, Parser)]
#[command(
    name = PROGRAM_NAME,
    version,
    about = "Send information to the members of an association, by email or letter",
    after_help = "Enclose a subject of several words in quotes, \\\"like this\\\", \
                  so the quotes reach the program."
)]
struct HelpArgs {
    /// Mandatory. The tab-separated roster file with members to read from
    #[arg(long = "input", value_name = "INPUTFILE")]
    input: PathBuf,

    /// Mandatory. Where to save generated letters; created if missing
    #[arg(long = "output", value_name = "OUTPUTFOLDER")]
    output: PathBuf,

    /// The subject of emails sent. Prompted for when missing and emails may be sent
    #[arg(long = "email-subject", value_name = "STRING")]
    email_subject: Option<String>,

    /// Only consider the given comma-separated household numbers
    ///
    /// Other arguments (such as --only-non-payers) apply in addition and may
    /// narrow the households down further.
    #[arg(long = "household-numbers", value_name = "LIST")]
    household_numbers: Option<String>,

    /// Only consider the households who have not paid
    #[arg(long = "only-non-payers")]
    only_non_payers: bool,

    /// Every household is parsed (default)
    #[arg(long = "parse-all")]
    parse_all: bool,

    /// Only the households who have an email are parsed
    #[arg(long = "parse-those-with-emails")]
    parse_those_with_emails: bool,

    /// Only the households who do not have an email are parsed
    #[arg(long = "parse-those-without-emails")]
    parse_those_without_emails: bool,

    /// Create a letter for every household and email every household with an address (default)
    #[arg(long = "output-pdf-and-send-email")]
    output_pdf_and_send_email: bool,

    /// Create a letter for every household, but send no emails
    #[arg(long = "output-pdf-only")]
    output_pdf_only: bool,

    /// Email households that have an address; create a letter for the rest
    #[arg(long = "only-send-email-where-possible")]
    only_send_email_where_possible: bool,
}

/// Render the help text
pub fn help_text() -> String {
    HelpArgs::command().render_long_help().to_string()
}
