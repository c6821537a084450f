//! Command implementations for the roster notifier CLI
//!
//! This module contains the run logic and shared helpers for the CLI
//! interface. The pipeline itself lives in [`notify`].

pub mod notify;
pub mod shared;

pub use shared::NotifyStats;

use crate::Result;
use crate::app::services::dispatch::ManifestSink;
use crate::cli::args::Configuration;
use std::io;

/// Main command runner for the roster notifier
///
/// Resolves the email subject from stdin when needed, runs the pipeline
/// into a [`ManifestSink`] and prints the summary.
pub fn run(configuration: Configuration) -> Result<NotifyStats> {
    let email_subject = shared::resolve_email_subject(
        &configuration,
        &mut io::stdin().lock(),
        &mut io::stdout(),
    )?;

    let mut sink = ManifestSink::new();
    let stats = notify::run_notify(&configuration, &email_subject, &mut sink)?;
    stats.print_summary();
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{ChannelPolicy, MemberFilter};
    use crate::constants::MANIFEST_FILE_NAME;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_run_writes_manifest_without_prompting() {
        let mut roster = NamedTempFile::new().unwrap();
        writeln!(
            roster,
            "4\tAda\tLovelace\tEnskild medlem\tStreetname 71\t123 City\t\t\t\tfalse"
        )
        .unwrap();
        roster.flush().unwrap();
        let output = TempDir::new().unwrap();

        let configuration = Configuration {
            input_file: roster.path().to_path_buf(),
            output_directory: output.path().to_path_buf(),
            email_subject: String::new(),
            only_non_payers: false,
            member_filter: MemberFilter::WithoutEmails,
            channel_policy: ChannelPolicy::PdfAndEmail,
            household_numbers: Vec::new(),
        };

        let stats = run(configuration).unwrap();

        assert_eq!(stats.households_parsed, 1);
        assert_eq!(stats.letter_recipients, 1);
        assert!(output.path().join(MANIFEST_FILE_NAME).is_file());
    }
}
