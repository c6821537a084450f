//! Shared components for CLI commands
//!
//! This module contains logging setup, the email subject prompt and the
//! run statistics reported at the end of a run.

use crate::app::models::MemberFilter;
use crate::cli::args::Configuration;
use crate::constants::DEFAULT_LOG_FILTER;
use crate::{Error, Result};
use colored::*;
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info};

/// Statistics for one notification run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotifyStats {
    /// Members parsed from the roster
    pub members_parsed: usize,
    /// Roster lines skipped as malformed
    pub records_skipped: usize,
    /// Households built from the roster
    pub households_parsed: usize,
    /// Households left after filtering
    pub households_selected: usize,
    /// Households handed over for email
    pub email_recipients: usize,
    /// Households handed over for a letter
    pub letter_recipients: usize,
    /// Total processing time
    pub processing_time: Duration,
}

impl NotifyStats {
    /// Print a human-readable summary to stdout
    pub fn print_summary(&self) {
        println!("\n{}", "Notification Summary".bright_green().bold());
        println!(
            "  Members parsed:      {}",
            self.members_parsed.to_string().bright_white().bold()
        );
        if self.records_skipped > 0 {
            println!(
                "  Lines skipped:       {}",
                self.records_skipped.to_string().yellow().bold()
            );
        }
        println!(
            "  Households:          {} ({} selected)",
            self.households_parsed.to_string().bright_white().bold(),
            self.households_selected
        );
        println!(
            "  Email recipients:    {}",
            self.email_recipients.to_string().cyan().bold()
        );
        println!(
            "  Letter recipients:   {}",
            self.letter_recipients.to_string().cyan().bold()
        );
        println!("  Time:                {:.2?}", self.processing_time);
    }
}

/// Set up structured logging
///
/// `RUST_LOG` takes precedence over the default filter.
pub fn setup_logging() -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;

    debug!("Logging initialized");
    Ok(())
}

/// Decide the email subject for the run
///
/// A subject given on the command line wins. Otherwise, unless only
/// households without email are wanted, the user is asked once.
pub fn resolve_email_subject<R: BufRead, W: Write>(
    configuration: &Configuration,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    if !configuration.email_subject.is_empty() {
        info!(
            "Will use this as email subject: '{}'",
            configuration.email_subject
        );
        return Ok(configuration.email_subject.clone());
    }
    if configuration.member_filter == MemberFilter::WithoutEmails {
        return Ok(String::new());
    }

    writeln!(output, "Please give a subject for the emails:")
        .and_then(|_| output.flush())
        .map_err(|e| Error::io("Failed to write subject prompt", e))?;

    let mut subject = String::new();
    input
        .read_line(&mut subject)
        .map_err(|e| Error::io("Failed to read email subject", e))?;
    let subject = subject.trim().to_string();

    info!("Will use this as email subject: '{}'", subject);
    Ok(subject)
}
