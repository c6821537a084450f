//! Notify command implementation
//!
//! Drives one run: parse the roster, group households, apply the filters
//! and hand the recipients over to the channel sink.

use std::time::Instant;
use tracing::{info, warn};

use super::shared::NotifyStats;
use crate::Result;
use crate::app::services::dispatch::ChannelSink;
use crate::app::services::household_grouper::group_households;
use crate::app::services::recipient_selector::Recipients;
use crate::app::services::roster_parser::RosterParser;
use crate::cli::args::Configuration;

/// Run the notification pipeline against a sink
pub fn run_notify(
    configuration: &Configuration,
    email_subject: &str,
    sink: &mut dyn ChannelSink,
) -> Result<NotifyStats> {
    let start_time = Instant::now();

    let parsed = RosterParser::default().parse_file(&configuration.input_file)?;
    if !parsed.stats.is_clean() {
        warn!(
            "{} of {} lines in {} could not be used",
            parsed.stats.records_skipped,
            parsed.stats.lines_read,
            configuration.input_file.display()
        );
    }
    let members_parsed = parsed.stats.members_parsed;
    let records_skipped = parsed.stats.records_skipped;

    let households = group_households(parsed.members)?;
    info!("There are {} households in file", households.len());
    let households_parsed = households.len();

    let selected = configuration.recipient_filter().apply(households);
    let recipients = Recipients::select(&selected, configuration.channel_policy);

    for household in &recipients.email {
        sink.send_email(household, email_subject)?;
    }
    for household in &recipients.letter {
        sink.create_letter(household, &configuration.output_directory)?;
    }
    sink.finish(&configuration.output_directory)?;

    Ok(NotifyStats {
        members_parsed,
        records_skipped,
        households_parsed,
        households_selected: selected.len(),
        email_recipients: recipients.email.len(),
        letter_recipients: recipients.letter.len(),
        processing_time: start_time.elapsed(),
    })
}
