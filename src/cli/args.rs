//! Command-line argument scanning for the roster notifier
//!
//! Arguments are scanned left to right with a single cursor. Each flag may
//! consume the tokens that follow it, and the cursor always moves past
//! everything consumed. A quoted email subject that the shell split into
//! several tokens is joined back together here.

use crate::app::models::{ChannelPolicy, MemberFilter};
use crate::app::services::recipient_selector::RecipientFilter;
use crate::error::ArgumentError;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

const QUOTE: char = '"';

/// Fully validated run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Roster file to read
    pub input_file: PathBuf,

    /// Directory that receives generated letters and the recipient manifest
    pub output_directory: PathBuf,

    /// Email subject; empty when not given on the command line
    pub email_subject: String,

    pub only_non_payers: bool,

    pub member_filter: MemberFilter,

    pub channel_policy: ChannelPolicy,

    /// Household-number allowlist in input order; empty means all
    pub household_numbers: Vec<u32>,
}

impl Configuration {
    /// Household filters described by this configuration
    pub fn recipient_filter(&self) -> RecipientFilter {
        RecipientFilter {
            only_non_payers: self.only_non_payers,
            household_numbers: self.household_numbers.clone(),
            member_filter: self.member_filter,
        }
    }
}

/// What the command line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// A lone `--help` or `-h`
    Help,
    Run(Configuration),
}

/// Wrapper for parsing comma-separated household number lists
///
/// Spaces are removed and empty segments discarded; order and duplicates
/// are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseholdNumbers(pub Vec<u32>);

impl FromStr for HouseholdNumbers {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.replace(' ', "")
            .split(',')
            .filter(|segment| !segment.is_empty())
            .map(|segment| segment.parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map(HouseholdNumbers)
            .map_err(|_| ArgumentError::InvalidHouseholdNumbers {
                value: s.to_string(),
            })
    }
}

/// Cursor over the argument tokens
struct ArgCursor<'a, S> {
    tokens: &'a [S],
    index: usize,
}

impl<'a, S: AsRef<str>> ArgCursor<'a, S> {
    fn new(tokens: &'a [S]) -> Self {
        Self { tokens, index: 0 }
    }

    fn token(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).map(AsRef::as_ref)
    }

    /// Consume the next token
    fn advance(&mut self) -> Option<&'a str> {
        let token = self.token(self.index)?;
        self.index += 1;
        Some(token)
    }

    /// Peek at the value following a flag, rejecting a missing or dashed one
    fn peek_value(
        &self,
        flag: &'static str,
        expected: &'static str,
    ) -> Result<&'a str, ArgumentError> {
        match self.token(self.index) {
            Some(value) if !value.starts_with("--") => Ok(value),
            _ => Err(ArgumentError::MissingValue { flag, expected }),
        }
    }

    /// Consume the single value following a flag
    fn value(
        &mut self,
        flag: &'static str,
        expected: &'static str,
    ) -> Result<&'a str, ArgumentError> {
        let value = self.peek_value(flag, expected)?;
        self.index += 1;
        Ok(value)
    }

    /// Consume an email subject, joining a quoted subject spread over tokens
    fn subject(&mut self) -> Result<String, ArgumentError> {
        let first = self.peek_value("--email-subject", "a valid string")?;
        if !first.starts_with(QUOTE) {
            self.index += 1;
            return Ok(first.to_string());
        }

        let start = self.index;
        let end = (start..self.tokens.len())
            .find(|&i| self.token(i).is_some_and(|token| token.ends_with(QUOTE)))
            .ok_or(ArgumentError::UnterminatedSubject)?;

        let joined = self.tokens[start..=end]
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(" ");
        self.index = end + 1;

        Ok(strip_quotes(&joined).to_string())
    }
}

/// Remove one surrounding pair of quotes, if both are present
fn strip_quotes(text: &str) -> &str {
    if text.len() >= 2 {
        if let Some(inner) = text
            .strip_prefix(QUOTE)
            .and_then(|rest| rest.strip_suffix(QUOTE))
        {
            return inner;
        }
    }
    text
}

fn parse_input(value: &str) -> Result<PathBuf, ArgumentError> {
    let path = PathBuf::from(value);
    if !path.is_file() {
        return Err(ArgumentError::InputNotFound { path });
    }
    Ok(path)
}

fn parse_output(value: &str) -> Result<PathBuf, ArgumentError> {
    let path = PathBuf::from(value);
    if path.exists() && !path.is_dir() {
        return Err(ArgumentError::OutputNotDirectory { path });
    }
    Ok(path)
}

/// Parse command-line tokens (without the program name)
///
/// Flags are matched case-insensitively. Boolean choices within one
/// category are last-one-wins. `--input` and `--output` are mandatory.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Invocation, ArgumentError> {
    if let [only] = args {
        let only = only.as_ref().to_lowercase();
        if only == "--help" || only == "-h" {
            return Ok(Invocation::Help);
        }
    }

    let mut input_file = None;
    let mut output_directory = None;
    let mut email_subject = String::new();
    let mut only_non_payers = false;
    let mut member_filter = MemberFilter::default();
    let mut channel_policy = ChannelPolicy::default();
    let mut household_numbers = Vec::new();

    let mut cursor = ArgCursor::new(args);
    while let Some(token) = cursor.advance() {
        match token.to_lowercase().as_str() {
            "--input" => {
                let value = cursor.value("--input", "a valid file name")?;
                input_file = Some(parse_input(value)?);
            }
            "--output" => {
                let value = cursor.value("--output", "a valid directory name")?;
                output_directory = Some(parse_output(value)?);
            }
            "--email-subject" => {
                email_subject = cursor.subject()?;
            }
            "--household-numbers" => {
                let value =
                    cursor.value("--household-numbers", "a valid list of numbers")?;
                household_numbers = value.parse::<HouseholdNumbers>()?.0;
            }
            "--only-non-payers" => only_non_payers = true,
            "--parse-all" => member_filter = MemberFilter::All,
            "--parse-those-with-emails" => member_filter = MemberFilter::WithEmails,
            "--parse-those-without-emails" => member_filter = MemberFilter::WithoutEmails,
            "--output-pdf-and-send-email" => channel_policy = ChannelPolicy::PdfAndEmail,
            "--output-pdf-only" => channel_policy = ChannelPolicy::PdfOnly,
            "--only-send-email-where-possible" => channel_policy = ChannelPolicy::EmailOverPdf,
            _ => {
                return Err(ArgumentError::UnknownArgument {
                    argument: token.to_string(),
                });
            }
        }
    }

    let (Some(input_file), Some(output_directory)) = (input_file, output_directory) else {
        return Err(ArgumentError::MissingMandatory);
    };

    let configuration = Configuration {
        input_file,
        output_directory,
        email_subject,
        only_non_payers,
        member_filter,
        channel_policy,
        household_numbers,
    };
    debug!("Parsed configuration: {:?}", configuration);
    Ok(Invocation::Run(configuration))
}
