//! Configuration management and validation.
//!
//! Provides the configuration structure for roster parsing: the field
//! layout and how malformed lines are handled.

use crate::constants::{EMAIL_SEPARATOR, FIELD_SEPARATOR};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How the roster parser treats a line it cannot turn into a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParseMode {
    /// Skip the line with a warning and continue
    #[default]
    Lenient,
    /// Abort parsing at the first malformed line
    Strict,
}

/// Configuration for reading a roster file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Character separating the positional fields of a record
    pub field_separator: char,

    /// Character separating several addresses within the email field
    pub email_separator: char,

    /// Treatment of malformed lines
    pub parse_mode: ParseMode,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            field_separator: FIELD_SEPARATOR,
            email_separator: EMAIL_SEPARATOR,
            parse_mode: ParseMode::Lenient,
        }
    }
}

impl RosterConfig {
    /// Set the field separator
    pub fn with_field_separator(mut self, separator: char) -> Self {
        self.field_separator = separator;
        self
    }

    /// Set the email separator
    pub fn with_email_separator(mut self, separator: char) -> Self {
        self.email_separator = separator;
        self
    }

    /// Abort at the first malformed line instead of skipping it
    pub fn strict(mut self) -> Self {
        self.parse_mode = ParseMode::Strict;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // Fields are trimmed, so any whitespace separator other than tab would be eaten
        if self.field_separator.is_whitespace() && self.field_separator != '\t' {
            return Err(Error::configuration(format!(
                "Field separator {:?} must not be whitespace other than tab",
                self.field_separator
            )));
        }

        if self.field_separator == self.email_separator {
            return Err(Error::configuration(format!(
                "Field separator and email separator must differ (both {:?})",
                self.field_separator
            )));
        }

        debug!(
            "Roster configuration validated: field separator {:?}, email separator {:?}, {:?} mode",
            self.field_separator, self.email_separator, self.parse_mode
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RosterConfig::default();
        assert_eq!(config.field_separator, '\t');
        assert_eq!(config.email_separator, ';');
        assert_eq!(config.parse_mode, ParseMode::Lenient);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = RosterConfig::default()
            .with_field_separator('|')
            .with_email_separator(',')
            .strict();

        assert_eq!(config.field_separator, '|');
        assert_eq!(config.email_separator, ',');
        assert_eq!(config.parse_mode, ParseMode::Strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_space_separator() {
        let config = RosterConfig::default().with_field_separator(' ');
        assert!(matches!(
            config.validate(),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_rejects_identical_separators() {
        let config = RosterConfig::default().with_email_separator('\t');
        assert!(config.validate().is_err());
    }
}
