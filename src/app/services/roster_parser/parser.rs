//! Core roster parser implementation
//!
//! This module provides the lazy line reader and the file-level parser that
//! collects members and statistics according to the configured parse mode.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

use super::record_parser::{RecordOutcome, parse_record};
use super::stats::{ParseResult, RosterStats, SkippedRecord};
use crate::config::{ParseMode, RosterConfig};
use crate::{Error, Result};

/// One non-blank roster line and what it parsed into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// 1-based line number
    pub line_number: usize,

    pub line: String,

    pub outcome: RecordOutcome,
}

/// Lazy, finite sequence of parsed roster lines
///
/// Blank lines are skipped before parsing and only counted. I/O errors,
/// including invalid UTF-8, are yielded as errors.
pub struct RosterReader<R> {
    lines: std::io::Lines<R>,
    config: RosterConfig,
    line_number: usize,
    blank_lines: usize,
}

impl<R: BufRead> RosterReader<R> {
    pub fn new(reader: R, config: RosterConfig) -> Self {
        Self {
            lines: reader.lines(),
            config,
            line_number: 0,
            blank_lines: 0,
        }
    }

    /// Blank lines skipped so far
    pub fn blank_lines(&self) -> usize {
        self.blank_lines
    }
}

impl<R: BufRead> Iterator for RosterReader<R> {
    type Item = Result<ParsedLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    return Some(Err(Error::io(
                        format!("Failed to read roster line {}", self.line_number + 1),
                        e,
                    )));
                }
            };
            self.line_number += 1;

            if line.trim().is_empty() {
                self.blank_lines += 1;
                continue;
            }

            let outcome = parse_record(&line, &self.config);
            return Some(Ok(ParsedLine {
                line_number: self.line_number,
                line,
                outcome,
            }));
        }
    }
}

/// Roster file parser
///
/// Handles file reading and applies the parse mode: lenient parsing skips
/// malformed lines with a warning, strict parsing fails on the first one.
#[derive(Debug, Clone, Default)]
pub struct RosterParser {
    config: RosterConfig,
}

impl RosterParser {
    pub fn new(config: RosterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Parse a roster file and return members with statistics
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        info!("Parsing roster file: {}", path.display());

        let file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;
        let result = self.parse_reader(BufReader::new(file))?;

        info!(
            "Parsed {} members from {} lines in {}",
            result.stats.members_parsed,
            result.stats.lines_read,
            path.display()
        );
        Ok(result)
    }

    /// Parse roster content from any buffered reader
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<ParseResult> {
        self.config.validate()?;

        let mut stats = RosterStats::new();
        let mut members = Vec::new();
        let mut lines = RosterReader::new(reader, self.config.clone());

        for parsed in lines.by_ref() {
            let ParsedLine {
                line_number,
                line,
                outcome,
            } = parsed?;
            stats.lines_read += 1;

            match outcome {
                RecordOutcome::Parsed { member, warning } => {
                    if warning.is_some() {
                        stats.unrecognized_types += 1;
                    }
                    stats.members_parsed += 1;
                    members.push(member);
                }
                RecordOutcome::Skipped(reason) => {
                    if self.config.parse_mode == ParseMode::Strict {
                        return Err(Error::malformed_record(line_number, reason.to_string()));
                    }

                    warn!(
                        "Will ignore line {} since it could not be parsed ({}): '{}'",
                        line_number, reason, line
                    );
                    stats.record_skip(SkippedRecord {
                        line_number,
                        line,
                        reason,
                    });
                }
            }
        }

        stats.blank_lines = lines.blank_lines();
        debug!(
            "Roster parsing finished: {} parsed, {} skipped, {} blank",
            stats.members_parsed, stats.records_skipped, stats.blank_lines
        );

        Ok(ParseResult { members, stats })
    }
}
