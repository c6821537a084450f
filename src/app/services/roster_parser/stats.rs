//! Parsing statistics and result structures for roster processing
//!
//! This module provides types for tracking how many lines became members,
//! which lines were skipped and why.

use super::record_parser::SkipReason;
use crate::app::models::Member;
use serde::{Deserialize, Serialize};

/// Parsing result with members in file order and statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed members, in file order
    pub members: Vec<Member>,

    /// Parsing statistics
    pub stats: RosterStats,
}

/// A roster line that produced no member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    /// 1-based line number in the roster file
    pub line_number: usize,

    /// The raw line as read
    pub line: String,

    pub reason: SkipReason,
}

/// Roster parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterStats {
    /// Non-blank lines handed to the record parser
    pub lines_read: usize,

    /// Blank lines skipped without parsing
    pub blank_lines: usize,

    /// Number of members successfully parsed
    pub members_parsed: usize,

    /// Number of lines skipped as malformed
    pub records_skipped: usize,

    /// Members whose type code was not recognised
    pub unrecognized_types: usize,

    /// Details of every skipped line
    pub skipped: Vec<SkippedRecord>,
}

impl RosterStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate success rate as a percentage of non-blank lines
    pub fn success_rate(&self) -> f64 {
        if self.lines_read == 0 {
            0.0
        } else {
            (self.members_parsed as f64 / self.lines_read as f64) * 100.0
        }
    }

    /// Whether every non-blank line parsed without skip or warning
    pub fn is_clean(&self) -> bool {
        self.records_skipped == 0 && self.unrecognized_types == 0
    }

    pub(crate) fn record_skip(&mut self, skipped: SkippedRecord) {
        self.records_skipped += 1;
        self.skipped.push(skipped);
    }
}
