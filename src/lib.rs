//! Roster Notifier Library
//!
//! A Rust library for turning an association's tab-separated member roster
//! into validated households and selecting who is notified by email and who
//! by letter.
//!
//! This library provides tools for:
//! - Translating membership type codes into display labels
//! - Parsing roster lines into members, skipping malformed lines
//! - Grouping members into households ordered by household number
//! - Enforcing the household invariants (shared values, family rule, email)
//! - Scanning command-line arguments into a validated configuration

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod dispatch;
        pub mod household_grouper;
        pub mod recipient_selector;
        pub mod roster_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod help;
}

// Re-export commonly used types
pub use app::models::{Household, Member};
pub use config::RosterConfig;
pub use error::{ArgumentError, Error, HouseholdError, Result};
