//! Presentation layer for chorus-vote
//!
//! This crate contains CLI definitions and output formatters.

pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use cli::ballots::parse_ballots;
pub use cli::commands::{Cli, Command, ElectionType, OutputFormat, parse_vote};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
