//! Command-line interface definitions

pub mod ballots;
pub mod commands;
