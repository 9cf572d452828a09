//! Infrastructure layer for chorus-vote
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.
//!
//! # Adapters
//!
//! - [`InMemorySessionRepository`] - process-local store
//! - [`JsonFileSessionRepository`] - single JSON snapshot on disk
//! - [`RandomShuffler`] - seed candidate shuffling

pub mod config;
pub mod persistence;
pub mod shuffle;

pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat,
    FileSessionConfig, FileStoreConfig,
};
pub use persistence::{InMemorySessionRepository, JsonFileSessionRepository};
pub use shuffle::RandomShuffler;
