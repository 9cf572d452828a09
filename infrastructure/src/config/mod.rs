//! Configuration file loading for chorus-vote
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./chorus.toml` or `./.chorus.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/chorus-vote/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat, FileSessionConfig,
    FileStoreConfig,
};
pub use loader::ConfigLoader;
