//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use chorus_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

// Re-export OutputFormat from domain for convenience
pub use chorus_domain::OutputFormat as FileOutputFormat;

/// File name of the JSON store inside the data directory
const STORE_FILE_NAME: &str = "store.json";

/// Configuration validation issues
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("session.default_voter_count cannot be 0")]
    ZeroVoterCount,

    #[error("store.path cannot be empty")]
    EmptyStorePath,
}

/// Raw `[store]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileStoreConfig {
    /// JSON store location; the platform data directory when unset
    pub path: Option<PathBuf>,
}

impl FileStoreConfig {
    /// Effective store path
    ///
    /// Falls back to `$XDG_DATA_HOME/chorus-vote/store.json`, or to
    /// `./chorus-store.json` where no data directory is known.
    pub fn resolved_path(&self) -> PathBuf {
        if let Some(path) = &self.path {
            return path.clone();
        }
        dirs::data_dir()
            .map(|d| d.join("chorus-vote").join(STORE_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from("chorus-store.json"))
    }
}

/// Raw `[session]` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Shuffle seed candidates when a session starts
    pub shuffle_candidates: bool,
    /// Voter count used when `start` is given no `--voters`
    pub default_voter_count: Option<u32>,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            shuffle_candidates: true,
            default_voter_count: None,
        }
    }
}

/// Raw `[output]` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileConfig {
    /// Storage settings
    pub store: FileStoreConfig,
    /// Session defaults
    pub session: FileSessionConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Check values that parse but cannot be used, returning every issue found
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.session.default_voter_count == Some(0) {
            issues.push(ConfigValidationError::ZeroVoterCount);
        }

        if self
            .store
            .path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            issues.push(ConfigValidationError::EmptyStorePath);
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[store]
path = "/tmp/chorus/store.json"

[session]
shuffle_candidates = false
default_voter_count = 24

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.store.path,
            Some(PathBuf::from("/tmp/chorus/store.json"))
        );
        assert!(!config.session.shuffle_candidates);
        assert_eq!(config.session.default_voter_count, Some(24));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[session]
default_voter_count = 12
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.session.default_voter_count, Some(12));
        // Defaults should apply
        assert!(config.session.shuffle_candidates);
        assert!(config.store.path.is_none());
        assert!(config.output.color);
        assert!(config.output.format.is_none());
    }

    #[test]
    fn test_unknown_output_format_is_rejected() {
        let toml_str = r#"
[output]
format = "yaml"
"#;
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validate_reports_all_issues() {
        let mut config = FileConfig::default();
        config.session.default_voter_count = Some(0);
        config.store.path = Some(PathBuf::new());

        assert_eq!(
            config.validate(),
            vec![
                ConfigValidationError::ZeroVoterCount,
                ConfigValidationError::EmptyStorePath
            ]
        );
    }

    #[test]
    fn test_resolved_store_path() {
        let explicit = FileStoreConfig {
            path: Some(PathBuf::from("votes.json")),
        };
        assert_eq!(explicit.resolved_path(), PathBuf::from("votes.json"));

        let fallback = FileStoreConfig::default().resolved_path();
        assert!(fallback.to_string_lossy().ends_with("store.json"));
    }
}
