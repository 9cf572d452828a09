//! Presentation-level configuration
//!
//! Configuration for output formatting.

use chorus_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Full,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Merge a command-line choice over configured values
    ///
    /// The CLI flag wins, then the config file, then the default.
    pub fn resolve(
        cli_format: Option<OutputFormat>,
        file_format: Option<OutputFormat>,
        color: bool,
    ) -> Self {
        Self {
            format: cli_format.or(file_format).unwrap_or_default(),
            color,
        }
    }

    /// Apply the color setting to all `colored` output of this process
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
