//! Presentation-level configuration
//!
//! How results are printed, resolved from CLI flags and the `[output]`
//! section.

use crate::cli::commands::OutputFormat as CliOutputFormat;
use taskdesk_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show a spinner while waiting for agents
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// CLI flags win over the config file.
    ///
    /// JSON output never shows progress or color, so stdout stays parseable.
    pub fn resolve(
        cli_format: Option<CliOutputFormat>,
        file_format: Option<OutputFormat>,
        color: bool,
        quiet: bool,
    ) -> Self {
        let format = cli_format
            .map(OutputFormat::from)
            .or(file_format)
            .unwrap_or_default();
        let json = format == OutputFormat::Json;
        Self {
            format,
            color: color && !json,
            show_progress: !quiet && !json,
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_file() {
        let config = OutputConfig::resolve(
            Some(CliOutputFormat::Text),
            Some(OutputFormat::Json),
            true,
            false,
        );
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.show_progress);
    }

    #[test]
    fn test_json_disables_progress_and_color() {
        let config = OutputConfig::resolve(None, Some(OutputFormat::Json), true, false);
        assert!(config.is_json());
        assert!(!config.color);
        assert!(!config.show_progress);
    }

    #[test]
    fn test_quiet_disables_progress() {
        let config = OutputConfig::resolve(None, None, true, true);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.show_progress);
    }
}
