//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! String-typed fields are parsed into domain types by the `parse_*`/`to_*`
//! helpers, which report problems as [`ConfigIssue`]s instead of failing.

mod agents;
mod board;
mod dispatch;
mod logging;
mod lyzr;
mod output;

pub use agents::FileAgentsConfig;
pub use board::FileBoardConfig;
pub use dispatch::FileDispatchConfig;
pub use logging::FileLoggingConfig;
pub use lyzr::{DEFAULT_API_KEY_ENV, DEFAULT_API_URL, DEFAULT_USER_ID, FileLyzrConfig};
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};
use taskdesk_domain::{ConfigIssue, ConfigIssueCode};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote API connection
    pub lyzr: FileLyzrConfig,
    /// Per-role agent id overrides
    pub agents: FileAgentsConfig,
    pub dispatch: FileDispatchConfig,
    pub board: FileBoardConfig,
    pub output: FileOutputConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. `[lyzr]` values that cannot work (blank URL, zero timeout)
    /// 2. `[agents]` keys and ids
    /// 3. `[dispatch] mode`
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Lyzr connection
        if self.lyzr.api_url.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "lyzr.api_url".to_string(),
                },
                "lyzr.api_url cannot be empty",
            ));
        }
        if self.lyzr.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "lyzr.timeout_seconds".to_string(),
                },
                "lyzr.timeout_seconds must be at least 1",
            ));
        }
        if self.lyzr.user_id.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyValue {
                    field: "lyzr.user_id".to_string(),
                },
                format!("lyzr.user_id is empty, using '{}'", DEFAULT_USER_ID),
            ));
        }

        // 2. Agent overrides
        issues.extend(self.agents.to_directory().1);

        // 3. Dispatch mode
        issues.extend(self.dispatch.parse_mode().1);

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use taskdesk_domain::{DispatchMode, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[lyzr]
user_id = "rob@example.com"
session_id = "weekly"
timeout_seconds = 30

[agents]
WEEKLY_REPORT = "report-v2"

[dispatch]
mode = "direct"
operator = "Rob"

[board]
path = "/var/lib/taskdesk/board.json"

[output]
format = "json"
color = false

[logging]
conversation_log = "/tmp/conversations.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.lyzr.user_id, "rob@example.com");
        assert_eq!(config.lyzr.session_id.as_deref(), Some("weekly"));
        assert_eq!(config.lyzr.api_url, DEFAULT_API_URL);
        assert_eq!(config.agents.overrides["WEEKLY_REPORT"], "report-v2");
        assert_eq!(config.dispatch.parse_mode().0, DispatchMode::Direct);
        assert_eq!(config.dispatch.operator.as_deref(), Some("Rob"));
        assert_eq!(
            config.board.path,
            Some(PathBuf::from("/var/lib/taskdesk/board.json"))
        );
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.logging.file.is_none());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_every_issue() {
        let toml_str = r#"
[lyzr]
timeout_seconds = 0

[agents]
CLEANUP = "x"

[dispatch]
mode = "broadcast"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().any(|i| matches!(
            i.code,
            ConfigIssueCode::OutOfRange { .. }
        )));
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::UnknownKey { key, .. } if key == "CLEANUP"
        )));
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::InvalidEnumValue { field, .. } if field == "dispatch.mode"
        )));
    }
}
