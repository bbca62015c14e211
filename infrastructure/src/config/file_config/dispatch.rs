//! Dispatch configuration from TOML (`[dispatch]` section)

use serde::{Deserialize, Serialize};
use taskdesk_domain::{ConfigIssue, ConfigIssueCode, DispatchMode};

/// Raw dispatch configuration from TOML
///
/// ```toml
/// [dispatch]
/// mode = "manager"     # "manager" or "direct"
/// operator = "Rob"     # name recorded in task update logs
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDispatchConfig {
    pub mode: String,
    pub operator: Option<String>,
}

impl Default for FileDispatchConfig {
    fn default() -> Self {
        Self {
            mode: DispatchMode::default().to_string(),
            operator: None,
        }
    }
}

impl FileDispatchConfig {
    /// Parse mode string into DispatchMode, returning warnings on failure.
    pub fn parse_mode(&self) -> (DispatchMode, Vec<ConfigIssue>) {
        match self.mode.parse::<DispatchMode>() {
            Ok(mode) => (mode, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "dispatch.mode".to_string(),
                        value: self.mode.clone(),
                        valid_values: vec!["manager".to_string(), "direct".to_string()],
                    },
                    format!(
                        "dispatch.mode: unknown value '{}', falling back to 'manager'",
                        self.mode
                    ),
                );
                (DispatchMode::default(), vec![issue])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        let config = FileDispatchConfig {
            mode: "Direct".to_string(),
            ..Default::default()
        };
        let (mode, issues) = config.parse_mode();
        assert_eq!(mode, DispatchMode::Direct);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_invalid_mode_falls_back() {
        let config = FileDispatchConfig {
            mode: "broadcast".to_string(),
            ..Default::default()
        };
        let (mode, issues) = config.parse_mode();
        assert_eq!(mode, DispatchMode::ViaManager);
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }
}
