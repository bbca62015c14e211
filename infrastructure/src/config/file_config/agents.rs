//! Agent identifier overrides from TOML (`[agents]` section)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use taskdesk_domain::{AgentDirectory, AgentRole, ConfigIssue, ConfigIssueCode};

/// Role key → agent id overrides
///
/// # Example
///
/// ```toml
/// [agents]
/// MANAGER = "69235d3623b88b385103da57"
/// weekly_report = "my-own-report-agent"
/// ```
///
/// Keys are role keys in any case, with `-` or `_`. Roles not listed keep
/// their deployed identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileAgentsConfig {
    pub overrides: BTreeMap<String, String>,
}

impl FileAgentsConfig {
    /// Build the directory, returning issues for keys or ids that were skipped.
    pub fn to_directory(&self) -> (AgentDirectory, Vec<ConfigIssue>) {
        let mut directory = AgentDirectory::default();
        let mut issues = Vec::new();

        for (key, id) in &self.overrides {
            let role = match key.parse::<AgentRole>() {
                Ok(role) => role,
                Err(_) => {
                    issues.push(ConfigIssue::warning(
                        ConfigIssueCode::UnknownKey {
                            section: "agents".to_string(),
                            key: key.clone(),
                        },
                        format!("agents.{}: not an agent role, ignored", key),
                    ));
                    continue;
                }
            };
            if id.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyValue {
                        field: format!("agents.{}", key),
                    },
                    format!("agents.{}: agent id cannot be empty", key),
                ));
                continue;
            }
            directory.set(role, id.trim());
        }

        (directory, issues)
    }
}
