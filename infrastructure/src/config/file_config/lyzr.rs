//! Lyzr API configuration from TOML (`[lyzr]` section)

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://agent-prod.studio.lyzr.ai/v3/inference/chat/";
pub const DEFAULT_API_KEY_ENV: &str = "LYZR_API_KEY";
pub const DEFAULT_USER_ID: &str = "taskdesk-user";

/// Raw Lyzr configuration from TOML
///
/// # Example
///
/// ```toml
/// [lyzr]
/// api_url = "https://agent-prod.studio.lyzr.ai/v3/inference/chat/"
/// api_key_env = "LYZR_API_KEY"   # env var holding the key
/// user_id = "rob@example.com"
/// session_id = "weekly-review"   # omit for a fresh id per run
/// timeout_seconds = 120
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLyzrConfig {
    pub api_url: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Literal API key; takes precedence over `api_key_env`
    pub api_key: Option<String>,
    pub user_id: String,
    pub session_id: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for FileLyzrConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            user_id: DEFAULT_USER_ID.to_string(),
            session_id: None,
            timeout_seconds: 120,
        }
    }
}

impl FileLyzrConfig {
    /// Resolve the API key: literal value first, then the named env var.
    /// Blank values count as missing.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileLyzrConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.api_key_env, "LYZR_API_KEY");
        assert!(config.session_id.is_none());
        assert_eq!(config.timeout_seconds, 120);
    }

    #[test]
    fn test_literal_key_wins() {
        let config = FileLyzrConfig {
            api_key: Some("sk-literal".to_string()),
            api_key_env: "TASKDESK_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("sk-literal"));
    }

    #[test]
    fn test_blank_key_is_missing() {
        let config = FileLyzrConfig {
            api_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.resolve_api_key().is_none());
    }
}
