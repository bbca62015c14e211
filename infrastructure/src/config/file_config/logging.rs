//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// ```toml
/// [logging]
/// file = "~/.local/state/taskdesk/taskdesk.log"
/// conversation_log = "~/.local/state/taskdesk/conversations.jsonl"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Diagnostic log file, in addition to stderr
    pub file: Option<PathBuf>,
    /// JSONL transcript of agent requests and replies
    pub conversation_log: Option<PathBuf>,
}
