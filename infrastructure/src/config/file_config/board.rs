//! Board storage configuration from TOML (`[board]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBoardConfig {
    /// Board JSON file; defaults to `$XDG_DATA_HOME/taskdesk/board.json`
    pub path: Option<PathBuf>,
}

impl FileBoardConfig {
    pub fn resolve_path(&self) -> Option<PathBuf> {
        self.path
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("taskdesk").join("board.json")))
    }
}
