//! Configuration file loading for taskdesk
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TASKDESK_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./taskdesk.toml` or `./.taskdesk.toml`
//! 4. Global: `$XDG_CONFIG_HOME/taskdesk/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_API_KEY_ENV, DEFAULT_API_URL, DEFAULT_USER_ID, FileAgentsConfig, FileBoardConfig,
    FileConfig, FileDispatchConfig, FileLoggingConfig, FileLyzrConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
