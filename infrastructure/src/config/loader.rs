//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "taskdesk";
const PROJECT_FILES: [&str; 2] = ["taskdesk.toml", ".taskdesk.toml"];
const ENV_PREFIX: &str = "TASKDESK_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `TASKDESK_LYZR__USER_ID=...` (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./taskdesk.toml` or `./.taskdesk.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/taskdesk/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(Self::global_config_path(), Self::project_config_path(), config_path)
            .extract()
            .map_err(Box::new)
    }

    fn figment(
        global: Option<PathBuf>,
        project: Option<PathBuf>,
        explicit: Option<&PathBuf>,
    ) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = global.filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(global_path));
        }
        if let Some(project_path) = project {
            figment = figment.merge(Toml::file(project_path));
        }
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// `$XDG_CONFIG_HOME/taskdesk/config.toml`, or the platform equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_in(Path::new("."))
    }

    fn project_config_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        let env_vars: Vec<String> = std::env::vars()
            .map(|(k, _)| k)
            .filter(|k| k.starts_with(ENV_PREFIX))
            .collect();
        if env_vars.is_empty() {
            println!("  [     ] Env:      {}*", ENV_PREFIX);
        } else {
            println!("  [FOUND] Env:      {}", env_vars.join(", "));
        }

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        match Self::project_config_path() {
            Some(path) => println!("  [FOUND] Project:  {}", path.display()),
            None => println!("  [     ] Project:  ./taskdesk.toml or ./.taskdesk.toml"),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:   {}", mark, path.display());
        }

        println!("  [     ] Default:  built-in defaults");
    }
}
