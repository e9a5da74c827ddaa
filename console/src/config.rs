use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::ultimate::SessionSettings;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "uttt_console.yaml";

pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: PathBuf,
) -> ConfigManager<FileContentConfigProvider, ConsoleConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ConsoleConfig {
    pub session: SessionSettings,
    /// Fixed seed for reproducible games; a fresh one is drawn when absent.
    pub seed: Option<u64>,
    pub use_log_prefix: bool,
    pub verbose: bool,
}

impl Validate for ConsoleConfig {
    fn validate(&self) -> Result<(), String> {
        self.session.validate()
    }
}
