use serde::{Deserialize, Serialize};
use snake3d_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use snake3d_common::games::snake::SnakeSettings;

use super::{BestScoreConfig, WindowConfig};

const CONFIG_FILE_NAME: &str = "snake3d_config.yaml";

fn get_default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path_override: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path_override {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_default_config_path()),
    }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub snake: SnakeSettings,
    #[serde(default)]
    pub best_score: BestScoreConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.snake.validate()?;
        self.best_score.validate()?;
        self.window.validate()?;
        Ok(())
    }
}
