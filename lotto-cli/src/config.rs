use lotto_core::{GameConfig, Result};
use std::path::{Path, PathBuf};

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lotto").join("config.json"))
}

/// Explicit path, else the per-user config file if present, else defaults
pub fn load_config(explicit: Option<&Path>) -> Result<GameConfig> {
    if let Some(path) = explicit {
        return GameConfig::from_file(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => GameConfig::from_file(&path),
        _ => {
            tracing::debug!("No config file found, using built-in defaults");
            Ok(GameConfig::default())
        }
    }
}
