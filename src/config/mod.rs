use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// User-tunable settings, stored as JSON in the platform config
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: i32,
    /// Window height in pixels.
    pub window_height: i32,
    /// Directory holding the images/sounds/fonts subdirectories.
    pub assets_dir: PathBuf,
    /// Optional directory for rolling log files.
    pub log_dir: Option<PathBuf>,
    /// Show debug logs.
    pub verbose: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 1000,
            window_height: 800,
            assets_dir: PathBuf::from("assets"),
            log_dir: None,
            verbose: false,
        }
    }
}

impl GameConfig {
    /// Load settings from disk, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from_file().unwrap_or_default()
    }

    fn load_from_file() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save settings to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("io", "stick-bop", "stick-bop") {
            Ok(proj_dirs.config_dir().join("settings.json"))
        } else {
            Ok(PathBuf::from(".stick-bop-settings.json"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = GameConfig::default();
        assert_eq!(config.window_width, 1000);
        assert_eq!(config.window_height, 800);
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
        assert!(!config.verbose);
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = GameConfig {
            window_width: 640,
            window_height: 480,
            assets_dir: PathBuf::from("data"),
            log_dir: Some(PathBuf::from("logs")),
            verbose: true,
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.window_width, 640);
        assert_eq!(back.assets_dir, PathBuf::from("data"));
        assert_eq!(back.log_dir, Some(PathBuf::from("logs")));
        assert!(back.verbose);
    }
}
