use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for zont, stored as config.json in the platform config
/// directory. Both fields seed the interactive session's zone prompts; the
/// alias table itself is not configurable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ZontConfig {
    /// Zone token pre-filled in the source-zone prompt
    #[serde(default)]
    pub default_from: Option<String>,

    /// Zone token pre-filled in the target-zone prompt
    #[serde(default)]
    pub default_to: Option<String>,
}

impl ZontConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ZontConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}

/// The config directory: `ZONT_CONFIG_DIR` when set (tests rely on this),
/// else the platform config dir.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("ZONT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    directories::ProjectDirs::from("com", "zont", "zont").map(|d| d.config_dir().to_path_buf())
}
