use crate::error::{Result, TsugiError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for tsugi, read from config.json in the config directory.
/// The file is hand-edited; every field has a default so a partial (or
/// absent) file is fine.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
pub struct TsugiConfig {
    /// Show engine debug messages
    #[serde(default)]
    pub debug: bool,

    /// Path to the list file (defaults to the platform data directory)
    #[serde(default)]
    pub data: Option<PathBuf>,
}

impl TsugiConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TsugiError::Io)?;
        let config: TsugiConfig = serde_json::from_str(&content).map_err(TsugiError::Data)?;
        Ok(config)
    }
}
