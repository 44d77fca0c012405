// src/config.rs
use crate::utils::units::DEFAULT_UNIT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_unit: String,
    pub format: OutputFormat,
    /// Hash file contents as part of the report.
    pub checksum: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_unit: DEFAULT_UNIT.to_string(),
            format: OutputFormat::Text,
            checksum: true,
        }
    }
}

impl Config {
    /// `~/.config/filemeta/config.json` on Linux, the platform equivalent elsewhere.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("filemeta").join("config.json"))
    }

    /// Loads `path`, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self, String> {
        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| format!("Invalid config {}: {}", path.display(), e)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Config::default())
            }
            Err(e) => Err(format!("Failed to read config {}: {}", path.display(), e)),
        }
    }
}
