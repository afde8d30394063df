// src/config.rs
//! Decoder settings persisted as JSON

use crate::error::{NmeaError, Result};
use crate::fields::CenturyWindow;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    #[serde(default)]
    pub century_window: CenturyWindow,
}

impl DecoderConfig {
    /// Load configuration from the user's config directory
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Save configuration to the user's config directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;

        Ok(())
    }

    fn get_config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .map_err(|_| NmeaError::Config("HOME environment variable not set".to_string()))?;

        Ok(PathBuf::from(home)
            .join(".config")
            .join("nmea-fields")
            .join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = DecoderConfig::default();
        assert_eq!(config.century_window, CenturyWindow::fixed(2000));
    }

    #[test]
    fn test_missing_file_yields_default() {
        let dir = tempdir().unwrap();
        let config = DecoderConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, DecoderConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = DecoderConfig {
            century_window: CenturyWindow::pivot(80, 2000),
        };

        config.save_to(&path).unwrap();
        let loaded = DecoderConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_json_layout() {
        let json = r#"{"century_window":{"policy":"pivot","pivot":70,"century":2000}}"#;
        let config: DecoderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.century_window, CenturyWindow::pivot(70, 2000));

        let empty: DecoderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, DecoderConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"century_window": json"#).unwrap();

        assert!(matches!(DecoderConfig::load_from(&path), Err(NmeaError::Json(_))));
    }
}
