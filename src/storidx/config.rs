use crate::error::{Result, StoridxError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for storidx, stored as `config.json` in the scope directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoridxConfig {
    /// Fold accented characters to their bare equivalents while normalizing
    #[serde(default = "default_strip_accents")]
    pub strip_accents: bool,
}

fn default_strip_accents() -> bool {
    true
}

impl Default for StoridxConfig {
    fn default() -> Self {
        Self {
            strip_accents: true,
        }
    }
}

impl StoridxConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StoridxError::Io)?;
        let config: StoridxConfig =
            serde_json::from_str(&content).map_err(StoridxError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StoridxError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StoridxError::Serialization)?;
        fs::write(config_path, content).map_err(StoridxError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "strip-accents" => Some(self.strip_accents.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "strip-accents" => {
                self.strip_accents = value
                    .parse::<bool>()
                    .map_err(|_| format!("Expected true or false, got: {}", value))?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_strips_accents() {
        let config = StoridxConfig::default();
        assert!(config.strip_accents);
    }

    #[test]
    fn load_missing_config_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = StoridxConfig::load(dir.path().join("nowhere")).unwrap();
        assert_eq!(config, StoridxConfig::default());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut config = StoridxConfig::default();
        config.set("strip-accents", "false").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = StoridxConfig::load(dir.path()).unwrap();
        assert!(!loaded.strip_accents);
    }

    #[test]
    fn set_rejects_bad_values_and_keys() {
        let mut config = StoridxConfig::default();
        assert!(config.set("strip-accents", "sim").is_err());
        assert!(config.set("file-ext", ".txt").is_err());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let config = StoridxConfig::default();
        assert_eq!(config.get("strip-accents").as_deref(), Some("true"));
        assert_eq!(config.get("nope"), None);
    }
}
