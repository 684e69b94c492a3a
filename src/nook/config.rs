use crate::error::{NookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for the bundled CLI, stored as config.json in the data
/// directory. The library itself never reads it; identity resolution is
/// the client's job.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NookConfig {
    /// Default caller identity when no --user flag or NOOK_USER env is set
    #[serde(default)]
    pub user: Option<String>,
}

impl NookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NookError::Io)?;
        let config: NookConfig =
            serde_json::from_str(&content).map_err(NookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NookError::Serialization)?;
        fs::write(config_path, content).map_err(NookError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = NookConfig::load(dir.path()).unwrap();
        assert_eq!(config, NookConfig::default());
        assert!(config.user.is_none());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();

        let config = NookConfig {
            user: Some("alice".to_string()),
        };
        config.save(dir.path()).unwrap();

        let loaded = NookConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.user.as_deref(), Some("alice"));
    }

    #[test]
    fn save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deeper");

        NookConfig::default().save(&nested).unwrap();

        assert!(nested.join(CONFIG_FILENAME).exists());
    }
}
