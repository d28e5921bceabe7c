use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::AppError;
use crate::app::infrastructure::storage::{FileStorage, default_storage_dir};

/// Where and how the store persists its snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Namespace key the snapshot is written under.
    ///
    /// Rehydration only looks under this key. A snapshot left by another host
    /// application under a different key is not picked up until this is set
    /// to that key.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Directory for file-backed storage; platform data dir when unset
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,

    #[serde(default)]
    pub pretty_snapshots: bool,
}

fn default_storage_key() -> String {
    "pageshell-state".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            storage_dir: None,
            pretty_snapshots: false,
        }
    }
}

impl StoreConfig {
    /// Load config from the default location, or defaults if missing or unreadable
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), "Failed to parse store config: {}. Using defaults.", e);
                    Self::default()
                }
            },
            // File doesn't exist, use defaults
            Err(_) => Self::default(),
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("pageshell");
        path.push("store.json");
        path
    }

    pub fn resolved_storage_dir(&self) -> PathBuf {
        self.storage_dir.clone().unwrap_or_else(default_storage_dir)
    }

    /// File-backed storage rooted at the configured directory
    pub fn file_storage(&self) -> FileStorage {
        FileStorage::new(self.resolved_storage_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.storage_key, "pageshell-state");
        assert_eq!(config.storage_dir, None);
        assert!(!config.pretty_snapshots);
        assert_eq!(config.resolved_storage_dir(), default_storage_dir());
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"pretty_snapshots": true}"#;
        let config: StoreConfig = serde_json::from_str(json).unwrap();
        assert!(config.pretty_snapshots);
        assert_eq!(config.storage_key, "pageshell-state");
    }

    #[test]
    fn test_save_and_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("conf").join("store.json");
        let config = StoreConfig {
            storage_key: "site".to_string(),
            storage_dir: Some(tmp.path().join("data")),
            pretty_snapshots: true,
        };

        config.save_to(&path).unwrap();
        let loaded = StoreConfig::load_from(&path);
        assert_eq!(loaded, config);
        assert_eq!(loaded.file_storage().dir(), tmp.path().join("data"));
    }

    #[test]
    fn test_missing_and_malformed_fall_back() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(
            StoreConfig::load_from(&tmp.path().join("absent.json")),
            StoreConfig::default()
        );

        let bad = tmp.path().join("bad.json");
        fs::write(&bad, "{ storage_key = 3 }").unwrap();
        assert_eq!(StoreConfig::load_from(&bad), StoreConfig::default());
    }

    #[test]
    fn test_config_path() {
        assert!(StoreConfig::get_config_path().ends_with("pageshell/store.json"));
    }
}
