//! # Configuration
//!
//! Settings live in `config.json` inside the data directory, next to the
//! contact snapshot. A missing file means defaults.
//!
//! ## Data Directory
//!
//! Resolved in priority order:
//! 1. `ROLODEX_DATA` environment variable.
//! 2. The platform data directory (via the `directories` crate), e.g.
//!    `~/.local/share/rolodex` on Linux.
//!
//! The binary's `--file` flag bypasses both and points straight at a snapshot.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `page_size` | `10` | Contacts per page in `show all` and `search` |
//! | `file_name` | `contacts.json` | Snapshot file name inside the data directory |

use crate::error::{Result, RolodexError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";
pub const DATA_DIR_ENV: &str = "ROLODEX_DATA";
const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_FILE_NAME: &str = "contacts.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl RolodexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RolodexError::Io)?;
        let config: RolodexConfig =
            serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(RolodexError::Config(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.file_name.trim().is_empty() {
            return Err(RolodexError::Config("file_name cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if page_size == 0 {
            return Err(RolodexError::Config(
                "page_size must be at least 1".to_string(),
            ));
        }
        self.page_size = page_size;
        Ok(())
    }

    /// Where the contact snapshot lives inside `data_dir`.
    pub fn snapshot_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.file_name)
    }
}

/// The data directory: `ROLODEX_DATA` if set, else the platform default.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "rolodex", "rolodex")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RolodexError::Config("Could not determine data directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RolodexConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.file_name, "contacts.json");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = RolodexConfig::load(dir.path()).unwrap();
        assert_eq!(config, RolodexConfig::default());
    }

    #[test]
    fn test_load_full_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"page_size": 3, "file_name": "book.json"}"#,
        )
        .unwrap();

        let loaded = RolodexConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.page_size, 3);
        assert_eq!(loaded.file_name, "book.json");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"page_size": 4}"#).unwrap();

        let loaded = RolodexConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.page_size, 4);
        assert_eq!(loaded.file_name, "contacts.json");
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"page_size": 0}"#).unwrap();
        assert!(matches!(
            RolodexConfig::load(dir.path()),
            Err(RolodexError::Config(_))
        ));

        let mut config = RolodexConfig::default();
        assert!(config.set_page_size(0).is_err());
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_snapshot_path() {
        let config = RolodexConfig {
            file_name: "book.json".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.snapshot_path(Path::new("/data")),
            PathBuf::from("/data/book.json")
        );
    }
}
