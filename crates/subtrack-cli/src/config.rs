//! Configuration file handling.
//!
//! One small TOML file. Resolution order for its location: the `--config`
//! flag (also fed by `SUBTRACK_CONFIG`), then the platform config
//! directory. A missing file at the default location just means defaults;
//! a file that exists but does not parse is an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use subtrack_core::{Error, Result};

/// Directory name used under the platform config and data directories.
const PROJECT_DIR: &str = "subtrack";

/// File name of the durable key holding the subscription list.
const DATA_FILE: &str = "subscriptions.json";

/// User configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where the subscription list is persisted. Defaults to
    /// `<platform data dir>/subtrack/subscriptions.json`.
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from the given path, or the default location.
    ///
    /// An explicitly passed path must exist; the default location may be
    /// absent, in which case defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::config(format!(
                        "Config file not found at {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// The default config file location for this platform.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_DIR).join("config.toml"))
    }

    /// Resolves the data file path: configured value, or the platform
    /// data directory.
    pub fn data_file(&self) -> Result<PathBuf> {
        if let Some(path) = &self.data_file {
            return Ok(path.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(PROJECT_DIR).join(DATA_FILE))
            .ok_or_else(|| Error::config("Could not determine data directory for this platform"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = Config::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_explicit_config_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_file = \"/tmp/subs.json\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.data_file.as_deref(), Some(Path::new("/tmp/subs.json")));
        assert_eq!(config.data_file().unwrap(), PathBuf::from("/tmp/subs.json"));
    }

    #[test]
    fn test_corrupt_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_file = [this is not toml").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_flie = \"/tmp/subs.json\"\n").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_default_data_file_lands_in_project_dir() {
        let config = Config::default();
        if let Ok(path) = config.data_file() {
            assert!(path.ends_with("subtrack/subscriptions.json"));
        }
    }
}
