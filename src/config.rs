//! Config file handling.
//!
//! Credentials live at `<platform config dir>/wick/config.toml`:
//!
//! ```toml
//! username = "me@example.com"
//! key = "my-api-key"
//! ```
//!
//! A missing file is fine (everything can come from flags or the
//! environment); a file that fails to parse is a hard error.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

const CONFIG_DIR: &str = "wick";
const CONFIG_FILE: &str = "config.toml";

/// On-disk configuration. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub username: Option<String>,
    pub key: Option<String>,
    /// Alternate service host, e.g. "https://eu.onetimesecret.com".
    pub host: Option<String>,
}

impl Config {
    /// Platform-standard location of the config file.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load the config file, treating a missing file as empty defaults.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and parse a specific config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
