//! Preference storage for the index URL.
//!
//! A single JSON file (`~/.aetos/config.json`) holds the persisted preference.
//! Reads fall back to the built-in default on any failure so a corrupt file
//! never blocks package operations; writes and deletes propagate IO errors.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::ConfigError;

/// Index URL used when no preference has been persisted.
pub const DEFAULT_INDEX_URL: &str = "https://nexus.uclv.edu.cu/repository/pypi.org/";

/// Per-user config directory name under $HOME.
const CONFIG_DIR_NAME: &str = ".aetos";

/// Preference file name inside the config directory.
const CONFIG_FILE_NAME: &str = "config.json";

/// The persisted preference: one JSON object, one recognized key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preference {
    pub index_url: String,
}

impl Default for Preference {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
        }
    }
}

impl Preference {
    /// Whether this is the built-in default rather than a user override.
    pub fn is_default(&self) -> bool {
        self.index_url == DEFAULT_INDEX_URL
    }
}

/// Loads and saves the preference file under an explicit config directory.
///
/// The directory is passed in at construction; nothing here touches ambient
/// global state, which keeps tests free to point at a temp dir.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config_dir: PathBuf,
}

impl ConfigStore {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Store rooted at the conventional per-user location (`~/.aetos`).
    pub fn per_user() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(Self::new(home.join(CONFIG_DIR_NAME)))
    }

    /// Path of the preference file.
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Read the persisted preference.
    ///
    /// Falls back to the default when the file is absent, unreadable, or not
    /// valid JSON. Fail-open is deliberate: transient corruption must never
    /// block a package operation.
    pub fn load(&self) -> Preference {
        let path = self.config_path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Preference::default(),
            Err(e) => {
                warn!("could not read {}: {e}, using default index", path.display());
                return Preference::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(pref) => pref,
            Err(e) => {
                warn!(
                    "malformed config at {}: {e}, using default index",
                    path.display()
                );
                Preference::default()
            }
        }
    }

    /// Persist the preference, creating the config directory (and parents) if
    /// missing. Fully overwrites any prior content.
    pub fn save(&self, pref: &Preference) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.config_dir)?;
        let json = serde_json::to_string_pretty(pref)?;
        let path = self.config_path();
        fs::write(&path, json)?;
        debug!("wrote preference to {}", path.display());
        Ok(())
    }

    /// Delete the persisted preference, reverting reads to the default.
    ///
    /// Returns whether a file existed; an already-absent file is success.
    pub fn reset(&self) -> Result<bool, ConfigError> {
        match fs::remove_file(self.config_path()) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
