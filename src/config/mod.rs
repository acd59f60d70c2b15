//! User configuration loaded from a JSON file.
//!
//! The file is looked up at `$CONTACT_FORM_CONFIG`, falling back to
//! `~/.config/contact-form/config.json`. A missing file means defaults.

mod error;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::{DEFAULT_FIRST_NAME_MIN_LEN, Rules};

pub use error::ConfigError;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "CONTACT_FORM_CONFIG";

/// Application settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether an empty email blocks a submit.
    pub email_required: bool,
    /// Minimum first name length in characters.
    pub first_name_min_len: usize,
    /// Where to write tracing output. Logging is off when absent.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            email_required: true,
            first_name_min_len: DEFAULT_FIRST_NAME_MIN_LEN,
            log_file: None,
        }
    }
}

impl Config {
    /// Loads the config from the environment override or the XDG config dir.
    #[mutants::skip]
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_path(path),
            None => match default_path() {
                Some(path) if path.exists() => Self::from_path(path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Reads and validates the config at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.first_name_min_len == 0 {
            return Err(ConfigError::ZeroMinLength);
        }
        Ok(())
    }

    /// The validation rules these settings describe.
    pub fn rules(&self) -> Rules {
        Rules {
            first_name_min_len: self.first_name_min_len,
            email_required: self.email_required,
        }
    }
}

/// `<config dir>/contact-form/config.json`, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("contact-form").join("config.json"))
}
