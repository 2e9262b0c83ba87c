//! Conversion settings loadable from a JSON or YAML file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parser::Delimiter;
use crate::transport::DEFAULT_CAPACITY;

/// Tunables shared by the command line and settings files.
///
/// Every field is optional in a file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// "comma" or "semicolon"
    pub separator: Delimiter,
    /// Generate pretty JSON
    pub pretty: bool,
    /// Records buffered between parser and writer
    pub channel_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            separator: Delimiter::default(),
            pretty: false,
            channel_capacity: DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "yaml")]
    #[error("invalid YAML settings: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported settings file extension: {0}")]
    UnsupportedFormat(String),
}

impl Settings {
    pub fn from_json_str(s: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(s)?)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> Result<Self, SettingsError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Load settings, picking the parser from the file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match ext.as_str() {
            "json" => Self::from_json_str(&content),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Self::from_yaml_str(&content),
            _ => Err(SettingsError::UnsupportedFormat(ext)),
        }
    }
}
