//! Filter configuration, loaded from TOML.
//!
//! ```toml
//! dictionary = "keywords.txt"
//! replacement = "**"
//! mask = "*"
//! duplicate_id = "last"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{DuplicateId, DEFAULT_MASK};

/// Error loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file is not valid TOML for [`FilterConfig`].
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },
}

/// Settings for a [`Filter`](crate::Filter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Dictionary file, one pattern per line. `None` matches nothing.
    #[serde(default)]
    pub dictionary: Option<PathBuf>,

    /// Text substituted for each match by token replacement.
    #[serde(default = "default_replacement")]
    pub replacement: String,

    /// Character written over each matched codepoint by masking.
    #[serde(default = "default_mask")]
    pub mask: char,

    /// Pattern id kept for duplicate dictionary entries.
    #[serde(default)]
    pub duplicate_id: DuplicateId,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            dictionary: None,
            replacement: default_replacement(),
            mask: default_mask(),
            duplicate_id: DuplicateId::default(),
        }
    }
}

fn default_replacement() -> String {
    "**".to_string()
}

fn default_mask() -> char {
    DEFAULT_MASK
}

impl FilterConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Loads a configuration file.
    ///
    /// A relative `dictionary` path is resolved against the directory holding
    /// the configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let (Some(dict), Some(dir)) = (config.dictionary.as_mut(), path.parent()) {
            if dict.is_relative() {
                *dict = dir.join(&*dict);
            }
        }

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
