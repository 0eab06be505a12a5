//! Format-agnostic configuration loading

use crate::{Error, Result, io};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension and deserializes transparently.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        // Reject unknown formats before touching the disk
        if !matches!(extension.as_str(), "toml" | "json") {
            return Err(Error::UnsupportedFormat { extension });
        }

        let content = io::read_text(path)?;
        match extension.as_str() {
            "toml" => toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "TOML".into(),
                message: e.to_string(),
            }),
            _ => serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "JSON".into(),
                message: e.to_string(),
            }),
        }
    }

    /// Load configuration if the file exists.
    pub fn load_optional<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(None);
        }
        self.load(path).map(Some)
    }
}
