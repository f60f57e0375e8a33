//! External build settings written by the project's configure step
//!
//! The store is a plain `KEY=value` file. Values may be wrapped in double
//! quotes; blank lines and `#` comments are ignored.

use crate::error::{AutogenError, Result};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Parsed settings store
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl SettingsStore {
    /// Read the store at `path`
    ///
    /// A missing file is not an error here: every lookup against it then
    /// fails with `MissingExternalSetting`, naming the key that was needed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Self::parse(path, &content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("settings store {} does not exist", path.display());
                Ok(Self::parse(path, ""))
            }
            Err(e) => Err(AutogenError::io(path, e)),
        }
    }

    /// Parse store content; `path` is only used in error messages
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Self {
        let mut values = BTreeMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                let value = value.trim().trim_matches('"');
                values.insert(key.trim().to_string(), value.to_string());
            }
        }

        Self {
            path: path.into(),
            values,
        }
    }

    /// Look up a required setting
    pub fn get(&self, key: &str) -> Result<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| AutogenError::MissingExternalSetting {
                key: key.to_string(),
                path: self.path.clone(),
            })
    }

    /// Look up a required setting holding a whitespace separated list
    pub fn get_list(&self, key: &str) -> Result<Vec<String>> {
        Ok(self
            .get(key)?
            .split_whitespace()
            .map(str::to_string)
            .collect())
    }

    /// Where the store was read from
    pub fn path(&self) -> &Path {
        &self.path
    }
}
