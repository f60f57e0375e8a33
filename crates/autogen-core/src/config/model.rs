use crate::config::consts::{
    ids, DEFAULT_LINE_STATEMENT_PREFIX, DEFAULT_PLATFORMS_KEY, DEFAULT_SETTINGS_FILE,
    MANIFEST_FILE,
};
use crate::error::{AutogenError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

const BUILTIN_MANIFEST: &str = include_str!("builtin.toml");

/// Context fields that constants must not shadow
const RESERVED_NAMES: &[&str] = &[
    "version",
    "config_version",
    "supported_platforms",
    "configuration",
    "num_config_items",
    "message_keys",
];

/// autogen.toml schema - everything the generator derives its output from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub project: ProjectSection,
    #[serde(default)]
    pub settings: SettingsSection,
    #[serde(default)]
    pub template: TemplateSection,
    #[serde(default)]
    pub constants: BTreeMap<String, toml::Value>,
    #[serde(default)]
    pub configuration: Vec<ConfigItemDecl>,
    #[serde(default)]
    pub messages: MessagesSection,
    #[serde(default)]
    pub files: FilesSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSection {
    pub version: String,
    pub config_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsSection {
    /// Settings store, relative to the project root
    #[serde(default = "default_settings_file")]
    pub file: PathBuf,
    #[serde(default = "default_platforms_key")]
    pub platforms_key: String,
}

impl Default for SettingsSection {
    fn default() -> Self {
        Self {
            file: default_settings_file(),
            platforms_key: default_platforms_key(),
        }
    }
}

fn default_settings_file() -> PathBuf {
    PathBuf::from(DEFAULT_SETTINGS_FILE)
}

fn default_platforms_key() -> String {
    DEFAULT_PLATFORMS_KEY.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSection {
    #[serde(default = "default_line_statement_prefix")]
    pub line_statement_prefix: String,
}

impl Default for TemplateSection {
    fn default() -> Self {
        Self {
            line_statement_prefix: default_line_statement_prefix(),
        }
    }
}

fn default_line_statement_prefix() -> String {
    DEFAULT_LINE_STATEMENT_PREFIX.to_string()
}

/// One declared configuration entry, before ids are assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigItemDecl {
    pub key: String,
    pub default: String,
    #[serde(default, rename = "type")]
    pub value_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessagesSection {
    #[serde(default)]
    pub keys: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilesSection {
    /// Whole-file templates, rendered unconditionally
    #[serde(default)]
    pub render: Vec<PathBuf>,
    /// Host files carrying inline autogen regions
    #[serde(default)]
    pub inline: Vec<PathBuf>,
}

impl Manifest {
    /// Declarations compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_MANIFEST)
    }

    /// Parse and validate a manifest from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read autogen.toml from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| AutogenError::io(path, e))?;
        Self::parse(&content).map_err(|e| match e {
            AutogenError::ManifestInvalid(reason) => {
                AutogenError::ManifestInvalid(format!("{}: {}", path.display(), reason))
            }
            other => other,
        })
    }

    /// Use `<root>/autogen.toml` when present, the builtin declarations otherwise
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let path = root.as_ref().join(MANIFEST_FILE);
        if path.is_file() {
            log::debug!("loading manifest from {}", path.display());
            Self::from_file(&path)
        } else {
            log::debug!("no {} in project root, using builtin manifest", MANIFEST_FILE);
            Self::builtin()
        }
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for item in &self.configuration {
            if item.key.is_empty() {
                return Err(invalid("configuration item with empty key"));
            }
            if !seen.insert(item.key.as_str()) {
                return Err(invalid(format!(
                    "configuration key '{}' declared twice",
                    item.key
                )));
            }
        }

        let capacity = (ids::MESSAGE_KEY_BASE - ids::CONFIG_ITEM_BASE) as usize;
        if self.configuration.len() > capacity {
            return Err(invalid(format!(
                "{} configuration items do not fit below message key id {}",
                self.configuration.len(),
                ids::MESSAGE_KEY_BASE
            )));
        }

        let mut seen = HashSet::new();
        for key in &self.messages.keys {
            if key.is_empty() {
                return Err(invalid("message key with empty name"));
            }
            if !seen.insert(key.as_str()) {
                return Err(invalid(format!("message key '{}' declared twice", key)));
            }
        }

        for (name, value) in &self.constants {
            if RESERVED_NAMES.contains(&name.as_str()) {
                return Err(invalid(format!(
                    "constant '{}' shadows a built-in context field",
                    name
                )));
            }
            if matches!(value, toml::Value::Array(_) | toml::Value::Table(_)) {
                return Err(invalid(format!("constant '{}' must be a scalar", name)));
            }
        }

        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> AutogenError {
    AutogenError::ManifestInvalid(reason.into())
}
