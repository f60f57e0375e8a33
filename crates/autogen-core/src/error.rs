use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutogenError {
    // Settings errors
    #[error(
        "MISSING_EXTERNAL_SETTING: tried to read '{key}' in {}, but key does not exist",
        .path.display()
    )]
    MissingExternalSetting { key: String, path: PathBuf },

    // Manifest errors
    #[error("MANIFEST_INVALID: {0}")]
    ManifestInvalid(String),

    // Region errors
    #[error(
        "UNTERMINATED_REGION: unclosed autogen section in {} started on line {start_line}",
        .path.display()
    )]
    UnterminatedRegion { path: PathBuf, start_line: usize },

    #[error(
        "NESTED_REGION: autogen marker on line {line} of {} while the section started on line {start_line} is still open",
        .path.display()
    )]
    NestedRegion {
        path: PathBuf,
        start_line: usize,
        line: usize,
    },

    // Template errors
    #[error("TEMPLATE_RENDER_ERROR: {location}: {source}")]
    TemplateRender {
        location: String,
        #[source]
        source: crate::template::TemplateError,
    },

    #[error(
        "NOT_A_TEMPLATE: '{}' has no '.template' marker in its file name",
        .path.display()
    )]
    NotATemplate { path: PathBuf },

    // IO errors
    #[error("IO_ERROR: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AutogenError {
    /// Wrap an I/O error together with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AutogenError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<toml::de::Error> for AutogenError {
    fn from(err: toml::de::Error) -> Self {
        AutogenError::ManifestInvalid(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AutogenError>;
