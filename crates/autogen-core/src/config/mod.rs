//! Manifest loading and generator-wide constants

pub mod consts;
mod model;

pub use model::{
    ConfigItemDecl, FilesSection, Manifest, MessagesSection, ProjectSection, SettingsSection,
    TemplateSection,
};
