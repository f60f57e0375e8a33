// Core modules
pub mod config;
pub mod context;
pub mod error;
mod fs;
pub mod patch;
pub mod project;
pub mod render;
pub mod settings;
pub mod template;

// Re-export commonly used types
pub use error::{AutogenError, Result};
