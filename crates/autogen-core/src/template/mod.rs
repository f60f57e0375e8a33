//! Template module - Jinja-compatible rendering for generated snippets
//!
//! Both the inline patcher and the whole-file renderer go through this
//! module; nothing else talks to `minijinja` directly.
//!
//! ## Syntax
//!
//! - Placeholders: `{{ key }}`, `{{ item.key }}`
//! - Blocks: `{% for item in configuration %} ... {% endfor %}`, `{% if %}`
//! - Control lines: a line whose content starts with `##` (after optional
//!   whitespace) is a statement, e.g. `## for item in configuration`
//! - Undefined variables fail the render instead of producing empty text

pub mod engine;
pub mod error;

pub use engine::{render, TemplateContext, TemplateEngine};
pub use error::TemplateError;
