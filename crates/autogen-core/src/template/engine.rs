//! Template engine implementation

use crate::config::consts::DEFAULT_LINE_STATEMENT_PREFIX;
use crate::template::error::TemplateError;
use minijinja::syntax::SyntaxConfig;
use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};
use serde::Serialize;

/// Template context holding the data templates are rendered against
#[derive(Debug, Clone)]
pub struct TemplateContext {
    data: Value,
}

impl TemplateContext {
    /// Create a new template context from an existing value
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    /// Create a template context from any serializable value
    pub fn from_serialize<T: Serialize>(data: &T) -> Self {
        Self::new(Value::from_serialize(data))
    }

    /// Get the underlying value
    pub fn data(&self) -> &Value {
        &self.data
    }
}

/// Template engine for rendering Jinja-style templates
///
/// Undefined variables are errors, output is never auto-escaped, and lines
/// starting with the control-line prefix (after whitespace) are statements.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine using the default `##` control-line prefix
    pub fn new() -> Self {
        Self::with_line_statement_prefix(DEFAULT_LINE_STATEMENT_PREFIX)
            .expect("default line-statement prefix is valid")
    }

    /// Create a template engine with a custom control-line prefix
    ///
    /// An empty prefix disables control lines entirely.
    pub fn with_line_statement_prefix(prefix: &str) -> Result<Self, TemplateError> {
        let mut env = base_environment();

        if !prefix.is_empty() {
            let syntax = SyntaxConfig::builder()
                .line_statement_prefix(prefix.to_string())
                .build()
                .map_err(|e| TemplateError::InvalidSyntaxConfig {
                    message: e.to_string(),
                })?;
            env.set_syntax(syntax);
        }

        Ok(Self::from_env(env))
    }

    fn from_env(env: Environment<'static>) -> Self {
        Self { env }
    }

    /// Render a template with the given context
    ///
    /// `name` only shows up in error messages.
    pub fn render(
        &self,
        name: &str,
        template: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        self.env
            .render_named_str(name, template, context.data())
            .map_err(TemplateError::from)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn base_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env
}

/// Convenience function to render a template with a default engine
pub fn render(template: &str, context: &TemplateContext) -> Result<String, TemplateError> {
    TemplateEngine::new().render("<string>", template, context)
}
