//! Template error types

use std::fmt;

/// Template rendering errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Malformed template syntax
    MalformedSyntax {
        /// Error message
        message: String,
        /// Line number where the error occurred, if known
        line: Option<usize>,
    },

    /// Variable or attribute not present in the context
    Undefined {
        /// Error message
        message: String,
        /// Line number where the error occurred, if known
        line: Option<usize>,
    },

    /// Any other failure while evaluating the template
    Evaluation {
        /// Error message
        message: String,
        /// Line number where the error occurred, if known
        line: Option<usize>,
    },

    /// The configured control-line prefix was rejected
    InvalidSyntaxConfig {
        /// Error message
        message: String,
    },
}

impl From<minijinja::Error> for TemplateError {
    fn from(err: minijinja::Error) -> Self {
        let message = match err.detail() {
            Some(detail) => detail.to_string(),
            None => err.kind().to_string(),
        };
        let line = err.line();

        match err.kind() {
            minijinja::ErrorKind::SyntaxError => TemplateError::MalformedSyntax { message, line },
            minijinja::ErrorKind::UndefinedError => TemplateError::Undefined { message, line },
            _ => TemplateError::Evaluation { message, line },
        }
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, line: Option<usize>) -> fmt::Result {
    match line {
        Some(line) => write!(f, " at line {}", line),
        None => Ok(()),
    }
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::MalformedSyntax { message, line } => {
                write!(f, "Malformed syntax")?;
                write_line(f, *line)?;
                write!(f, ": {}", message)
            }
            TemplateError::Undefined { message, line } => {
                write!(f, "Undefined value")?;
                write_line(f, *line)?;
                write!(f, ": {}", message)
            }
            TemplateError::Evaluation { message, line } => {
                write!(f, "Render failed")?;
                write_line(f, *line)?;
                write!(f, ": {}", message)
            }
            TemplateError::InvalidSyntaxConfig { message } => {
                write!(f, "Invalid control-line prefix: {}", message)
            }
        }
    }
}

impl std::error::Error for TemplateError {}
