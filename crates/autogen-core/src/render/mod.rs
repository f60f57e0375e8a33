//! Whole-file renderer - `name.template.ext` → `name.ext`

use crate::config::consts::TEMPLATE_MARKER;
use crate::error::{AutogenError, Result};
use crate::fs;
use crate::template::{TemplateContext, TemplateEngine};
use std::path::{Path, PathBuf};

/// Output path of a whole-file template
///
/// Removes the first `.template` from the file name:
/// `package.template.json` → `package.json`, `Makefile.template` → `Makefile`.
pub fn output_path(template_path: &Path) -> Result<PathBuf> {
    let not_a_template = || AutogenError::NotATemplate {
        path: template_path.to_path_buf(),
    };

    let file_name = template_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(not_a_template)?;
    let (stem, rest) = file_name
        .split_once(TEMPLATE_MARKER)
        .ok_or_else(not_a_template)?;

    let output_name = format!("{}{}", stem, rest);
    if output_name.is_empty() {
        return Err(not_a_template());
    }

    Ok(template_path.with_file_name(output_name))
}

/// Renders entire template files against the shared context
pub struct WholeFileRenderer<'a> {
    engine: &'a TemplateEngine,
    context: &'a TemplateContext,
}

impl<'a> WholeFileRenderer<'a> {
    pub fn new(engine: &'a TemplateEngine, context: &'a TemplateContext) -> Self {
        Self { engine, context }
    }

    /// Render `template_path` and overwrite its output file
    ///
    /// The output is written every time, whether or not it changed.
    /// Returns the path that was written.
    pub fn render(&self, template_path: impl AsRef<Path>) -> Result<PathBuf> {
        let template_path = template_path.as_ref();
        let output = output_path(template_path)?;

        let source = fs::read_to_string(template_path)?;
        let location = template_path.display().to_string();
        let rendered = self
            .engine
            .render(&location, &source, self.context)
            .map_err(|source| AutogenError::TemplateRender { location, source })?;

        fs::atomic_write(&output, &rendered)?;
        log::info!(
            "rendered {} -> {}",
            template_path.display(),
            output.display()
        );

        Ok(output)
    }
}
