//! Generation run - renders whole-file templates, then patches inline targets

use crate::config::Manifest;
use crate::context::{Context, ContextBuilder};
use crate::error::{AutogenError, Result};
use crate::patch::{InlinePatcher, PatchOutcome};
use crate::render::WholeFileRenderer;
use crate::settings::SettingsStore;
use crate::template::TemplateEngine;
use std::path::{Path, PathBuf};

/// What happened to a single target file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Whole-file template rendered to `output`
    Rendered { output: PathBuf },
    /// Inline regions re-rendered and the file rewritten
    Patched { regions: usize },
    /// Inline regions already up to date
    Unchanged,
}

/// Per-file outcomes of one run, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub files: Vec<(PathBuf, FileOutcome)>,
}

impl GenerationReport {
    /// Number of files written during the run
    pub fn written(&self) -> usize {
        self.files
            .iter()
            .filter(|(_, outcome)| *outcome != FileOutcome::Unchanged)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Drives one generation run for a project root
#[derive(Debug)]
pub struct Generator {
    root: PathBuf,
    manifest: Manifest,
}

impl Generator {
    pub fn new(root: impl Into<PathBuf>, manifest: Manifest) -> Self {
        Self {
            root: root.into(),
            manifest,
        }
    }

    /// Generator for `root`, using its autogen.toml or the builtin manifest
    pub fn load(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let manifest = Manifest::load(&root)?;
        Ok(Self::new(root, manifest))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Read the settings store and build the rendering context
    pub fn build_context(&self) -> Result<Context> {
        let settings = SettingsStore::load(self.root.join(&self.manifest.settings.file))?;
        ContextBuilder::new(&self.manifest, &settings).build()
    }

    /// Render every template, then patch every inline target
    ///
    /// Stops at the first error; files handled before it keep their new
    /// content.
    pub fn run(&self) -> Result<GenerationReport> {
        let context = self.build_context()?.to_template_context();
        let engine =
            TemplateEngine::with_line_statement_prefix(&self.manifest.template.line_statement_prefix)
                .map_err(|e| {
                    AutogenError::ManifestInvalid(format!("template.line_statement_prefix: {}", e))
                })?;

        let mut report = GenerationReport::default();

        let renderer = WholeFileRenderer::new(&engine, &context);
        for file in &self.manifest.files.render {
            let output = renderer.render(self.root.join(file))?;
            report
                .files
                .push((file.clone(), FileOutcome::Rendered { output }));
        }

        let patcher = InlinePatcher::new(&engine, &context);
        for file in &self.manifest.files.inline {
            let outcome = match patcher.patch(self.root.join(file))? {
                PatchOutcome::Unchanged => FileOutcome::Unchanged,
                PatchOutcome::Rewritten { regions } => FileOutcome::Patched { regions },
            };
            report.files.push((file.clone(), outcome));
        }

        log::debug!(
            "generation finished: {} file(s), {} written",
            report.files.len(),
            report.written()
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autogen_testkit::temp_dir_in_workspace;
    use std::fs;

    const MANIFEST: &str = r#"
[project]
version = "2.0"
config_version = "5"

[settings]
file = ".autogen_config"

[[configuration]]
key = "CONFIG_SECONDS"
default = "0"

[[configuration]]
key = "CONFIG_REFRESH"
default = "30"
type = "uint16_t"

[messages]
keys = ["JS_READY"]

[files]
render = ["package.template.json"]
inline = ["src/main.c"]
"#;

    const MAIN_C: &str = "#include <stdint.h>\n\n// -- autogen\n// -- ## for item in configuration\n// -- #define {{ item.key }} {{ item.id }}\n// -- ## endfor\n// -- end autogen\n\nint main() { return 0; }\n";

    fn create_test_project(root: &Path) {
        fs::write(root.join("autogen.toml"), MANIFEST).unwrap();
        fs::write(
            root.join(".autogen_config"),
            "SUPPORTED_PLATFORMS=\"basalt chalk\"\n",
        )
        .unwrap();
        fs::write(
            root.join("package.template.json"),
            "{ \"version\": \"{{ version }}\", \"targets\": \"{{ supported_platforms | join(',') }}\" }",
        )
        .unwrap();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src/main.c"), MAIN_C).unwrap();
    }

    #[test]
    fn test_run_renders_and_patches() {
        let temp = temp_dir_in_workspace();
        create_test_project(temp.path());

        let generator = Generator::load(temp.path()).unwrap();
        let report = generator.run().unwrap();

        assert_eq!(report.files.len(), 2);
        assert_eq!(
            report.files[0],
            (
                PathBuf::from("package.template.json"),
                FileOutcome::Rendered {
                    output: temp.path().join("package.json")
                }
            )
        );
        assert_eq!(
            report.files[1],
            (PathBuf::from("src/main.c"), FileOutcome::Patched { regions: 1 })
        );

        let package = fs::read_to_string(temp.path().join("package.json")).unwrap();
        assert_eq!(package, "{ \"version\": \"2.0\", \"targets\": \"basalt,chalk\" }");

        let main_c = fs::read_to_string(temp.path().join("src/main.c")).unwrap();
        assert!(main_c.contains("// -- #define {{ item.key }} {{ item.id }}\n#define CONFIG_SECONDS 1\n#define CONFIG_REFRESH 2\n// -- end autogen"));
        assert!(main_c.starts_with("#include <stdint.h>\n\n"));
        assert!(main_c.ends_with("\n\nint main() { return 0; }\n"));
    }

    #[test]
    fn test_second_run_leaves_inline_targets_unchanged() {
        let temp = temp_dir_in_workspace();
        create_test_project(temp.path());

        let generator = Generator::load(temp.path()).unwrap();
        generator.run().unwrap();
        let report = generator.run().unwrap();

        assert_eq!(report.files[1].1, FileOutcome::Unchanged);
        assert_eq!(report.written(), 1);
    }

    #[test]
    fn test_missing_setting_aborts_before_writing() {
        let temp = temp_dir_in_workspace();
        create_test_project(temp.path());
        fs::write(temp.path().join(".autogen_config"), "OTHER=1\n").unwrap();

        let generator = Generator::load(temp.path()).unwrap();
        let result = generator.run();

        assert!(matches!(
            result,
            Err(AutogenError::MissingExternalSetting { .. })
        ));
        assert!(!temp.path().join("package.json").exists());
        let main_c = fs::read_to_string(temp.path().join("src/main.c")).unwrap();
        assert_eq!(main_c, MAIN_C);
    }

    #[test]
    fn test_missing_target_is_io_error() {
        let temp = temp_dir_in_workspace();
        create_test_project(temp.path());
        fs::remove_file(temp.path().join("src/main.c")).unwrap();

        let generator = Generator::load(temp.path()).unwrap();
        match generator.run() {
            Err(AutogenError::Io { path, .. }) => {
                assert_eq!(path, temp.path().join("src/main.c"));
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_build_context_uses_manifest_settings_file() {
        let temp = temp_dir_in_workspace();
        create_test_project(temp.path());

        let generator = Generator::load(temp.path()).unwrap();
        let context = generator.build_context().unwrap();

        assert_eq!(context.version(), "2.0");
        assert_eq!(context.supported_platforms(), ["basalt", "chalk"]);
        assert_eq!(context.message_keys()[0].key, "MSG_KEY_JS_READY");
        assert_eq!(context.message_keys()[0].id, 100);
    }
}
