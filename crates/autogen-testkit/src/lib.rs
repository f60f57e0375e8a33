//! Test utilities for autogen
//!
//! Shared helpers for building throwaway project trees in tests.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// All test trees land in one gitignored location that is easy to clean up
/// by hand. The directory is removed when the returned `TempDir` is dropped.
///
/// # Panics
///
/// Panics if the current directory is unknown or `.tmp/` cannot be created.
///
/// # Examples
///
/// ```rust
/// use autogen_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// std::fs::write(temp.path().join("main.c"), "int x;\n").unwrap();
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let tmp_base = std::env::current_dir()?.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Write `content` to `root/relative`, creating parent directories
///
/// Returns the full path of the written file.
pub fn write_file(root: &Path, relative: impl AsRef<Path>, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create {}: {}", parent.display(), e));
    }
    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));
    path
}

/// Read `root/relative` as a string
pub fn read_file(root: &Path, relative: impl AsRef<Path>) -> String {
    let path = root.join(relative);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}

/// Minimal project: two config items, one message key, one inline target
///
/// Lays out `autogen.toml`, `.autogen_config` and `src/main.c` under `root`.
/// `src/main.c` holds a single region whose generated output is stale.
pub fn minimal_project(root: &Path) {
    write_file(root, "autogen.toml", MINIMAL_MANIFEST);
    write_file(root, ".autogen_config", "SUPPORTED_PLATFORMS=\"aplite basalt\"\n");
    write_file(root, "src/main.c", MINIMAL_MAIN_C);
}

pub const MINIMAL_MANIFEST: &str = r#"[project]
version = "1.4"
config_version = "2"

[settings]
file = ".autogen_config"

[[configuration]]
key = "CONFIG_SECONDS"
default = "0"

[[configuration]]
key = "CONFIG_COLOR"
default = "GColorBlueARGB8"
type = "GColor"

[messages]
keys = ["JS_READY"]

[files]
inline = ["src/main.c"]
"#;

pub const MINIMAL_MAIN_C: &str = "#include <pebble.h>\n\
\n\
// -- autogen\n\
// -- ## for item in configuration\n\
// -- #define {{ item.key }} {{ item.id }}\n\
// -- ## endfor\n\
#define OLD_VALUE 99\n\
// -- end autogen\n\
\n\
int main(void) { return 0; }\n";
