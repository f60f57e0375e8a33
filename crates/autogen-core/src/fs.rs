//! File helpers shared by the patcher and the whole-file renderer

use crate::error::{AutogenError, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub(crate) fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| AutogenError::io(path, e))
}

/// Replace `path` with `content` atomically using NamedTempFile + persist
///
/// The temp file lives next to the target so the final rename stays on one
/// filesystem. Permissions of an existing target are carried over.
pub(crate) fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| AutogenError::io(parent, e))?;

    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| AutogenError::io(temp_file.path(), e))?;

    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| AutogenError::io(temp_file.path(), e))?;

    if let Ok(metadata) = std::fs::metadata(path) {
        std::fs::set_permissions(temp_file.path(), metadata.permissions())
            .map_err(|e| AutogenError::io(temp_file.path(), e))?;
    }

    temp_file
        .persist(path)
        .map_err(|e| AutogenError::io(path, e.error))?;

    Ok(())
}
