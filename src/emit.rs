use std::path::{Path, PathBuf};

use crate::error::{AppskelError, Result};
use crate::render::RenderedFile;

/// Write a rendered file into the destination directory, creating parent
/// directories as needed.
///
/// An existing file at the target path is overwritten without warning; the
/// last write wins.
pub fn write_rendered(rendered: &RenderedFile, dest_dir: &Path) -> Result<PathBuf> {
    let path = dest_dir.join(&rendered.file_name);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AppskelError::Io {
            context: format!("creating directory {}", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(&path, &rendered.content).map_err(|e| AppskelError::Io {
        context: format!("writing {}", path.display()),
        source: e,
    })?;

    Ok(path)
}
