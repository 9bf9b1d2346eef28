//! Validation of write targets

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{self, Result};

use super::{clean, parent_dir};

/// Resolve `raw` to a clean absolute path whose parent directory exists
///
/// Relative paths are resolved against the current working directory. The
/// result is cleaned lexically (`.` dropped, `..` folded) without following
/// symlinks. An empty path names the working directory. Nothing is created
/// or written.
pub fn validate_output_path(raw: impl AsRef<Path>) -> Result<PathBuf> {
    let raw = raw.as_ref();
    let raw = if raw.as_os_str().is_empty() {
        Path::new(".")
    } else {
        raw
    };

    let absolute = std::path::absolute(raw)
        .map_err(|e| error::absolute_failed(raw.display().to_string(), e.to_string()))?;
    let absolute = clean(&absolute);

    let parent = parent_dir(&absolute);
    match fs::metadata(&parent) {
        Ok(_) => Ok(absolute),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(error::output_dir_not_found(parent.display().to_string()))
        }
        Err(e) => Err(error::file_read_failed(
            parent.display().to_string(),
            e.to_string(),
        )),
    }
}
