//! Containing directories of files, computed without touching the disk

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Immediate containing directory of `path`
///
/// A bare file name lives in `.`, and the root is its own parent.
pub fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None if path.as_os_str().is_empty() => PathBuf::from("."),
        None => path.to_path_buf(),
    }
}

/// Set of containing directories of `files`
pub fn parents_of<I, P>(files: I) -> BTreeSet<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    files
        .into_iter()
        .map(|file| parent_dir(file.as_ref()))
        .collect()
}
