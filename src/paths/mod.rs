//! Path classification and expansion for watch targets
//!
//! These helpers decide *what* has to be watched or read:
//! - [`classify`] splits a mixed path list into directories and files
//! - [`expand_subdirs`] computes every non-hidden subdirectory of a set of roots
//! - [`parents_of`] maps files to their containing directories
//! - [`validate_output_path`] checks that a write target is usable
//!
//! Classification and expansion are best-effort: paths that cannot be
//! inspected are reported as [`SkipRecord`]s instead of failing the call.

pub mod classify;
pub mod expand;
pub mod output;
pub mod parents;

pub use classify::{Classification, classify};
pub use expand::{Expansion, expand_subdirs};
pub use output::validate_output_path;
pub use parents::{parent_dir, parents_of};

use std::ffi::OsStr;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

/// Whether a file or directory name marks a hidden entry (leading `.`)
pub fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// Lexically normalize `path`
///
/// `.` components are dropped and `name/..` pairs folded, without touching
/// the disk. `..` above the root stays at the root; leading `..` of a relative
/// path is kept. A path that cleans away entirely becomes `.`.
pub fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other.as_os_str()),
        }
    }
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

/// A path left out of a best-effort result, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkipRecord {
    pub path: PathBuf,
    pub reason: String,
}

impl SkipRecord {
    pub fn new(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn from_io(path: &Path, err: &std::io::Error) -> Self {
        Self::new(path, err.to_string())
    }
}

impl fmt::Display for SkipRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}
