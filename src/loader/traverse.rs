//! Depth-first walk over the loadable files of a directory tree

use std::path::PathBuf;

use tracing::debug;
use walkdir::{DirEntry, FilterEntry, WalkDir};

use crate::error::{self, ProviderError, Result};
use crate::paths::is_hidden;

type Walk = FilterEntry<walkdir::IntoIter, fn(&DirEntry) -> bool>;

/// Walks a directory tree, yielding every non-hidden file
///
/// Entries come out in directory-listing order (not sorted), and each
/// subdirectory is exhausted before the next sibling entry. Hidden entries
/// below the root, and everything beneath hidden directories, are never
/// yielded. Symlinks are not followed as directories.
#[derive(Debug, Clone)]
pub struct DirectoryTraverser {
    root: PathBuf,
}

impl DirectoryTraverser {
    /// Create a traverser rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Lazily iterate the files below the root
    ///
    /// A root that is missing, unreadable or not a directory, and any
    /// subdirectory that cannot be listed, shows up as an `Err` item.
    /// The walk keeps an explicit stack, so tree depth does not grow the
    /// call stack.
    pub fn files(&self) -> Files {
        let walk = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(keep as fn(&DirEntry) -> bool);

        Files {
            root: self.root.clone(),
            walk,
        }
    }
}

fn keep(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !is_hidden(entry.file_name()) {
        return true;
    }
    debug!(path = %entry.path().display(), "skipping hidden entry");
    false
}

/// Iterator returned by [`DirectoryTraverser::files`]
pub struct Files {
    root: PathBuf,
    walk: Walk,
}

impl Iterator for Files {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walk.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(self.list_error(&e))),
            };

            if entry.depth() == 0 {
                if entry.file_type().is_dir() {
                    continue;
                }
                return Some(Err(error::list_failed(
                    self.root.display().to_string(),
                    "not a directory",
                )));
            }

            if entry.file_type().is_dir() {
                continue;
            }

            return Some(Ok(entry.into_path()));
        }
    }
}

impl Files {
    fn list_error(&self, err: &walkdir::Error) -> ProviderError {
        let path = err.path().unwrap_or(&self.root);
        let reason = err
            .io_error()
            .map_or_else(|| err.to_string(), ToString::to_string);
        error::list_failed(path.display().to_string(), reason)
    }
}
