//! Watch surface derived from a mixed list of paths
//!
//! A [`WatchPlan`] is what a filesystem watcher needs: the directories to
//! subscribe to, the individually tracked files, and a way to tell whether
//! an event path matters. Subscribing is left to the caller.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::paths::{SkipRecord, classify, expand_subdirs, is_hidden, parents_of};

/// Directories and files to observe for a set of configured paths
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WatchPlan {
    /// Configured paths that are directories
    pub dirs: BTreeSet<PathBuf>,
    /// Configured files not already covered by `dirs`
    pub files: BTreeSet<PathBuf>,
    /// Every directory a watcher has to subscribe to
    pub watch_dirs: BTreeSet<PathBuf>,
    /// Paths dropped while building the plan
    pub skipped: Vec<SkipRecord>,
}

impl WatchPlan {
    /// Build the plan from configured `paths`
    ///
    /// Watched directories are the non-hidden subdirectory closure of every
    /// configured directory plus the parent of every configured file.
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let classification = classify(paths);
        let expansion = expand_subdirs(&classification.dirs);

        let mut watch_dirs = expansion.dirs;
        watch_dirs.extend(parents_of(&classification.files));

        let mut skipped = classification.skipped;
        skipped.extend(expansion.skipped);

        Self {
            dirs: classification.dirs,
            files: classification.files,
            watch_dirs,
            skipped,
        }
    }

    /// Whether an event on `path` concerns a tracked resource
    ///
    /// True for tracked files, and for paths under a tracked directory with
    /// no hidden component below that directory. Pure path logic.
    pub fn tracks(&self, path: &Path) -> bool {
        if self.files.contains(path) {
            return true;
        }

        self.dirs.iter().any(|dir| {
            path.strip_prefix(dir).is_ok_and(|rel| {
                rel.components()
                    .all(|component| !is_hidden(component.as_os_str()))
            })
        })
    }
}
