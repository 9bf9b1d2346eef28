//! Inclusive closure of non-hidden subdirectories

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::{SkipRecord, is_hidden};

/// Result of [`expand_subdirs`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Roots plus every non-hidden directory beneath them
    pub dirs: BTreeSet<PathBuf>,
    /// Directories that could not be listed
    pub skipped: Vec<SkipRecord>,
}

/// Collect every non-hidden subdirectory of `roots`, roots included
///
/// Roots are always part of the result, even when they cannot be listed.
/// Hidden directories are neither included nor descended into. Symlinks below
/// a root are not followed. A directory that cannot be listed stops the
/// descent there and is recorded in `skipped`.
pub fn expand_subdirs<I, P>(roots: I) -> Expansion
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut result = Expansion::default();

    for root in roots {
        let root = root.as_ref();
        result.dirs.insert(root.to_path_buf());

        let walker = WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_entry(|e| e.file_type().is_dir() && !is_hidden(e.file_name()));

        for entry in walker {
            match entry {
                Ok(entry) => {
                    result.dirs.insert(entry.into_path());
                }
                Err(e) => {
                    let path = e.path().unwrap_or(root).to_path_buf();
                    debug!(path = %path.display(), error = %e, "skipping unreadable directory");
                    result.skipped.push(SkipRecord::new(path, e.to_string()));
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn tree() -> TempDir {
        let temp = TempDir::new_in(crate::temp::temp_dir_base())
            .expect("Failed to create temp directory");
        for dir in ["a/b/c", "a/.hidden/inner", "a/d", "e"] {
            fs::create_dir_all(temp.path().join(dir)).expect("Failed to create dir");
        }
        fs::write(temp.path().join("a/x.yaml"), "kind: A").expect("Failed to write x.yaml");
        temp
    }

    #[test]
    fn test_expand_collects_nested_directories() {
        let temp = tree();
        let a = temp.path().join("a");

        let result = expand_subdirs([&a]);

        let expected: BTreeSet<PathBuf> = [a.clone(), a.join("b"), a.join("b/c"), a.join("d")]
            .into_iter()
            .collect();
        assert_eq!(result.dirs, expected);
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_expand_excludes_hidden_directories_and_descendants() {
        let temp = tree();
        let a = temp.path().join("a");

        let result = expand_subdirs([&a]);

        assert!(!result.dirs.contains(&a.join(".hidden")));
        assert!(!result.dirs.contains(&a.join(".hidden/inner")));
    }

    #[test]
    fn test_expand_never_includes_files() {
        let temp = tree();
        let a = temp.path().join("a");

        let result = expand_subdirs([&a]);

        assert!(!result.dirs.contains(&a.join("x.yaml")));
    }

    #[test]
    fn test_expand_includes_roots_even_when_missing() {
        let temp = tree();
        let missing = temp.path().join("missing");

        let result = expand_subdirs([&missing]);

        assert_eq!(result.dirs, BTreeSet::from([missing.clone()]));
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].path, missing);
    }

    #[test]
    fn test_expand_hidden_root_is_still_expanded() {
        let temp = tree();
        let hidden = temp.path().join("a/.hidden");

        let result = expand_subdirs([&hidden]);

        assert!(result.dirs.contains(&hidden));
        assert!(result.dirs.contains(&hidden.join("inner")));
    }

    #[test]
    fn test_expand_multiple_roots() {
        let temp = tree();
        let b = temp.path().join("a/b");
        let e = temp.path().join("e");

        let result = expand_subdirs([&b, &e]);

        let expected: BTreeSet<PathBuf> = [b.clone(), b.join("c"), e].into_iter().collect();
        assert_eq!(result.dirs, expected);
    }

    #[cfg(unix)]
    #[test]
    fn test_expand_does_not_follow_symlinked_directories() {
        let temp = tree();
        let e = temp.path().join("e");
        std::os::unix::fs::symlink(temp.path().join("a"), e.join("link"))
            .expect("Failed to symlink");

        let result = expand_subdirs([&e]);

        assert_eq!(result.dirs, BTreeSet::from([e]));
    }
}
