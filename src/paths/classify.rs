//! Splitting a mixed path list into directories and files

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{SkipRecord, clean, parent_dir};

/// Result of [`classify`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Paths that are directories
    pub dirs: BTreeSet<PathBuf>,
    /// Paths that are not directories and whose parent is not in `dirs`
    pub files: BTreeSet<PathBuf>,
    /// Paths that could not be inspected
    pub skipped: Vec<SkipRecord>,
}

/// Classify `paths` into directory and file sets
///
/// Duplicates are collapsed first, so input order never matters. Each path is
/// inspected with `symlink_metadata`; a symlink counts as a file. Paths that
/// cannot be inspected end up in `skipped` rather than failing the call.
///
/// A file whose parent directory is itself in the directory set is dropped
/// from the file set: watching the directory already covers it. Both sides
/// are compared in lexically cleaned form, so `conf` covers `./conf/x.yaml`.
pub fn classify<I, P>(paths: I) -> Classification
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let unique: BTreeSet<PathBuf> = paths
        .into_iter()
        .map(|p| p.as_ref().to_path_buf())
        .collect();

    let mut result = Classification::default();

    for path in unique {
        match fs::symlink_metadata(&path) {
            Ok(meta) if meta.is_dir() => {
                result.dirs.insert(path);
            }
            Ok(_) => {
                result.files.insert(path);
            }
            Err(e) => {
                debug!(
                    path = %path.display(),
                    error = %e,
                    "skipping path that cannot be inspected"
                );
                result.skipped.push(SkipRecord::from_io(&path, &e));
            }
        }
    }

    let dirs: BTreeSet<PathBuf> = result.dirs.iter().map(|dir| clean(dir)).collect();
    result
        .files
        .retain(|file| !dirs.contains(&parent_dir(&clean(file))));

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temp::CwdGuard;
    use serial_test::serial;
    use tempfile::TempDir;

    fn tree() -> TempDir {
        let temp = TempDir::new_in(crate::temp::temp_dir_base())
            .expect("Failed to create temp directory");
        fs::create_dir_all(temp.path().join("a/b")).expect("Failed to create dirs");
        fs::write(temp.path().join("a/x.yaml"), "kind: A").expect("Failed to write x.yaml");
        fs::write(temp.path().join("a/b/z.yaml"), "kind: B").expect("Failed to write z.yaml");
        fs::write(temp.path().join("top.yaml"), "kind: T").expect("Failed to write top.yaml");
        temp
    }

    #[test]
    fn test_classify_directory_subsumes_child_file() {
        let temp = tree();
        let a = temp.path().join("a");
        let x = a.join("x.yaml");

        let result = classify([&a, &x]);

        assert_eq!(result.dirs, BTreeSet::from([a]));
        assert!(result.files.is_empty());
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_classify_keeps_file_outside_tracked_dirs() {
        let temp = tree();
        let a = temp.path().join("a");
        let top = temp.path().join("top.yaml");

        let result = classify([&a, &top]);

        assert_eq!(result.dirs, BTreeSet::from([a]));
        assert_eq!(result.files, BTreeSet::from([top]));
    }

    #[test]
    fn test_classify_only_immediate_parent_subsumes() {
        // A file two levels below a tracked directory stays tracked on its own.
        let temp = tree();
        let a = temp.path().join("a");
        let z = a.join("b/z.yaml");

        let result = classify([&a, &z]);

        assert_eq!(result.files, BTreeSet::from([z]));
    }

    #[test]
    fn test_classify_skips_missing_paths() {
        let temp = tree();
        let missing = temp.path().join("nope.yaml");
        let a = temp.path().join("a");

        let result = classify([&missing, &a]);

        assert_eq!(result.dirs, BTreeSet::from([a]));
        assert!(result.files.is_empty());
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].path, missing);
    }

    #[test]
    fn test_classify_ignores_order_and_duplicates() {
        let temp = tree();
        let a = temp.path().join("a");
        let top = temp.path().join("top.yaml");
        let x = a.join("x.yaml");

        let first = classify([&a, &top, &x]);
        let second = classify([&x, &top, &a, &top, &x]);

        assert_eq!(first.dirs, second.dirs);
        assert_eq!(first.files, second.files);
    }

    #[test]
    fn test_classify_trailing_slash_matches_parent() {
        let temp = tree();
        let a_slash = PathBuf::from(format!("{}/", temp.path().join("a").display()));
        let x = temp.path().join("a/x.yaml");

        let result = classify([&a_slash, &x]);

        assert_eq!(result.dirs.len(), 1);
        assert!(result.files.is_empty());
    }

    #[test]
    #[serial]
    fn test_classify_relative_spellings_of_same_directory() {
        let temp = tree();
        let _guard = CwdGuard::enter(temp.path());

        let result = classify(["a", "./a/x.yaml", "./top.yaml"]);

        assert_eq!(result.dirs, BTreeSet::from([PathBuf::from("a")]));
        assert_eq!(result.files, BTreeSet::from([PathBuf::from("./top.yaml")]));
    }

    #[test]
    fn test_classify_folds_parent_components() {
        let temp = tree();
        let a = temp.path().join("a");
        let detour = temp.path().join("a/b/../x.yaml");

        let result = classify([&a, &detour]);

        assert!(result.files.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_symlink_to_directory_is_a_file() {
        let temp = tree();
        let link = temp.path().join("link");
        std::os::unix::fs::symlink(temp.path().join("a"), &link).expect("Failed to symlink");

        let result = classify([&link]);

        assert!(result.dirs.is_empty());
        assert_eq!(result.files, BTreeSet::from([link]));
    }

    #[test]
    fn test_classify_empty_input() {
        let result = classify(Vec::<PathBuf>::new());
        assert_eq!(result, Classification::default());
    }
}
