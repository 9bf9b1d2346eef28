//! Base directory for temporary trees built by tests
//!
//! `TMPDIR` may be relative (e.g. `TMPDIR=tmp`), which would place scratch
//! trees inside the working directory and, worse, make their paths relative.
//! Directory traversal and output validation both care about that, so
//! scratch trees always live under an absolute base.

use std::env;
use std::path::PathBuf;

/// Absolute directory to create temporary trees in
pub fn temp_dir_base() -> PathBuf {
    let dir = env::temp_dir();
    if dir.is_absolute() {
        return dir;
    }

    #[cfg(windows)]
    {
        env::var("TEMP")
            .or_else(|_| env::var("TMP"))
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/tmp")
    }
}

/// Switches the process working directory until dropped
///
/// Tests using it must be `#[serial]`: the working directory is process-wide.
#[cfg(test)]
pub(crate) struct CwdGuard(PathBuf);

#[cfg(test)]
impl CwdGuard {
    pub(crate) fn enter(dir: &std::path::Path) -> Self {
        let previous = env::current_dir().expect("Failed to read cwd");
        env::set_current_dir(dir).expect("Failed to change cwd");
        Self(previous)
    }
}

#[cfg(test)]
impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.0);
    }
}
