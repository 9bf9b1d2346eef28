//! Common test utilities for fsprovider integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch directory tree for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new empty workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp directory");
        Self { temp, path }
    }

    /// Write a file, creating parent directories as needed
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Create a directory, including parents
    #[allow(dead_code)]
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let dir = self.path.join(path);
        std::fs::create_dir_all(&dir).expect("Failed to create directory");
        dir
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Absolute path of a workspace entry
    pub fn join(&self, path: &str) -> PathBuf {
        self.path.join(path)
    }

    /// Build the tree used by most tests:
    ///
    /// ```text
    /// a/x.yaml
    /// a/.hidden/y.yaml
    /// a/b/z.yaml
    /// extra/route.yaml
    /// ```
    pub fn with_sample_tree(self) -> Self {
        self.write_file("a/x.yaml", "kind: Gateway\nmetadata:\n  name: x\n");
        self.write_file("a/.hidden/y.yaml", "kind: Secret\nmetadata:\n  name: y\n");
        self.write_file("a/b/z.yaml", "kind: HTTPRoute\nmetadata:\n  name: z\n");
        self.write_file("extra/route.yaml", "kind: HTTPRoute\nmetadata:\n  name: route\n");
        self
    }
}

/// `fsprovider` command isolated from the user's global configuration
#[allow(dead_code)]
pub fn fsprovider_cmd(workspace: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("fsprovider").expect("binary should be built");
    cmd.current_dir(workspace)
        .env("FSPROVIDER_CONFIG_DIR", workspace.join(".no-global-config"))
        .env_remove("FSPROVIDER_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}
