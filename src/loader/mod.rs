//! Loading resource bundles from files and directory trees
//!
//! - [`FileResourceLoader`] decodes one file, or every file under a directory
//! - [`DirectoryTraverser`] decides which files a directory contributes
//! - [`BulkResourceLoader`] combines explicit files and directories
//!
//! Loading is fail-fast unless [`LoadPolicy::CollectAll`] is asked for.

pub mod bulk;
pub mod traverse;

pub use bulk::{BulkResourceLoader, LoadFailure, LoadReport};
pub use traverse::DirectoryTraverser;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{self, Result};
use crate::resource::{ContentDecoder, ResourceBundle, YamlDecoder};

/// What to do when a file fails to load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadPolicy {
    /// Abort on the first error; no partial results
    #[default]
    FailFast,
    /// Record every failure and keep loading
    CollectAll,
}

/// Loads resource bundles from single files and directory trees
#[derive(Debug, Default, Clone)]
pub struct FileResourceLoader<D = YamlDecoder> {
    decoder: D,
}

impl FileResourceLoader {
    /// Create a loader using the YAML decoder
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: ContentDecoder> FileResourceLoader<D> {
    /// Create a loader with a custom decoder
    pub fn with_decoder(decoder: D) -> Self {
        Self { decoder }
    }

    /// Decode a single file into a bundle
    pub fn load_file(&self, path: &Path) -> Result<ResourceBundle> {
        fs::metadata(path).map_err(|e| error::fs::from_io(path, &e))?;
        let bytes = fs::read(path).map_err(|e| error::fs::from_io(path, &e))?;

        let objects = self
            .decoder
            .decode(&bytes)
            .map_err(|e| error::parse_failed(path.display().to_string(), e.0))?;

        debug!(path = %path.display(), objects = objects.len(), "loaded resource file");
        Ok(ResourceBundle::new(path, objects))
    }

    /// Decode every non-hidden file under `path`, in traversal order
    ///
    /// The first error aborts the walk; files after it are never decoded.
    pub fn load_directory(&self, path: &Path) -> Result<Vec<ResourceBundle>> {
        DirectoryTraverser::new(path)
            .files()
            .map(|file| file.and_then(|file| self.load_file(&file)))
            .collect()
    }
}
