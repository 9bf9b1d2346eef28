//! Loading explicit files and whole directories in one call

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::{DirectoryTraverser, FileResourceLoader, LoadPolicy};
use crate::error::{ProviderError, Result};
use crate::resource::{ContentDecoder, ResourceBundle, YamlDecoder};

/// A file or directory that failed under [`LoadPolicy::CollectAll`]
#[derive(Debug)]
pub struct LoadFailure {
    /// File that failed to load, or the directory whose walk failed
    pub path: PathBuf,
    pub error: ProviderError,
}

/// Outcome of [`BulkResourceLoader::load_with_policy`]
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Bundles in load order: explicit files first, then directories
    pub bundles: Vec<ResourceBundle>,
    /// Failures, empty under [`LoadPolicy::FailFast`]
    pub failures: Vec<LoadFailure>,
}

impl LoadReport {
    /// Whether every file loaded
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total number of objects across all bundles
    pub fn object_count(&self) -> usize {
        self.bundles.iter().map(|b| b.objects.len()).sum()
    }
}

/// Loads a list of explicit files followed by a list of directories
#[derive(Debug, Default, Clone)]
pub struct BulkResourceLoader<D = YamlDecoder> {
    loader: FileResourceLoader<D>,
}

impl BulkResourceLoader {
    /// Create a bulk loader using the YAML decoder
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: ContentDecoder> BulkResourceLoader<D> {
    /// Create a bulk loader with a custom decoder
    pub fn with_decoder(decoder: D) -> Self {
        Self {
            loader: FileResourceLoader::with_decoder(decoder),
        }
    }

    /// Load `files` in order, then every directory in `dirs` in order
    ///
    /// The first failure anywhere aborts the call; nothing loaded before it
    /// is returned.
    pub fn load<F, P, G, Q>(&self, files: F, dirs: G) -> Result<Vec<ResourceBundle>>
    where
        F: IntoIterator<Item = P>,
        P: AsRef<Path>,
        G: IntoIterator<Item = Q>,
        Q: AsRef<Path>,
    {
        self.load_with_policy(files, dirs, LoadPolicy::FailFast)
            .map(|report| report.bundles)
    }

    /// Like [`load`](Self::load), with an explicit failure policy
    pub fn load_with_policy<F, P, G, Q>(
        &self,
        files: F,
        dirs: G,
        policy: LoadPolicy,
    ) -> Result<LoadReport>
    where
        F: IntoIterator<Item = P>,
        P: AsRef<Path>,
        G: IntoIterator<Item = Q>,
        Q: AsRef<Path>,
    {
        let mut report = LoadReport::default();

        for file in files {
            let file = file.as_ref();
            match self.loader.load_file(file) {
                Ok(bundle) => report.bundles.push(bundle),
                Err(error) => record(policy, &mut report, file, error)?,
            }
        }

        for dir in dirs {
            let dir = dir.as_ref();
            match policy {
                LoadPolicy::FailFast => report.bundles.extend(self.loader.load_directory(dir)?),
                LoadPolicy::CollectAll => self.collect_directory(dir, &mut report),
            }
        }

        info!(
            bundles = report.bundles.len(),
            objects = report.object_count(),
            failures = report.failures.len(),
            "loaded resources"
        );
        Ok(report)
    }

    fn collect_directory(&self, dir: &Path, report: &mut LoadReport) {
        for file in DirectoryTraverser::new(dir).files() {
            let outcome = match file {
                Ok(file) => self
                    .loader
                    .load_file(&file)
                    .map_err(|error| LoadFailure { path: file, error }),
                Err(error) => Err(LoadFailure {
                    path: dir.to_path_buf(),
                    error,
                }),
            };
            match outcome {
                Ok(bundle) => report.bundles.push(bundle),
                Err(failure) => {
                    warn!(path = %failure.path.display(), error = %failure.error, "failed to load");
                    report.failures.push(failure);
                }
            }
        }
    }
}

fn record(
    policy: LoadPolicy,
    report: &mut LoadReport,
    path: &Path,
    error: ProviderError,
) -> Result<()> {
    match policy {
        LoadPolicy::FailFast => Err(error),
        LoadPolicy::CollectAll => {
            warn!(path = %path.display(), error = %error, "failed to load");
            report.failures.push(LoadFailure {
                path: path.to_path_buf(),
                error,
            });
            Ok(())
        }
    }
}
