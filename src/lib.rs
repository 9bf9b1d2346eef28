//! fsprovider - file-backed resource provider
//!
//! Loads declarative resources from explicit files and directory trees, and
//! works out which directories and files a watcher has to observe.
//!
//! ```no_run
//! use fsprovider::loader::BulkResourceLoader;
//! use fsprovider::paths::classify;
//!
//! let targets = classify(["./conf", "./extra/route.yaml"]);
//! let bundles = BulkResourceLoader::new().load(&targets.files, &targets.dirs)?;
//! for bundle in &bundles {
//!     println!("{}: {} object(s)", bundle.source.display(), bundle.objects.len());
//! }
//! # Ok::<(), fsprovider::error::ProviderError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod paths;
pub mod resource;
pub mod temp;
pub mod ui;
pub mod watch;

pub use error::{ErrorKind, ProviderError, Result};
pub use loader::{BulkResourceLoader, DirectoryTraverser, FileResourceLoader, LoadPolicy};
pub use resource::{ContentDecoder, ResourceBundle, ResourceObject, YamlDecoder};
pub use watch::WatchPlan;
