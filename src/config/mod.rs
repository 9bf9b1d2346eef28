//! Configuration file handling for fsprovider
//!
//! Configuration is layered (later layers override earlier ones):
//! 1. Global `config.yaml` from the user config directory (if exists)
//! 2. `fsprovider.yaml` in the working directory, or the file given with `--config`
//! 3. Command line flags

pub mod provider;

pub use provider::{OutputFormat, ProviderConfig};

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{self, Result};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "fsprovider.yaml";

/// Environment variable overriding the global configuration directory
pub const CONFIG_DIR_ENV: &str = "FSPROVIDER_CONFIG_DIR";

/// Layered configuration loader
pub struct ConfigLoader {
    /// Directory searched for `fsprovider.yaml`
    working_dir: PathBuf,
    /// Configuration file named on the command line
    explicit: Option<PathBuf>,
    /// Directory holding the global `config.yaml`
    global_dir: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader for `working_dir`, using the default global directory
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        let global_dir = std::env::var_os(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join("fsprovider")));

        Self {
            working_dir: working_dir.into(),
            explicit: None,
            global_dir,
        }
    }

    /// Use `path` instead of `fsprovider.yaml` in the working directory
    pub fn with_explicit(mut self, path: Option<PathBuf>) -> Self {
        self.explicit = path.map(|p| self.working_dir.join(p));
        self
    }

    /// Override the global configuration directory (`None` disables it)
    pub fn with_global_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.global_dir = dir;
        self
    }

    /// Load and merge all configuration layers below the command line
    pub fn load(&self) -> Result<ProviderConfig> {
        let mut config = ProviderConfig::default();

        if let Some(global) = self.load_global()? {
            config = config.merge(global);
        }

        if let Some(local) = self.load_local()? {
            config = config.merge(local);
        }

        Ok(config)
    }

    fn load_global(&self) -> Result<Option<ProviderConfig>> {
        let Some(dir) = &self.global_dir else {
            return Ok(None);
        };
        load_optional(&dir.join("config.yaml"))
    }

    fn load_local(&self) -> Result<Option<ProviderConfig>> {
        match &self.explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(error::config_not_found(path.display().to_string()));
                }
                ProviderConfig::from_file(path).map(Some)
            }
            None => load_optional(&self.working_dir.join(CONFIG_FILE_NAME)),
        }
    }
}

fn load_optional(path: &Path) -> Result<Option<ProviderConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    debug!(path = %path.display(), "loading configuration");
    ProviderConfig::from_file(path).map(Some)
}
