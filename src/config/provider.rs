//! `fsprovider.yaml` - provider configuration

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{self, Result};
use crate::loader::LoadPolicy;

/// Serialization format for loaded resources
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Multi-document YAML stream
    #[default]
    Yaml,
    /// JSON array of objects
    Json,
}

/// Provider configuration
///
/// Every field is optional so that several layers can be merged; later
/// layers override earlier ones field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Files and directories to load or watch
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<PathBuf>,

    /// Where to write loaded resources (stdout when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<LoadPolicy>,
}

impl ProviderConfig {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Read and parse a configuration file
    ///
    /// Relative `paths` and `output` are taken relative to the directory
    /// holding the file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| error::config_read_failed(path.display().to_string(), e.to_string()))?;

        let config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| {
                error::config_parse_failed(path.display().to_string(), e.to_string())
            })?
        };

        let base = crate::paths::parent_dir(path);
        Ok(config.relative_to(&base))
    }

    /// Overlay `other` on top of `self`
    ///
    /// A non-empty `paths` list replaces the current one; set options win.
    pub fn merge(self, other: ProviderConfig) -> ProviderConfig {
        ProviderConfig {
            paths: if other.paths.is_empty() {
                self.paths
            } else {
                other.paths
            },
            output: other.output.or(self.output),
            format: other.format.or(self.format),
            policy: other.policy.or(self.policy),
        }
    }

    /// Effective output format
    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    /// Effective load policy
    pub fn policy(&self) -> LoadPolicy {
        self.policy.unwrap_or_default()
    }

    fn relative_to(mut self, base: &Path) -> Self {
        self.paths = self.paths.into_iter().map(|p| base.join(p)).collect();
        self.output = self.output.map(|p| base.join(p));
        self
    }
}
