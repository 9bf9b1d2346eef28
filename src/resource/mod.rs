//! Resource models produced by decoding files
//!
//! A **resource object** is one YAML document (a mapping such as a Gateway or
//! an HTTPRoute). A **resource bundle** is everything decoded from exactly one
//! file; bundles from different files are never merged.

pub mod decoder;

pub use decoder::{ContentDecoder, DecodeError, YamlDecoder};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_yaml::{Mapping, Value};

/// A single declarative object decoded from a file
///
/// No schema is enforced: the well-known fields are exposed through
/// accessors and everything else stays in the raw mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResourceObject {
    fields: Mapping,
}

impl ResourceObject {
    /// Wrap a decoded mapping
    pub fn new(fields: Mapping) -> Self {
        Self { fields }
    }

    /// `apiVersion` of the object, if present
    pub fn api_version(&self) -> Option<&str> {
        self.fields.get("apiVersion").and_then(Value::as_str)
    }

    /// `kind` of the object, if present
    pub fn kind(&self) -> Option<&str> {
        self.fields.get("kind").and_then(Value::as_str)
    }

    /// `metadata.name` of the object, if present
    pub fn name(&self) -> Option<&str> {
        self.metadata_field("name")
    }

    /// `metadata.namespace` of the object, if present
    pub fn namespace(&self) -> Option<&str> {
        self.metadata_field("namespace")
    }

    /// The raw mapping
    pub fn fields(&self) -> &Mapping {
        &self.fields
    }

    fn metadata_field(&self, key: &str) -> Option<&str> {
        self.fields
            .get("metadata")
            .and_then(Value::as_mapping)
            .and_then(|m| m.get(key))
            .and_then(Value::as_str)
    }
}

/// All objects decoded from one file
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceBundle {
    /// File the objects were decoded from
    pub source: PathBuf,

    /// Objects in document order
    pub objects: Vec<ResourceObject>,
}

impl ResourceBundle {
    /// Create a new bundle
    pub fn new(source: impl Into<PathBuf>, objects: Vec<ResourceObject>) -> Self {
        Self {
            source: source.into(),
            objects,
        }
    }

    /// File the bundle was decoded from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Whether the file held no objects at all
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of objects per kind
    ///
    /// Objects without a `kind` are counted under `"<unknown>"`.
    pub fn kinds(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for object in &self.objects {
            let kind = object.kind().unwrap_or("<unknown>").to_string();
            *counts.entry(kind).or_insert(0) += 1;
        }
        counts
    }
}
