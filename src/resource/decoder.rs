//! Turning raw file bytes into resource objects

use serde::Deserialize;
use serde_yaml::Value;
use thiserror::Error;

use super::ResourceObject;

/// Why a decoder rejected a file
#[derive(Debug, Error)]
#[error("{0}")]
pub struct DecodeError(pub String);

impl From<serde_yaml::Error> for DecodeError {
    fn from(err: serde_yaml::Error) -> Self {
        DecodeError(err.to_string())
    }
}

/// Converts the bytes of one file into resource objects
///
/// The loader calls this once per file and attaches the source path to the
/// result, so implementations never see paths.
pub trait ContentDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Vec<ResourceObject>, DecodeError>;
}

/// Multi-document YAML decoder
///
/// Documents are separated by `---`. Empty documents are dropped; every other
/// document must be a mapping.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlDecoder;

impl ContentDecoder for YamlDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Vec<ResourceObject>, DecodeError> {
        let mut objects = Vec::new();

        for (index, document) in serde_yaml::Deserializer::from_slice(bytes).enumerate() {
            let value = Value::deserialize(document)?;
            match value {
                Value::Null => {}
                Value::Mapping(fields) => objects.push(ResourceObject::new(fields)),
                other => {
                    return Err(DecodeError(format!(
                        "document {} is not a mapping (found {})",
                        index + 1,
                        value_type(&other)
                    )));
                }
            }
        }

        Ok(objects)
    }
}

fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
