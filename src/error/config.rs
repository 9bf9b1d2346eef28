//! Configuration errors

use super::ProviderError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> ProviderError {
    ProviderError::ConfigNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ProviderError {
    ProviderError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ProviderError {
    ProviderError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
