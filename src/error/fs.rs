//! File system and path errors

use std::path::Path;

use super::ProviderError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> ProviderError {
    ProviderError::FileNotFound { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ProviderError {
    ProviderError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a directory listing error
pub fn list_failed(path: impl Into<String>, reason: impl Into<String>) -> ProviderError {
    ProviderError::ListFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> ProviderError {
    ProviderError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an absolute path resolution error
pub fn absolute_failed(path: impl Into<String>, reason: impl Into<String>) -> ProviderError {
    ProviderError::AbsolutePathFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a missing output directory error
pub fn output_dir_not_found(path: impl Into<String>) -> ProviderError {
    ProviderError::OutputDirNotFound { path: path.into() }
}

/// Creates a content decoding error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ProviderError {
    ProviderError::ParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> ProviderError {
    ProviderError::IoError {
        message: message.into(),
    }
}

/// Maps a failed `stat`/`read` of `path` onto the matching error
///
/// `NotFound` keeps its own variant so callers can tell a missing file from
/// one that exists but cannot be read.
pub fn from_io(path: &Path, err: &std::io::Error) -> ProviderError {
    if err.kind() == std::io::ErrorKind::NotFound {
        not_found(path.display().to_string())
    } else {
        read_failed(path.display().to_string(), err.to_string())
    }
}
