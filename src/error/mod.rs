//! Error types and handling for fsprovider
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: File system and path errors
//! - [`config`]: Configuration errors

pub mod config;
pub mod fs;

pub use config::{
    not_found as config_not_found, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};
pub use fs::{
    absolute_failed, io_error, list_failed, not_found as file_not_found, output_dir_not_found,
    parse_failed, read_failed as file_read_failed, write_failed as file_write_failed,
};

use miette::Diagnostic;
use thiserror::Error;

/// Coarse classification of a [`ProviderError`]
///
/// Callers that only care about the class of failure (missing target, I/O
/// trouble, undecodable content) match on this instead of on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Target path does not exist
    NotFound,
    /// Any other stat/read/list/write failure
    Io,
    /// Content decoder rejected the file bytes
    Parse,
    /// Configuration file could not be used
    Config,
}

/// Main error type for fsprovider operations
#[derive(Error, Diagnostic, Debug)]
pub enum ProviderError {
    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(
        code(fsprovider::fs::not_found),
        help("Check that the path exists and is spelled correctly")
    )]
    FileNotFound { path: String },

    #[error("Failed to read file '{path}': {reason}")]
    #[diagnostic(code(fsprovider::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to list directory '{path}': {reason}")]
    #[diagnostic(code(fsprovider::fs::list_failed))]
    ListFailed { path: String, reason: String },

    #[error("Failed to write file '{path}': {reason}")]
    #[diagnostic(code(fsprovider::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to resolve absolute path for '{path}': {reason}")]
    #[diagnostic(code(fsprovider::fs::absolute_failed))]
    AbsolutePathFailed { path: String, reason: String },

    #[error("Output directory does not exist: {path}")]
    #[diagnostic(
        code(fsprovider::fs::output_dir_not_found),
        help("Create the directory first; the output file itself is not required to exist")
    )]
    OutputDirNotFound { path: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(fsprovider::fs::io_error))]
    IoError { message: String },

    // Decoding errors
    #[error("Failed to parse resources in '{path}': {reason}")]
    #[diagnostic(code(fsprovider::decode::parse_failed))]
    ParseFailed { path: String, reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(fsprovider::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file '{path}': {reason}")]
    #[diagnostic(code(fsprovider::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file '{path}': {reason}")]
    #[diagnostic(code(fsprovider::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("No input paths given")]
    #[diagnostic(
        code(fsprovider::config::no_paths),
        help("Pass files or directories on the command line, or set `paths` in fsprovider.yaml")
    )]
    NoInputPaths,

    // Load errors
    #[error("{count} resource file(s) failed to load")]
    #[diagnostic(
        code(fsprovider::load::incomplete),
        help("Fix the files listed above, or run with RUST_LOG=debug for details")
    )]
    LoadIncomplete { count: usize },
}

impl ProviderError {
    /// Class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileNotFound { .. } | Self::OutputDirNotFound { .. } => ErrorKind::NotFound,
            Self::FileReadFailed { .. }
            | Self::ListFailed { .. }
            | Self::FileWriteFailed { .. }
            | Self::AbsolutePathFailed { .. }
            | Self::IoError { .. }
            | Self::LoadIncomplete { .. } => ErrorKind::Io,
            Self::ParseFailed { .. } => ErrorKind::Parse,
            Self::ConfigNotFound { .. }
            | Self::ConfigParseFailed { .. }
            | Self::ConfigReadFailed { .. }
            | Self::NoInputPaths => ErrorKind::Config,
        }
    }
}

impl From<std::io::Error> for ProviderError {
    fn from(err: std::io::Error) -> Self {
        ProviderError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ProviderError {
    fn from(err: serde_yaml::Error) -> Self {
        ProviderError::ParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::ParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_display() {
        let err = ProviderError::FileNotFound {
            path: "/a/x.yaml".to_string(),
        };
        assert_eq!(err.to_string(), "File not found: /a/x.yaml");
    }

    #[test]
    fn test_error_code() {
        let err = ProviderError::ListFailed {
            path: "/a".to_string(),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("fsprovider::fs::list_failed".to_string())
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(file_not_found("/x").kind(), ErrorKind::NotFound);
        assert_eq!(output_dir_not_found("/missing").kind(), ErrorKind::NotFound);
        assert_eq!(file_read_failed("/x", "denied").kind(), ErrorKind::Io);
        assert_eq!(list_failed("/a", "denied").kind(), ErrorKind::Io);
        assert_eq!(absolute_failed("x", "no cwd").kind(), ErrorKind::Io);
        assert_eq!(parse_failed("/x", "bad yaml").kind(), ErrorKind::Parse);
        assert_eq!(config_not_found("/c.yaml").kind(), ErrorKind::Config);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ProviderError = io_err.into();
        assert!(matches!(err, ProviderError::IoError { .. }));
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_yaml_error_conversion() {
        let parse_result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str("invalid: yaml: content: [unclosed");
        let err: ProviderError = parse_result.unwrap_err().into();
        assert!(matches!(err, ProviderError::ParseFailed { .. }));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_result: std::result::Result<serde_json::Value, _> =
            serde_json::from_str("invalid json content");
        let err: ProviderError = parse_result.unwrap_err().into();
        assert!(matches!(err, ProviderError::ParseFailed { .. }));
    }

    test_error_contains!(
        test_read_failed_names_path_and_cause,
        file_read_failed("/a/x.yaml", "permission denied"),
        "/a/x.yaml",
        "permission denied"
    );

    test_error_contains!(
        test_parse_failed_names_path_and_cause,
        parse_failed("/a/x.yaml", "did not find expected key"),
        "Failed to parse resources",
        "/a/x.yaml",
        "did not find expected key"
    );

    test_error_contains!(
        test_load_incomplete_error,
        ProviderError::LoadIncomplete { count: 3 },
        "3 resource file(s) failed to load"
    );

    test_error_contains!(
        test_config_read_failed_error,
        config_read_failed("/c.yaml", "is a directory"),
        "Failed to read configuration file",
        "/c.yaml"
    );

    test_error_contains!(
        test_config_parse_failed_error,
        config_parse_failed("/c.yaml", "unknown field"),
        "Failed to parse configuration file"
    );

    test_error_contains!(
        test_write_failed_error,
        file_write_failed("/out.yaml", "disk full"),
        "Failed to write file",
        "disk full"
    );

    test_error_contains!(test_io_error, io_error("some error"), "IO error");

    test_error_contains!(
        test_no_input_paths_error,
        ProviderError::NoInputPaths,
        "No input paths given"
    );
}
