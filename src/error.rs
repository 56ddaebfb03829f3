//! Error types for the update checker.
//!
//! This module defines [`FreshError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `FreshError` for cache-file failures that must reach the caller
//! - Skip conditions (CI, opt-out, unresolved DENO_DIR) are not errors
//! - Network failures are recovered close to where they happen and never
//!   surface through this type

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for update-check operations.
#[derive(Debug, Error)]
pub enum FreshError {
    /// Failed to read the check record file for a reason other than absence.
    #[error("Failed to read update cache at {path}: {source}")]
    CacheRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The check record file exists but does not contain a valid record.
    #[error("Failed to parse update cache at {path}: {message}")]
    CacheParse { path: PathBuf, message: String },

    /// Failed to persist the check record.
    #[error("Failed to write update cache at {path}: {source}")]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for update-check operations.
pub type Result<T> = std::result::Result<T, FreshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_read_displays_path() {
        let err = FreshError::CacheRead {
            path: PathBuf::from("/deno/fresh-latest.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/deno/fresh-latest.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn cache_parse_displays_path_and_message() {
        let err = FreshError::CacheParse {
            path: PathBuf::from("/deno/fresh-latest.txt"),
            message: "expected value at line 1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/deno/fresh-latest.txt"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn cache_write_displays_source() {
        let err = FreshError::CacheWrite {
            path: PathBuf::from("/deno/fresh-latest.txt"),
            source: std::io::Error::other("disk full"),
        };
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: FreshError = io_err.into();
        assert!(matches!(err, FreshError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(FreshError::CacheParse {
                path: PathBuf::from("/tmp/x"),
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
