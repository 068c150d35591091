//! Error types for version store operations.
//!
//! This module defines [`StateError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Validation errors (`InvalidInput`, `NotFound`, `Conflict`) are raised
//!   before anything is written to the store
//! - Writes that fail partway are not rolled back
//! - Use `anyhow::Error` (via `StateError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for version store operations.
#[derive(Debug, Error)]
pub enum StateError {
    /// A project, version or file the operation needs does not exist.
    #[error("{entity} not found: {name}")]
    NotFound { entity: &'static str, name: String },

    /// Project already exists.
    #[error("Project already exists: {name}")]
    Conflict { name: String },

    /// Input rejected before touching the store.
    #[error("{message}")]
    InvalidInput { message: String },

    /// External extractor failed.
    #[error("Extraction failed for {path}: {message}")]
    ExternalToolFailure { path: PathBuf, message: String },

    /// State or config file could not be parsed or serialized.
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StateError {
    pub(crate) fn not_found(entity: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            name: name.into(),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

/// Result type alias for version store operations.
pub type Result<T> = std::result::Result<T, StateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_entity_and_name() {
        let err = StateError::not_found("Version", "v7");
        assert_eq!(err.to_string(), "Version not found: v7");
    }

    #[test]
    fn conflict_displays_project() {
        let err = StateError::Conflict {
            name: "demo".into(),
        };
        assert!(err.to_string().contains("demo"));
    }

    #[test]
    fn invalid_input_displays_message_verbatim() {
        let err = StateError::invalid("No active version to derive from");
        assert_eq!(err.to_string(), "No active version to derive from");
    }

    #[test]
    fn external_tool_failure_displays_path_and_message() {
        let err = StateError::ExternalToolFailure {
            path: PathBuf::from("/tmp/resume.pdf"),
            message: "exit status 2".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/resume.pdf"));
        assert!(msg.contains("exit status 2"));
    }

    #[test]
    fn parse_error_displays_path_and_message() {
        let err = StateError::Parse {
            path: PathBuf::from("/store/config.json"),
            message: "expected value".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/store/config.json"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: StateError = io_err.into();
        assert!(matches!(err, StateError::Io(_)));
    }
}
