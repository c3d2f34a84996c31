//! Application-level errors
//!
//! Empty listings are not errors at this level: `BaselineService` turns
//! `DomainError::EmptyInput` into a warning.

use std::path::PathBuf;
use thiserror::Error;

/// Failures loading a baseline or creating a structure.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("error reading baseline file {}: {source}", .path.display())]
    BaselineRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("baseline must be a valid file or folder path: {}", .0.display())]
    InvalidBaseline(PathBuf),

    #[error("error during structure creation at {}: {source}", .path.display())]
    Materialization {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
