//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations found while building a structure.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("tree listing has no content")]
    EmptyInput,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
