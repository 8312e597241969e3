//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, conflicts). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. blank required field).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A requested record was not found.
    #[error("not found")]
    NotFound,

    /// A uniqueness conflict (e.g. duplicate name).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A reference to another record is missing or unusable.
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// The operation would introduce a cycle in the category hierarchy.
    #[error("cyclic reference: {0}")]
    CyclicReference(String),

    /// The operation is blocked by dependent records.
    #[error("precondition failed: {0}")]
    PreconditionFailed(String),

    /// Credential check failed.
    #[error("unauthorized")]
    Unauthorized,

    /// Internal-consistency fault (e.g. dangling parent link mid-walk).
    /// Defensive only; should not occur while the invariants hold.
    #[error("internal inconsistency: {0}")]
    Inconsistency(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn invalid_reference(msg: impl Into<String>) -> Self {
        Self::InvalidReference(msg.into())
    }

    pub fn cyclic_reference(msg: impl Into<String>) -> Self {
        Self::CyclicReference(msg.into())
    }

    pub fn precondition_failed(msg: impl Into<String>) -> Self {
        Self::PreconditionFailed(msg.into())
    }

    pub fn inconsistency(msg: impl Into<String>) -> Self {
        Self::Inconsistency(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
