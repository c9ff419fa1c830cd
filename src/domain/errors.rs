// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Rejections raised before anything reaches the persistence engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("a publish timestamp is required when state is set to PUBLISH")]
    MissingPublishTimestamp,
    #[error("{0}")]
    Invalid(String),
}

/// Uniqueness rejections raised by the persistence engine at commit time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    #[error("slug already exists")]
    DuplicateSlug,
    #[error("video_id already exists")]
    DuplicateExternalId,
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("constraint violation: {0}")]
    Constraint(#[from] ConstraintViolation),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Validation(ValidationError::Invalid(msg.into()))
    }
}
