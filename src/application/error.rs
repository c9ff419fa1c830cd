// src/application/error.rs
use crate::domain::errors::{ConstraintViolation, DomainError, ValidationError};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// The pre-commit validation failure behind this error, if any.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::Domain(DomainError::Validation(err)) => Some(err),
            _ => None,
        }
    }

    /// The uniqueness violation reported by the store, if any.
    pub fn constraint_violation(&self) -> Option<&ConstraintViolation> {
        match self {
            Self::Domain(DomainError::Constraint(err)) => Some(err),
            _ => None,
        }
    }
}
