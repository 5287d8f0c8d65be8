use thiserror::Error;

use optry_core::{Failure, FailureKind};

/// Errors produced by [`crate::Optional`] accessors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OptionalError {
    #[error("called get on Empty")]
    EmptyValueAccess,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("transformer produced no optional: {0}")]
    NullResult(String),
}

/// Lets accessor errors flow into a Try callback with `?`.
impl From<OptionalError> for Failure {
    fn from(error: OptionalError) -> Self {
        let kind = match &error {
            OptionalError::EmptyValueAccess => FailureKind::EmptyValueAccess,
            OptionalError::InvalidArgument(_) => FailureKind::InvalidArgument,
            OptionalError::NullResult(_) => FailureKind::NullResult,
        };
        Failure::from_error(kind, error)
    }
}
