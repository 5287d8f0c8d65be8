use thiserror::Error;

use crate::failure::Failure;

/// A failure that must not be captured and is propagating to the caller.
///
/// Produced when a supervised callback raises a fatal condition, or when an
/// error-shaped value is handed to `Try::ok`. Forward it with `?`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecoverable: {failure}")]
pub struct Unrecoverable {
    failure: Failure,
}

impl Unrecoverable {
    pub fn new(failure: Failure) -> Self {
        Self { failure }
    }

    /// The propagating failure.
    pub fn failure(&self) -> &Failure {
        &self.failure
    }

    pub fn into_failure(self) -> Failure {
        self.failure
    }
}

/// Errors produced while loading a classifier configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid classifier config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("fatal kind name must not be empty")]
    EmptyKindName,

    #[error("'{0}' is a built-in kind and cannot be listed as fatal")]
    BuiltInKind(String),
}
