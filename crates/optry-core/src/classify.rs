//! Fatal-vs-recoverable classification of raised conditions.
//!
//! A condition is **unrecoverable** iff it represents memory exhaustion,
//! forced termination, cooperative interruption, or a failure to link
//! required code. Stack exhaustion is recoverable: a runaway recursion inside
//! a callback surfaces as an ordinary failure value. A failure that already
//! escaped one Try boundary is unrecoverable everywhere.
//!
//! Classification is pure and stateless; any number of threads may call it.

use std::collections::HashSet;

use crate::config::ClassifierConfig;
use crate::failure::{Failure, FailureKind};

/// Decides whether a raised condition may be captured.
pub trait Classify {
    /// Returns `true` if the failure may be captured into a failure value.
    fn is_recoverable(&self, failure: &Failure) -> bool;

    /// Negation of [`Classify::is_recoverable`].
    fn is_fatal(&self, failure: &Failure) -> bool {
        !self.is_recoverable(failure)
    }
}

/// The standard policy: only the built-in fatal kinds escape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NonFatal;

impl Classify for NonFatal {
    fn is_recoverable(&self, failure: &Failure) -> bool {
        is_recoverable(failure)
    }
}

/// Returns `true` if the standard policy captures `failure`.
pub fn is_recoverable(failure: &Failure) -> bool {
    if failure.has_escaped() {
        return false;
    }
    match failure.kind() {
        FailureKind::StackOverflow => true,
        kind => !kind.is_fatal(),
    }
}

/// Returns `true` if the standard policy lets `failure` escape.
pub fn is_fatal(failure: &Failure) -> bool {
    !is_recoverable(failure)
}

/// A policy built from a [`ClassifierConfig`].
///
/// The built-in fatal kinds and escaped failures are unrecoverable under
/// every configuration; the config can only add fatal kinds or make stack
/// exhaustion fatal.
#[derive(Clone, Debug)]
pub struct Configured {
    stack_overflow_recoverable: bool,
    fatal_kinds: HashSet<String>,
}

impl Configured {
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            stack_overflow_recoverable: config.stack_overflow_recoverable,
            fatal_kinds: config.fatal_kinds.iter().cloned().collect(),
        }
    }
}

impl Default for Configured {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

impl From<ClassifierConfig> for Configured {
    fn from(config: ClassifierConfig) -> Self {
        Self::new(&config)
    }
}

impl Classify for Configured {
    fn is_recoverable(&self, failure: &Failure) -> bool {
        if failure.has_escaped() {
            return false;
        }
        match failure.kind() {
            FailureKind::StackOverflow => self.stack_overflow_recoverable,
            FailureKind::Other(name) => !self.fatal_kinds.contains(name),
            kind => !kind.is_fatal(),
        }
    }
}

impl<C: Classify + ?Sized> Classify for &C {
    fn is_recoverable(&self, failure: &Failure) -> bool {
        (**self).is_recoverable(failure)
    }
}
