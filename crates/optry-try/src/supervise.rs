//! Classifier-supervised evaluation of callback outcomes.
//!
//! Every Try combinator that runs a callback hands the outcome to one of
//! these functions. The fatal check happens before any wrapping: a failure
//! the classifier rejects leaves as [`Unrecoverable`] and the combinator
//! returns it untouched. A produced value becomes a success only through
//! the Ok-construction guard.

use std::any::Any;

use tracing::{debug, warn};

use optry_core::{Classify, Failure, Throws, Unrecoverable};

use crate::attempt::Try;
use crate::guard;

/// Capture a recoverable failure or let a fatal one escape.
pub(crate) fn capture(classifier: &impl Classify, failure: Failure) -> Result<Failure, Unrecoverable> {
    if classifier.is_fatal(&failure) {
        warn!(kind = %failure.kind(), %failure, "unrecoverable failure escaped try boundary");
        return Err(Unrecoverable::new(failure));
    }
    debug!(kind = %failure.kind(), %failure, "captured recoverable failure");
    Ok(failure)
}

/// Supervise a callback that produces a plain value.
pub(crate) fn evaluate<T: Any>(
    classifier: &impl Classify,
    outcome: Throws<T>,
) -> Result<Try<T>, Unrecoverable> {
    match outcome {
        Ok(value) => guard::admit(value),
        Err(failure) => capture(classifier, failure).map(Try::err),
    }
}

/// Supervise a callback that produces a Try itself; the produced Try is
/// returned as is.
pub(crate) fn evaluate_nested<T>(
    classifier: &impl Classify,
    outcome: Throws<Try<T>>,
) -> Result<Try<T>, Unrecoverable> {
    match outcome {
        Ok(tried) => Ok(tried),
        Err(failure) => capture(classifier, failure).map(Try::err),
    }
}
