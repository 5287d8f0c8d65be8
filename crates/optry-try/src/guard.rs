//! The Ok-construction guard.
//!
//! A success must never carry an error. Every success a Try builds passes
//! through [`admit`]: `Try::ok` as well as the values produced by supervised
//! callbacks in `of`, `map` and `recover`. An error-shaped value is escalated
//! as [`Unrecoverable`] without asking the classifier, even when its kind
//! would normally be captured. `Try::failed` is the one constructor that
//! skips the guard, since its success is the captured failure by definition.
//!
//! Detection is a closed list of concrete types checked through [`Any`]:
//! the workspace's own errors (`Failure`, `Unrecoverable`, `OptionalError`,
//! `ConfigError`), the std errors `Failure` converts from, and boxed
//! `dyn Error`. A user-defined error type is not recognised, because telling
//! whether an arbitrary `T` implements `Error` needs specialization.
//!
//! Errors that cannot be cloned (`std::io::Error`, `ConfigError`, boxed
//! errors) are rebuilt from their kind and message, so the escalated
//! failure does not carry their source chain.
//!
//! This unconditional escalation is the documented contract; earlier
//! variants of the library classified such values instead, so the choice is
//! open to revisiting.

use std::any::Any;
use std::error::Error as StdError;

use tracing::warn;

use optry_core::{ConfigError, Failure, FailureKind, Unrecoverable};
use optry_option::OptionalError;

use crate::attempt::Try;

/// Wrap `value` as a success, or escalate it when it is error-shaped.
pub(crate) fn admit<T: Any>(value: T) -> Result<Try<T>, Unrecoverable> {
    if let Some(failure) = error_shaped(&value) {
        warn!(kind = %failure.kind(), "error-shaped value escalated instead of wrapped as success");
        return Err(Unrecoverable::new(failure));
    }
    Ok(Try::success(value))
}

/// The failure an error-shaped value stands for, or `None` for ordinary
/// values.
pub(crate) fn error_shaped<T: Any>(value: &T) -> Option<Failure> {
    let any = value as &dyn Any;
    if let Some(failure) = any.downcast_ref::<Failure>() {
        return Some(failure.clone());
    }
    if let Some(escaped) = any.downcast_ref::<Unrecoverable>() {
        return Some(escaped.failure().clone());
    }
    if let Some(error) = any.downcast_ref::<OptionalError>() {
        return Some(Failure::from(error.clone()));
    }
    if let Some(error) = any.downcast_ref::<ConfigError>() {
        let kind = match error {
            ConfigError::Parse(_) => FailureKind::Parse,
            ConfigError::EmptyKindName | ConfigError::BuiltInKind(_) => {
                FailureKind::InvalidArgument
            }
        };
        return Some(Failure::new(kind, error.to_string()));
    }
    if let Some(io) = any.downcast_ref::<std::io::Error>() {
        return Some(Failure::from(std::io::Error::new(io.kind(), io.to_string())));
    }
    if let Some(error) = any.downcast_ref::<std::num::ParseIntError>() {
        return Some(Failure::from(error.clone()));
    }
    if let Some(error) = any.downcast_ref::<std::num::ParseFloatError>() {
        return Some(Failure::from(error.clone()));
    }
    if let Some(error) = any.downcast_ref::<std::str::Utf8Error>() {
        return Some(Failure::from(*error));
    }
    if let Some(error) = any.downcast_ref::<std::string::FromUtf8Error>() {
        return Some(Failure::from(error.clone()));
    }
    if let Some(error) = any.downcast_ref::<std::collections::TryReserveError>() {
        return Some(Failure::from(error.clone()));
    }
    if let Some(boxed) = any.downcast_ref::<Box<dyn StdError + Send + Sync>>() {
        return Some(Failure::new(FailureKind::Other("Error".into()), boxed.to_string()));
    }
    if let Some(boxed) = any.downcast_ref::<Box<dyn StdError>>() {
        return Some(Failure::new(FailureKind::Other("Error".into()), boxed.to_string()));
    }
    None
}
