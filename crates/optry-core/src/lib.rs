//! Foundation types for optry.
//!
//! This crate holds what both wrapper types share: the failure model, the
//! fatal-vs-recoverable classification policy, and the functional interfaces
//! accepted by the combinators. `optry-option` and `optry-try` depend on it.
//!
//! # Key Types
//!
//! - [`Failure`] — A raised condition: kind, message, optional source
//! - [`FailureKind`] — Discriminator, split into recoverable and fatal groups
//! - [`Classify`] — Classification seam; [`NonFatal`] is the standard policy
//! - [`Unrecoverable`] — A failure propagating past a Try boundary
//! - [`ClassifierConfig`] — Serializable policy adjustments
//! - [`Throws`] — What a throwing callback returns

pub mod classify;
pub mod config;
pub mod error;
pub mod failure;
pub mod function;

pub use classify::{is_fatal, is_recoverable, Classify, Configured, NonFatal};
pub use config::ClassifierConfig;
pub use error::{ConfigError, Unrecoverable};
pub use failure::{Failure, FailureKind, Source};
pub use function::{
    constant, lift, Consumer, Predicate, Supplier, Throws, Transformer, TryConsumer,
    TryPredicate, TrySupplier, TryTransformer,
};
