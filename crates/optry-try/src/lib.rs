//! Try values for optry: a value or a captured failure.
//!
//! [`Try`] is built eagerly with [`Try::of`], [`Try::ok`] or [`Try::err`]
//! and chained through supervised combinators. Callbacks return
//! [`optry_core::Throws`]; the classifier decides for each raised failure
//! whether it is captured into a failed `Try` or escapes as
//! [`optry_core::Unrecoverable`].
//!
//! # Quick Start
//!
//! ```rust
//! use optry_core::{Failure, Unrecoverable};
//! use optry_try::Try;
//!
//! fn parse(input: &str) -> Result<Try<i32>, Unrecoverable> {
//!     Try::of(|| Ok(input.parse::<i32>()?))?.filter(|n| Ok(*n > 0))
//! }
//!
//! assert_eq!(parse("7").unwrap().get(), Ok(7));
//! assert!(parse("-1").unwrap().is_failure());
//! assert!(parse("x").unwrap().is_failure());
//!
//! let err = Try::<i32>::of(|| Err(Failure::interrupted("cancelled"))).unwrap_err();
//! assert!(err.failure().kind().is_fatal());
//! ```

pub mod attempt;
mod guard;
mod supervise;

pub use attempt::Try;
