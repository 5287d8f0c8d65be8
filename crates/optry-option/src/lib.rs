//! Optional values for optry.
//!
//! [`Optional`] is either `Empty` or `Present(value)`. It converts freely to
//! and from [`Option`], iterates as a sequence of zero or one element, and
//! offers a monadic combinator set: `map` with
//! null-collapsing re-wrap, `flat_map`, `filter`/`filter_not`, and the
//! `or_else` fallback ladder.
//!
//! # Quick Start
//!
//! ```rust
//! use optry_option::Optional;
//!
//! let n = Optional::present("5")
//!     .map(|s| s.parse::<i32>().ok())
//!     .filter(|n| *n > 4);
//! assert_eq!(n.get(), Ok(&5));
//! ```

pub mod error;
pub mod iter;
pub mod optional;

pub use error::OptionalError;
pub use iter::{IntoIter, Iter};
pub use optional::Optional;
