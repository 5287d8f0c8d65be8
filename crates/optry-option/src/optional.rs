use std::fmt;

use serde::{Deserialize, Serialize};

use optry_core::{Consumer, Predicate, Supplier, Transformer};

use crate::error::OptionalError;
use crate::iter::{IntoIter, Iter};

/// A value or nothing.
///
/// `Empty` carries no payload, so every empty optional is the same value and
/// equality is structural: `Empty == Empty`, and `Present(a) == Present(b)`
/// iff `a == b`.
///
/// Combinators never intercept failures. A callback that panics unwinds
/// straight through; use `Try` when callbacks can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Optional<T> {
    /// No value.
    Empty,
    /// A value.
    Present(T),
}

use Optional::{Empty, Present};

impl<T> Optional<T> {
    // ---------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------

    pub const fn empty() -> Self {
        Empty
    }

    pub const fn present(value: T) -> Self {
        Present(value)
    }

    /// `Empty` when `value` is `None`, `Present` otherwise.
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(v) => Present(v),
            None => Empty,
        }
    }

    /// Like [`Optional::present`] for a value that may be absent: `None`
    /// is rejected with [`OptionalError::InvalidArgument`].
    pub fn try_present(value: Option<T>) -> Result<Self, OptionalError> {
        value
            .map(Present)
            .ok_or_else(|| OptionalError::InvalidArgument("present requires a value".into()))
    }

    // ---------------------------------------------------------------
    // Inspection
    // ---------------------------------------------------------------

    pub const fn is_present(&self) -> bool {
        matches!(self, Present(_))
    }

    pub const fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// The value, or [`OptionalError::EmptyValueAccess`].
    pub fn get(&self) -> Result<&T, OptionalError> {
        match self {
            Present(v) => Ok(v),
            Empty => Err(OptionalError::EmptyValueAccess),
        }
    }

    /// Owning form of [`Optional::get`].
    pub fn into_value(self) -> Result<T, OptionalError> {
        match self {
            Present(v) => Ok(v),
            Empty => Err(OptionalError::EmptyValueAccess),
        }
    }

    /// The value as a plain nullable `Option`.
    pub fn or_null(self) -> Option<T> {
        self.into()
    }

    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Present(v) => Present(v),
            Empty => Empty,
        }
    }

    // ---------------------------------------------------------------
    // Combinators
    // ---------------------------------------------------------------

    /// Apply `f` to the value and re-wrap the result through
    /// [`Optional::of_nullable`].
    ///
    /// A transformer returning `None` therefore collapses `Present` into
    /// `Empty`; the result is never an optional of an optional.
    pub fn map<U>(self, f: impl Transformer<T, Option<U>>) -> Optional<U> {
        match self {
            Present(v) => Optional::of_nullable(f(v)),
            Empty => Empty,
        }
    }

    /// Apply `f`, which returns an optional itself, and return that optional
    /// as is. `f` is not called when empty.
    pub fn flat_map<U>(self, f: impl Transformer<T, Optional<U>>) -> Optional<U> {
        match self {
            Present(v) => f(v),
            Empty => Empty,
        }
    }

    /// [`Optional::flat_map`] for a transformer that may return no optional
    /// at all, reported as [`OptionalError::NullResult`].
    pub fn try_flat_map<U>(
        self,
        f: impl Transformer<T, Option<Optional<U>>>,
    ) -> Result<Optional<U>, OptionalError> {
        match self {
            Present(v) => {
                f(v).ok_or_else(|| OptionalError::NullResult("flat_map transformer".into()))
            }
            Empty => Ok(Empty),
        }
    }

    /// Keep the value iff `p` holds.
    pub fn filter(self, p: impl Predicate<T>) -> Self {
        if let Present(v) = self {
            if p(&v) {
                return Present(v);
            }
        }
        Empty
    }

    /// Keep the value iff `p` does not hold. Empty stays empty.
    pub fn filter_not(self, p: impl Predicate<T>) -> Self {
        if let Present(v) = self {
            if !p(&v) {
                return Present(v);
            }
        }
        Empty
    }

    /// Run `f` on the value if present.
    pub fn foreach(self, f: impl Consumer<T>) {
        if let Present(v) = self {
            f(v);
        }
    }

    // ---------------------------------------------------------------
    // Fallbacks
    // ---------------------------------------------------------------

    pub fn or_else(self, other: T) -> T {
        match self {
            Present(v) => v,
            Empty => other,
        }
    }

    /// The value, or the result of `other` (only called when empty).
    pub fn or_else_get(self, other: impl Supplier<T>) -> T {
        match self {
            Present(v) => v,
            Empty => other(),
        }
    }

    /// The value, or the error produced by `error` when empty.
    pub fn or_else_throw<E>(self, error: impl Supplier<E>) -> Result<T, E> {
        match self {
            Present(v) => Ok(v),
            Empty => Err(error()),
        }
    }

    // ---------------------------------------------------------------
    // Projections
    // ---------------------------------------------------------------

    pub fn contains(&self, elem: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(self, Present(v) if v == elem)
    }

    /// `true` iff present and `p` holds. Vacuously `false` when empty.
    pub fn exists(&self, p: impl Predicate<T>) -> bool {
        match self {
            Present(v) => p(v),
            Empty => false,
        }
    }

    /// `true` iff empty or `p` holds. Vacuously `true` when empty.
    pub fn forall(&self, p: impl Predicate<T>) -> bool {
        match self {
            Present(v) => p(v),
            Empty => true,
        }
    }

    /// A list of zero or one element.
    pub fn to_list(self) -> Vec<T> {
        self.into_iter().collect()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().or_null())
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Empty
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Present(v) => Some(v),
            Empty => None,
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.or_null())
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Present(v) => write!(f, "Present{{{v}}}"),
            Empty => f.write_str("Empty"),
        }
    }
}
