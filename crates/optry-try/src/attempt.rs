use std::any::Any;
use std::fmt;

use optry_core::{
    Classify, Failure, NonFatal, Throws, TryConsumer, TryPredicate, TrySupplier, TryTransformer,
    Unrecoverable,
};
use optry_option::Optional;

use crate::guard;
use crate::supervise::{capture, evaluate, evaluate_nested};

/// A value or a captured failure.
///
/// A `Try` is built eagerly at a boundary and then chained. Every combinator
/// that runs a callback supervises it: recoverable failures become a failed
/// `Try`, while fatal ones come back as `Err(Unrecoverable)` so the caller
/// forwards them with `?` and the rest of the chain never runs.
///
/// ```rust
/// use optry_core::Failure;
/// use optry_try::Try;
///
/// # fn main() -> Result<(), optry_core::Unrecoverable> {
/// let t = Try::of(|| Err::<String, _>(Failure::io("")))?
///     .recover(|e| Ok(e.to_string()))?;
/// assert_eq!(t.get(), Ok("Io".to_string()));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Try<T> {
    state: State<T>,
}

#[derive(Clone, Debug)]
enum State<T> {
    Ok(T),
    Err(Failure),
}

impl<T> Try<T> {
    // ---------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------

    pub(crate) fn success(value: T) -> Self {
        Self {
            state: State::Ok(value),
        }
    }

    /// A failed `Try` holding `failure`.
    pub fn err(failure: Failure) -> Self {
        Self {
            state: State::Err(failure),
        }
    }

    /// A successful `Try` holding `value`.
    ///
    /// An error-shaped value (a [`Failure`], an [`Unrecoverable`], an
    /// `OptionalError`, a std error such as `std::io::Error`, or a boxed
    /// `dyn Error`) is never wrapped as success: it is escalated as
    /// `Unrecoverable` without consulting the classifier.
    pub fn ok(value: T) -> Result<Self, Unrecoverable>
    where
        T: Any,
    {
        guard::admit(value)
    }

    /// Evaluate `producer` now under the standard classifier.
    pub fn of(producer: impl TrySupplier<T>) -> Result<Self, Unrecoverable>
    where
        T: Any,
    {
        Self::of_with(&NonFatal, producer)
    }

    /// Evaluate `producer` now under `classifier`.
    ///
    /// The classifier governs this one evaluation only. Combinators called
    /// on the resulting `Try` supervise their callbacks with the standard
    /// [`NonFatal`] policy, so a kind that only `classifier` treats as fatal
    /// is captured when a later link raises it.
    pub fn of_with(
        classifier: &impl Classify,
        producer: impl TrySupplier<T>,
    ) -> Result<Self, Unrecoverable>
    where
        T: Any,
    {
        evaluate(classifier, producer())
    }

    // ---------------------------------------------------------------
    // Inspection
    // ---------------------------------------------------------------

    pub fn is_success(&self) -> bool {
        matches!(self.state, State::Ok(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The value, or the captured failure raised again.
    pub fn get(self) -> Throws<T> {
        match self.state {
            State::Ok(v) => Ok(v),
            State::Err(e) => Err(e),
        }
    }

    /// The captured failure, if any.
    pub fn failure(&self) -> Option<&Failure> {
        match &self.state {
            State::Ok(_) => None,
            State::Err(e) => Some(e),
        }
    }

    pub fn as_ref(&self) -> Try<&T> {
        match &self.state {
            State::Ok(v) => Try::success(v),
            State::Err(e) => Try::err(e.clone()),
        }
    }

    /// The captured failure as a success; a success turns into an
    /// `UnsupportedOperation` failure. This is the only success built
    /// without the Ok-construction guard.
    pub fn failed(self) -> Try<Failure> {
        match self.state {
            State::Ok(_) => Try::err(Failure::unsupported("Success.failed")),
            State::Err(e) => Try::success(e),
        }
    }

    // ---------------------------------------------------------------
    // Combinators
    // ---------------------------------------------------------------

    /// Apply `f` to the value, supervised like [`Try::of`].
    pub fn map<U: Any>(self, f: impl TryTransformer<T, U>) -> Result<Try<U>, Unrecoverable> {
        match self.state {
            State::Ok(v) => evaluate(&NonFatal, f(v)),
            State::Err(e) => Ok(Try::err(e)),
        }
    }

    /// Apply `f`, which returns a `Try` itself; the returned `Try` is not
    /// re-wrapped.
    pub fn flat_map<U>(self, f: impl TryTransformer<T, Try<U>>) -> Result<Try<U>, Unrecoverable> {
        match self.state {
            State::Ok(v) => evaluate_nested(&NonFatal, f(v)),
            State::Err(e) => Ok(Try::err(e)),
        }
    }

    /// Keep a success iff `p` holds; otherwise fail with `NoSuchElement`.
    pub fn filter(self, p: impl TryPredicate<T>) -> Result<Self, Unrecoverable>
    where
        T: fmt::Debug,
    {
        let v = match self.state {
            State::Ok(v) => v,
            State::Err(_) => return Ok(self),
        };
        match p(&v) {
            Ok(true) => Ok(Self::success(v)),
            Ok(false) => Ok(Self::err(Failure::no_such_element(format!(
                "Predicate does not hold for {v:?}"
            )))),
            Err(failure) => capture(&NonFatal, failure).map(Self::err),
        }
    }

    /// Turn a failure into a value with `f`, supervised like [`Try::of`].
    /// A success is returned unchanged and `f` is not called.
    pub fn recover(self, f: impl TryTransformer<Failure, T>) -> Result<Self, Unrecoverable>
    where
        T: Any,
    {
        match self.state {
            State::Ok(_) => Ok(self),
            State::Err(e) => evaluate(&NonFatal, f(e)),
        }
    }

    /// Like [`Try::recover`] with a callback that returns a `Try` directly.
    pub fn recover_with(
        self,
        f: impl TryTransformer<Failure, Try<T>>,
    ) -> Result<Self, Unrecoverable> {
        match self.state {
            State::Ok(_) => Ok(self),
            State::Err(e) => evaluate_nested(&NonFatal, f(e)),
        }
    }

    /// Run `f` on a success. A failure raised by `f` is returned as is.
    pub fn foreach(self, f: impl TryConsumer<T>) -> Throws<()> {
        match self.state {
            State::Ok(v) => f(v),
            State::Err(_) => Ok(()),
        }
    }

    // ---------------------------------------------------------------
    // Fallbacks
    // ---------------------------------------------------------------

    /// The value, or the result of `default`. A failure raised by `default`
    /// is returned as is.
    pub fn get_or_else(self, default: impl TrySupplier<T>) -> Throws<T> {
        match self.state {
            State::Ok(v) => Ok(v),
            State::Err(_) => default(),
        }
    }

    /// This `Try` if it succeeded, otherwise the `Try` produced by
    /// `default`, whose own failures are classified.
    pub fn or_else(self, default: impl TrySupplier<Try<T>>) -> Result<Self, Unrecoverable> {
        match self.state {
            State::Ok(_) => Ok(self),
            State::Err(_) => evaluate_nested(&NonFatal, default()),
        }
    }

    /// `Ok(v)` becomes `Present(v)`; a failure becomes `Empty` and its
    /// detail is dropped.
    pub fn to_optional(self) -> Optional<T> {
        match self.state {
            State::Ok(v) => Optional::Present(v),
            State::Err(_) => Optional::Empty,
        }
    }

    /// Dispatch to exactly one side: `on_success` as in [`Try::flat_map`],
    /// or `on_failure` with the captured failure. Both are supervised.
    pub fn transform<U>(
        self,
        on_success: impl TryTransformer<T, Try<U>>,
        on_failure: impl TryTransformer<Failure, Try<U>>,
    ) -> Result<Try<U>, Unrecoverable> {
        match self.state {
            State::Ok(v) => evaluate_nested(&NonFatal, on_success(v)),
            State::Err(e) => evaluate_nested(&NonFatal, on_failure(e)),
        }
    }
}

impl<T> From<Try<T>> for Optional<T> {
    fn from(tried: Try<T>) -> Self {
        tried.to_optional()
    }
}

/// Successes compare by value; failures compare by kind only.
impl<T: PartialEq> PartialEq for Try<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.state, &other.state) {
            (State::Ok(a), State::Ok(b)) => a == b,
            (State::Err(a), State::Err(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Try<T> {}

impl<T: fmt::Display> fmt::Display for Try<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Ok(v) => write!(f, "Ok{{{v}}}"),
            State::Err(e) => write!(f, "Err{{{e}}}"),
        }
    }
}
