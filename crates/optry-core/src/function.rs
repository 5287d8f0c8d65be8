//! Single-method capabilities accepted by the combinators.
//!
//! Each trait is implemented for every closure of the matching shape, so
//! callers pass closures directly. The `Try*` family returns [`Throws`]: a
//! callback that "throws" returns `Err(failure)` and lets the combinator
//! decide whether the failure is captured.

use crate::failure::Failure;

/// The result of a callback that may raise a classifiable condition.
pub type Throws<T> = Result<T, Failure>;

/// Produces a value.
pub trait Supplier<T>: FnOnce() -> T {}

impl<T, F: FnOnce() -> T> Supplier<T> for F {}

/// Turns a `T` into an `R`.
pub trait Transformer<T, R>: FnOnce(T) -> R {}

impl<T, R, F: FnOnce(T) -> R> Transformer<T, R> for F {}

/// Tests a borrowed value.
pub trait Predicate<T: ?Sized>: FnOnce(&T) -> bool {}

impl<T: ?Sized, F: FnOnce(&T) -> bool> Predicate<T> for F {}

/// Consumes a value for its side effects.
pub trait Consumer<T>: FnOnce(T) {}

impl<T, F: FnOnce(T)> Consumer<T> for F {}

/// A [`Supplier`] that may fail.
pub trait TrySupplier<T>: FnOnce() -> Throws<T> {}

impl<T, F: FnOnce() -> Throws<T>> TrySupplier<T> for F {}

/// A [`Transformer`] that may fail.
pub trait TryTransformer<T, R>: FnOnce(T) -> Throws<R> {}

impl<T, R, F: FnOnce(T) -> Throws<R>> TryTransformer<T, R> for F {}

/// A [`Predicate`] that may fail.
pub trait TryPredicate<T: ?Sized>: FnOnce(&T) -> Throws<bool> {}

impl<T: ?Sized, F: FnOnce(&T) -> Throws<bool>> TryPredicate<T> for F {}

/// A [`Consumer`] that may fail.
pub trait TryConsumer<T>: FnOnce(T) -> Throws<()> {}

impl<T, F: FnOnce(T) -> Throws<()>> TryConsumer<T> for F {}

/// A transformer that ignores its input and always yields `value`.
pub fn constant<T: Clone, V>(value: T) -> impl Fn(V) -> T {
    move |_: V| value.clone()
}

/// Lift a transformer that cannot fail into the throwing family.
pub fn lift<T, R>(f: impl Transformer<T, R>) -> impl TryTransformer<T, R> {
    move |input: T| -> Throws<R> { Ok(f(input)) }
}
