use std::ptr::NonNull;

use crate::error::Describable;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// A type with an absence marker (a std `None`, a null pointer, a `Maybe::None`).
///
/// Used by [`Maybe::try_some`] to reject absent values and by [`Maybe::from_nullable`] to lift them.
pub trait Nullable {
  type Value;

  fn is_absent(&self) -> bool;
  /// The present value, or `None` when absent.
  fn into_present(self) -> Option<Self::Value>;
}

impl<T> Nullable for Option<T> {
  type Value = T;
  #[inline]
  fn is_absent(&self) -> bool { self.is_none() }
  #[inline]
  fn into_present(self) -> Option<T> { self }
}
impl<T> Nullable for Maybe<T> {
  type Value = T;
  #[inline]
  fn is_absent(&self) -> bool { self.is_none() }
  #[inline]
  fn into_present(self) -> Option<T> { self.into() }
}
impl<T: ?Sized> Nullable for *mut T {
  type Value = NonNull<T>;
  #[inline]
  fn is_absent(&self) -> bool { self.is_null() }
  #[inline]
  fn into_present(self) -> Option<NonNull<T>> { NonNull::new(self) }
}
impl<T: ?Sized> Nullable for *const T {
  type Value = NonNull<T>;
  #[inline]
  fn is_absent(&self) -> bool { self.is_null() }
  #[inline]
  fn into_present(self) -> Option<NonNull<T>> { NonNull::new(self as *mut T) }
}


// Std interop

impl<T> From<Option<T>> for Maybe<T> {
  #[inline]
  fn from(option: Option<T>) -> Self {
    match option {
      Some(value) => Maybe::Some(value),
      None => Maybe::None,
    }
  }
}
impl<T> From<Maybe<T>> for Option<T> {
  #[inline]
  fn from(maybe: Maybe<T>) -> Self {
    match maybe {
      Maybe::Some(value) => Some(value),
      Maybe::None => None,
    }
  }
}

impl<T, E: Describable> From<Result<T, E>> for Outcome<T, E> {
  #[inline]
  fn from(result: Result<T, E>) -> Self {
    match result {
      Ok(data) => Outcome::Ok(data),
      Err(error) => Outcome::Err(error),
    }
  }
}
impl<T, E> From<Outcome<T, E>> for Result<T, E> {
  #[inline]
  fn from(outcome: Outcome<T, E>) -> Self {
    match outcome {
      Outcome::Ok(data) => Ok(data),
      Outcome::Err(error) => Err(error),
    }
  }
}

impl<T, E> From<Outcome<T, E>> for Maybe<T> {
  #[inline]
  fn from(outcome: Outcome<T, E>) -> Self { outcome.to_option() }
}


/// Converts a std [`Option`] into a [`Maybe`] in method position.
pub trait MaybeExt {
  type Value;

  fn into_maybe(self) -> Maybe<Self::Value>;
}

impl<T> MaybeExt for Option<T> {
  type Value = T;

  #[inline]
  fn into_maybe(self) -> Maybe<T> { self.into() }
}

/// Converts a std [`Result`] into an [`Outcome`] in method position. The error must be [`Describable`]; errors that
/// are not can be converted on the way with [`OutcomeExt::into_outcome_map_err`].
pub trait OutcomeExt {
  type Value;
  type Error;

  fn into_outcome(self) -> Outcome<Self::Value, Self::Error> where Self::Error: Describable;
  fn into_outcome_map_err<F: Describable>(self, f: impl FnOnce(Self::Error) -> F) -> Outcome<Self::Value, F>;
}

impl<T, E> OutcomeExt for Result<T, E> {
  type Value = T;
  type Error = E;

  #[inline]
  fn into_outcome(self) -> Outcome<T, E> where E: Describable { self.into() }
  #[inline]
  fn into_outcome_map_err<F: Describable>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
    self.map_err(f).into()
  }
}
