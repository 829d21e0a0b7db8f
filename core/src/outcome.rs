use crate::error::{ContainerError, Describable};
use crate::maybe::Maybe;

/// Success with a value of type `T`, or failure with an error of kind `E`.
///
/// Success and failure are read from the variant alone; there is no separate flag that could disagree with the
/// payload. The error kind is expected to be [`Describable`], which the factories and error-transforming combinators
/// require.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
  Ok(T),
  Err(E),
}


// Construction

impl<T, E: Describable> Outcome<T, E> {
  #[inline]
  pub const fn ok(data: T) -> Self { Self::Ok(data) }
  #[inline]
  pub const fn err(error: E) -> Self { Self::Err(error) }

  /// Describable message of the error, if this is a failure.
  #[must_use]
  pub fn error_message(&self) -> Maybe<String> {
    match self {
      Self::Ok(_) => Maybe::None,
      Self::Err(error) => Maybe::Some(error.message().into_owned()),
    }
  }

  #[must_use]
  #[inline]
  pub fn map_err<F: Describable>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
    match self {
      Self::Ok(data) => Outcome::Ok(data),
      Self::Err(error) => Outcome::Err(f(error)),
    }
  }

  /// Returns `self` if `Ok`, otherwise calls `f` with the error. `f` is never called when `self` is `Ok`.
  #[must_use]
  #[inline]
  pub fn or_else<F: Describable>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
    match self {
      Self::Ok(data) => Outcome::Ok(data),
      Self::Err(error) => f(error),
    }
  }
}


// Queries and extraction

impl<T, E> Outcome<T, E> {
  #[inline]
  pub const fn is_success(&self) -> bool { matches!(self, Self::Ok(_)) }
  #[inline]
  pub const fn is_failure(&self) -> bool { matches!(self, Self::Err(_)) }

  #[inline]
  pub fn is_success_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
    match self {
      Self::Ok(data) => predicate(data),
      Self::Err(_) => false,
    }
  }
  #[inline]
  pub fn is_failure_and(self, predicate: impl FnOnce(E) -> bool) -> bool {
    match self {
      Self::Ok(_) => false,
      Self::Err(error) => predicate(error),
    }
  }

  /// Returns the success value.
  ///
  /// # Panics
  ///
  /// Panics with [`ContainerError::IllegalState`] when `self` is `Err`.
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self {
      Self::Ok(data) => data,
      Self::Err(_) => ContainerError::illegal_state("Outcome::unwrap", "Err").raise(),
    }
  }
  /// Returns the error.
  ///
  /// # Panics
  ///
  /// Panics with [`ContainerError::IllegalState`] when `self` is `Ok`. Only the variant is consulted.
  #[track_caller]
  pub fn unwrap_err(self) -> E {
    match self {
      Self::Ok(_) => ContainerError::illegal_state("Outcome::unwrap_err", "Ok").raise(),
      Self::Err(error) => error,
    }
  }
  #[track_caller]
  pub fn expect(self, message: &str) -> T {
    match self {
      Self::Ok(data) => data,
      Self::Err(_) => ContainerError::illegal_state("Outcome::expect", "Err").raise_with(message),
    }
  }
  #[track_caller]
  pub fn expect_err(self, message: &str) -> E {
    match self {
      Self::Ok(_) => ContainerError::illegal_state("Outcome::expect_err", "Ok").raise_with(message),
      Self::Err(error) => error,
    }
  }
  pub fn try_unwrap(self) -> Result<T, ContainerError> {
    match self {
      Self::Ok(data) => Ok(data),
      Self::Err(_) => Err(ContainerError::illegal_state("Outcome::try_unwrap", "Err").returned()),
    }
  }
  pub fn try_unwrap_err(self) -> Result<E, ContainerError> {
    match self {
      Self::Ok(_) => Err(ContainerError::illegal_state("Outcome::try_unwrap_err", "Ok").returned()),
      Self::Err(error) => Ok(error),
    }
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Self::Ok(data) => data,
      Self::Err(_) => default,
    }
  }
  #[inline]
  pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
    match self {
      Self::Ok(data) => data,
      Self::Err(error) => f(error),
    }
  }
  #[inline]
  pub fn unwrap_or_default(self) -> T where T: Default {
    match self {
      Self::Ok(data) => data,
      Self::Err(_) => T::default(),
    }
  }

  /// Exhaustive case analysis: `on_ok(data)` if `Ok`, `on_err(error)` otherwise.
  #[inline]
  pub fn match_with<R>(self, on_ok: impl FnOnce(T) -> R, on_err: impl FnOnce(E) -> R) -> R {
    match self {
      Self::Ok(data) => on_ok(data),
      Self::Err(error) => on_err(error),
    }
  }
}


// Combinators

impl<T, E> Outcome<T, E> {
  #[must_use]
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
    match self {
      Self::Ok(data) => Outcome::Ok(f(data)),
      Self::Err(error) => Outcome::Err(error),
    }
  }
  #[must_use]
  #[inline]
  pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Self::Ok(data) => f(data),
      Self::Err(_) => default,
    }
  }

  #[must_use]
  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
    match self {
      Self::Ok(data) => f(data),
      Self::Err(error) => Outcome::Err(error),
    }
  }
  #[must_use]
  #[inline]
  pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
    match self {
      Self::Ok(_) => other,
      Self::Err(error) => Outcome::Err(error),
    }
  }
  #[must_use]
  #[inline]
  pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
    match self {
      Self::Ok(data) => Outcome::Ok(data),
      Self::Err(_) => other,
    }
  }

  #[inline]
  pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
    if let Self::Ok(data) = &self {
      f(data);
    }
    self
  }
  #[inline]
  pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
    if let Self::Err(error) = &self {
      f(error);
    }
    self
  }

  /// `Some(data)` if `Ok`, `None` otherwise; the error is dropped.
  #[must_use]
  #[inline]
  pub fn to_option(self) -> Maybe<T> {
    match self {
      Self::Ok(data) => Maybe::Some(data),
      Self::Err(_) => Maybe::None,
    }
  }
  /// `Some(error)` if `Err`, `None` otherwise; the success value is dropped.
  #[must_use]
  #[inline]
  pub fn error(self) -> Maybe<E> {
    match self {
      Self::Ok(_) => Maybe::None,
      Self::Err(error) => Maybe::Some(error),
    }
  }

  #[must_use]
  #[inline]
  pub fn into_result(self) -> Result<T, E> {
    self.into()
  }
}


// Borrowing

impl<T, E> Outcome<T, E> {
  #[must_use]
  #[inline]
  pub const fn as_ref(&self) -> Outcome<&T, &E> {
    match self {
      Self::Ok(data) => Outcome::Ok(data),
      Self::Err(error) => Outcome::Err(error),
    }
  }
  #[must_use]
  #[inline]
  pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
    match self {
      Self::Ok(data) => Outcome::Ok(data),
      Self::Err(error) => Outcome::Err(error),
    }
  }

  #[inline]
  pub fn iter(&self) -> std::option::IntoIter<&T> {
    self.as_ref().to_option().into_iter()
  }
}

impl<T, E> IntoIterator for Outcome<T, E> {
  type Item = T;
  type IntoIter = std::option::IntoIter<T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.to_option().into_iter() }
}


// Nested containers

impl<T, E> Outcome<Outcome<T, E>, E> {
  #[must_use]
  #[inline]
  pub fn flatten(self) -> Outcome<T, E> {
    self.and_then(|inner| inner)
  }
}

impl<T, E> Outcome<Maybe<T>, E> {
  /// `Ok(Some(v))` becomes `Some(Ok(v))`, `Ok(None)` becomes `None`, `Err(e)` becomes `Some(Err(e))`.
  #[must_use]
  pub fn transpose(self) -> Maybe<Outcome<T, E>> {
    match self {
      Self::Ok(Maybe::Some(data)) => Maybe::Some(Outcome::Ok(data)),
      Self::Ok(Maybe::None) => Maybe::None,
      Self::Err(error) => Maybe::Some(Outcome::Err(error)),
    }
  }
}
