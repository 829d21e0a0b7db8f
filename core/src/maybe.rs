use crate::convert::Nullable;
use crate::error::{ContainerError, Describable};
use crate::outcome::Outcome;

/// Presence or absence of a value of type `T`.
///
/// The variant is the only discriminant: a `Maybe::Some` always holds a value, a `Maybe::None` never does. Instances
/// are never mutated by the combinators below; each one consumes the container and derives a new one.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
  None,
  Some(T),
}

impl<T> Default for Maybe<T> {
  #[inline]
  fn default() -> Self { Self::None }
}


// Construction

impl<T> Maybe<T> {
  /// Wraps `value` as-is. `T` is not inspected, so `Maybe::some(None::<i32>)` or a null pointer still yields `Some`;
  /// callers holding a [`Nullable`] value should go through [`Self::try_some`] or [`Self::some_checked`] instead.
  #[inline]
  pub const fn some(value: T) -> Self { Self::Some(value) }
  #[inline]
  pub const fn none() -> Self { Self::None }

  /// Wraps `value` in `Some`, rejecting it with [`ContainerError::InvalidArgument`] when it is absent (a std `None`,
  /// a null pointer, a `Maybe::None`).
  pub fn try_some<N: Nullable<Value=T>>(value: N) -> Result<Self, ContainerError> {
    match value.into_present() {
      Some(value) => Ok(Self::Some(value)),
      None => Err(ContainerError::invalid_argument("Maybe::try_some", "value is absent").returned()),
    }
  }
  /// Like [`Self::try_some`], but panics when `value` is absent.
  #[track_caller]
  pub fn some_checked<N: Nullable<Value=T>>(value: N) -> Self {
    match value.into_present() {
      Some(value) => Self::Some(value),
      None => ContainerError::invalid_argument("Maybe::some_checked", "value is absent").raise(),
    }
  }

  /// Lifts a possibly absent value: `Some` if present, `None` otherwise.
  pub fn from_nullable<N: Nullable<Value=T>>(value: N) -> Self {
    match value.into_present() {
      Some(value) => Self::Some(value),
      None => {
        #[cfg(feature = "tracing")]
        tracing::trace!("lifted an absent value into `Maybe::None`");
        Self::None
      }
    }
  }
}


// Queries and extraction

impl<T> Maybe<T> {
  #[inline]
  pub const fn is_some(&self) -> bool { matches!(self, Self::Some(_)) }
  #[inline]
  pub const fn is_none(&self) -> bool { matches!(self, Self::None) }
  #[inline]
  pub fn is_some_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
    match self {
      Self::Some(value) => predicate(value),
      Self::None => false,
    }
  }

  /// Returns the contained value.
  ///
  /// # Panics
  ///
  /// Panics with [`ContainerError::IllegalState`] when `self` is `None`.
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self {
      Self::Some(value) => value,
      Self::None => ContainerError::illegal_state("Maybe::unwrap", "None").raise(),
    }
  }
  /// Returns the contained value, or panics with `message` when `self` is `None`.
  #[track_caller]
  pub fn expect(self, message: &str) -> T {
    match self {
      Self::Some(value) => value,
      Self::None => ContainerError::illegal_state("Maybe::expect", "None").raise_with(message),
    }
  }
  pub fn try_unwrap(self) -> Result<T, ContainerError> {
    match self {
      Self::Some(value) => Ok(value),
      Self::None => Err(ContainerError::illegal_state("Maybe::try_unwrap", "None").returned()),
    }
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Self::Some(value) => value,
      Self::None => default,
    }
  }
  #[inline]
  pub fn unwrap_or_else(self, default: impl FnOnce() -> T) -> T {
    match self {
      Self::Some(value) => value,
      Self::None => default(),
    }
  }
  #[inline]
  pub fn unwrap_or_default(self) -> T where T: Default {
    match self {
      Self::Some(value) => value,
      Self::None => T::default(),
    }
  }

  /// Exhaustive case analysis: `on_some(value)` if `Some`, `on_none()` otherwise.
  #[inline]
  pub fn match_with<R>(self, on_some: impl FnOnce(T) -> R, on_none: impl FnOnce() -> R) -> R {
    match self {
      Self::Some(value) => on_some(value),
      Self::None => on_none(),
    }
  }
}


// Combinators

impl<T> Maybe<T> {
  #[must_use]
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
    match self {
      Self::Some(value) => Maybe::Some(f(value)),
      Self::None => Maybe::None,
    }
  }
  #[must_use]
  #[inline]
  pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Self::Some(value) => f(value),
      Self::None => default,
    }
  }
  #[must_use]
  #[inline]
  pub fn map_or_else<U>(self, default: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Self::Some(value) => f(value),
      Self::None => default(),
    }
  }

  #[must_use]
  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
    match self {
      Self::Some(value) => f(value),
      Self::None => Maybe::None,
    }
  }
  #[must_use]
  #[inline]
  pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
    match self {
      Self::Some(_) => other,
      Self::None => Maybe::None,
    }
  }

  #[must_use]
  #[inline]
  pub fn or(self, other: Maybe<T>) -> Maybe<T> {
    match self {
      Self::Some(_) => self,
      Self::None => other,
    }
  }
  /// Returns `self` if `Some`, otherwise calls `f`. `f` is never called when `self` is `Some`.
  #[must_use]
  #[inline]
  pub fn or_else(self, f: impl FnOnce() -> Maybe<T>) -> Maybe<T> {
    match self {
      Self::Some(_) => self,
      Self::None => f(),
    }
  }
  /// `Some` if exactly one of `self` and `other` is `Some`.
  #[must_use]
  pub fn xor(self, other: Maybe<T>) -> Maybe<T> {
    match (self, other) {
      (Self::Some(value), Maybe::None) | (Self::None, Maybe::Some(value)) => Maybe::Some(value),
      _ => Maybe::None,
    }
  }

  #[must_use]
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Maybe<T> {
    if let Self::Some(value) = self {
      if predicate(&value) {
        return Self::Some(value);
      }
    }
    Self::None
  }

  #[inline]
  pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
    if let Self::Some(value) = &self {
      f(value);
    }
    self
  }

  #[must_use]
  pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
    match (self, other) {
      (Self::Some(a), Maybe::Some(b)) => Maybe::Some((a, b)),
      _ => Maybe::None,
    }
  }

  /// Moves the value out, leaving `None` in its place.
  #[inline]
  pub fn take(&mut self) -> Maybe<T> {
    std::mem::take(self)
  }
}


// Conversion into `Outcome`

impl<T> Maybe<T> {
  /// `Ok(value)` if `Some`, `Err(error)` otherwise.
  #[must_use]
  #[inline]
  pub fn ok_or<E: Describable>(self, error: E) -> Outcome<T, E> {
    match self {
      Self::Some(value) => Outcome::Ok(value),
      Self::None => Outcome::Err(error),
    }
  }
  /// `Ok(value)` if `Some`, `Err(f())` otherwise. `f` is only called on `None`.
  #[must_use]
  #[inline]
  pub fn ok_or_else<E: Describable>(self, f: impl FnOnce() -> E) -> Outcome<T, E> {
    match self {
      Self::Some(value) => Outcome::Ok(value),
      Self::None => Outcome::Err(f()),
    }
  }
}


// Borrowing

impl<T> Maybe<T> {
  #[must_use]
  #[inline]
  pub const fn as_ref(&self) -> Maybe<&T> {
    match self {
      Self::Some(value) => Maybe::Some(value),
      Self::None => Maybe::None,
    }
  }
  #[must_use]
  #[inline]
  pub fn as_mut(&mut self) -> Maybe<&mut T> {
    match self {
      Self::Some(value) => Maybe::Some(value),
      Self::None => Maybe::None,
    }
  }

  #[inline]
  pub fn iter(&self) -> std::option::IntoIter<&T> {
    self.as_ref().into_iter()
  }
}

impl<T> IntoIterator for Maybe<T> {
  type Item = T;
  type IntoIter = std::option::IntoIter<T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { Option::<T>::from(self).into_iter() }
}
impl<'a, T> IntoIterator for &'a Maybe<T> {
  type Item = &'a T;
  type IntoIter = std::option::IntoIter<&'a T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// Collects into `Some(collection)` when every item is `Some`, or `None` as soon as one is `None`.
impl<A, V: FromIterator<A>> FromIterator<Maybe<A>> for Maybe<V> {
  fn from_iter<I: IntoIterator<Item=Maybe<A>>>(iter: I) -> Self {
    let mut absent = false;
    let collection = iter.into_iter()
      .map_while(|maybe| match maybe {
        Maybe::Some(value) => Some(value),
        Maybe::None => {
          absent = true;
          None
        }
      })
      .collect();
    if absent { Maybe::None } else { Maybe::Some(collection) }
  }
}


// Nested containers

impl<T> Maybe<Maybe<T>> {
  #[must_use]
  #[inline]
  pub fn flatten(self) -> Maybe<T> {
    self.and_then(|inner| inner)
  }
}

impl<T, E> Maybe<Outcome<T, E>> {
  /// `Some(Ok(v))` becomes `Ok(Some(v))`, `Some(Err(e))` becomes `Err(e)`, `None` becomes `Ok(None)`.
  #[must_use]
  pub fn transpose(self) -> Outcome<Maybe<T>, E> {
    match self {
      Self::Some(Outcome::Ok(value)) => Outcome::Ok(Maybe::Some(value)),
      Self::Some(Outcome::Err(error)) => Outcome::Err(error),
      Self::None => Outcome::Ok(Maybe::None),
    }
  }
}
