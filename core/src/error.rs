use std::borrow::Cow;
use std::error::Error as StdError;

/// Contract violations detected by the containers.
///
/// Both kinds signal a programmer error at the call site: the caller passed an absent value where a present one was
/// required, or extracted from the variant it did not check for.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum ContainerError {
  #[error("{operation}: invalid argument; {reason}")]
  InvalidArgument { operation: &'static str, reason: &'static str },
  #[error("{operation}: illegal state; called on a `{found}` value")]
  IllegalState { operation: &'static str, found: &'static str },
}

impl ContainerError {
  #[inline]
  pub(crate) fn invalid_argument(operation: &'static str, reason: &'static str) -> Self {
    Self::InvalidArgument { operation, reason }
  }
  #[inline]
  pub(crate) fn illegal_state(operation: &'static str, found: &'static str) -> Self {
    Self::IllegalState { operation, found }
  }

  /// Name of the operation that was misused.
  pub fn operation(&self) -> &'static str {
    match self {
      Self::InvalidArgument { operation, .. } => *operation,
      Self::IllegalState { operation, .. } => *operation,
    }
  }

  #[inline]
  pub fn is_invalid_argument(&self) -> bool { matches!(self, Self::InvalidArgument { .. }) }
  #[inline]
  pub fn is_illegal_state(&self) -> bool { matches!(self, Self::IllegalState { .. }) }

  /// Panics with this error as the message.
  #[cold]
  #[track_caller]
  pub(crate) fn raise(self) -> ! {
    self.report(true);
    panic!("{self}")
  }
  /// Panics with `message` instead of this error's own text.
  #[cold]
  #[track_caller]
  pub(crate) fn raise_with(self, message: &str) -> ! {
    self.report(true);
    panic!("{message}")
  }
  /// Hands this error back to a caller that asked for it as a value.
  #[inline]
  pub(crate) fn returned(self) -> Self {
    self.report(false);
    self
  }

  /// Fatal violations are logged at `ERROR`, errors returned as values at `DEBUG`.
  fn report(&self, fatal: bool) {
    #[cfg(feature = "tracing")]
    match (self, fatal) {
      (Self::InvalidArgument { operation, reason }, true) =>
        tracing::error!(operation, reason, "container constructed with an absent value"),
      (Self::InvalidArgument { operation, reason }, false) =>
        tracing::debug!(operation, reason, "container constructed with an absent value"),
      (Self::IllegalState { operation, found }, true) =>
        tracing::error!(operation, found, "container unwrapped on the wrong variant"),
      (Self::IllegalState { operation, found }, false) =>
        tracing::debug!(operation, found, "container unwrapped on the wrong variant"),
    };
    #[cfg(not(feature = "tracing"))]
    let _ = (self, fatal);
  }
}


/// Capability required of the error kind carried by [`Outcome`](crate::outcome::Outcome): a descriptive message and
/// an optional cause chain.
///
/// Implemented for every [`std::error::Error`], so `thiserror` enums and [`Fault`] qualify out of the box.
pub trait Describable {
  fn message(&self) -> Cow<'_, str>;

  /// The direct cause, if any. Named apart from the deprecated `Error::cause` so calls on std errors resolve.
  fn first_cause(&self) -> Option<&(dyn StdError + 'static)>;

  /// Message followed by every cause in the chain, separated by `": "`.
  fn describe(&self) -> String {
    let mut description = self.message().into_owned();
    let mut cause = self.first_cause();
    while let Some(current) = cause {
      description.push_str(": ");
      description.push_str(&current.to_string());
      cause = current.source();
    }
    description
  }
}

impl<E: StdError + ?Sized> Describable for E {
  #[inline]
  fn message(&self) -> Cow<'_, str> { Cow::Owned(self.to_string()) }
  #[inline]
  fn first_cause(&self) -> Option<&(dyn StdError + 'static)> { self.source() }
}


/// General-purpose error value: a message with an optional boxed cause.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct Fault {
  message: Cow<'static, str>,
  #[source]
  source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl Fault {
  pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
    Self { message: message.into(), source: None }
  }

  pub fn with_source(
    message: impl Into<Cow<'static, str>>,
    source: impl Into<Box<dyn StdError + Send + Sync + 'static>>
  ) -> Self {
    Self { message: message.into(), source: Some(source.into()) }
  }
}

impl From<&'static str> for Fault {
  #[inline]
  fn from(message: &'static str) -> Self { Self::new(message) }
}
impl From<String> for Fault {
  #[inline]
  fn from(message: String) -> Self { Self::new(message) }
}

// Causes are trait objects; two faults are equal when their full descriptions are.
impl PartialEq for Fault {
  fn eq(&self, other: &Self) -> bool {
    self.describe() == other.describe()
  }
}
impl Eq for Fault {}


#[cfg(test)]
mod tests {
  use std::io;

  use super::*;

  #[test]
  fn container_error_display() {
    let error = ContainerError::IllegalState { operation: "Maybe::unwrap", found: "None" };
    assert_eq!(error.to_string(), "Maybe::unwrap: illegal state; called on a `None` value");
    assert!(error.is_illegal_state());
    assert_eq!(error.operation(), "Maybe::unwrap");

    let error = ContainerError::InvalidArgument { operation: "Maybe::try_some", reason: "value is absent" };
    assert_eq!(error.to_string(), "Maybe::try_some: invalid argument; value is absent");
    assert!(error.is_invalid_argument());
  }

  #[test]
  fn fault_describes_cause_chain() {
    let inner = io::Error::new(io::ErrorKind::NotFound, "config.toml missing");
    let fault = Fault::with_source("loading settings failed", inner);
    assert_eq!(fault.message(), "loading settings failed");
    assert!(fault.first_cause().is_some());
    assert!(Fault::new("no cause").first_cause().is_none());
    assert_eq!(fault.describe(), "loading settings failed: config.toml missing");
  }

  #[test]
  fn fault_equality_uses_description() {
    assert_eq!(Fault::new("boom"), Fault::from("boom"));
    assert_ne!(Fault::new("boom"), Fault::with_source("boom", Fault::new("cause")));
  }

  #[test]
  fn first_cause_resolves_on_std_errors() {
    let outer = Fault::with_source("outer", Fault::with_source("middle", Fault::new("inner")));
    assert_eq!(outer.first_cause().map(|c| c.to_string()), Some(String::from("middle")));
    assert_eq!(outer.describe(), "outer: middle: inner");
    let io_error = io::Error::new(io::ErrorKind::Other, "disk full");
    assert!(io_error.first_cause().is_none());
    assert_eq!(io_error.describe(), "disk full");
  }
}
