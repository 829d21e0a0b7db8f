//! Two closed, tagged containers: [`Maybe`] for presence or absence of a value, and [`Outcome`] for success or
//! failure. Both are plain immutable values; every combinator consumes its input and derives a new container.

pub mod error;
pub mod maybe;
pub mod outcome;
pub mod convert;

pub use convert::{MaybeExt, Nullable, OutcomeExt};
pub use error::{ContainerError, Describable, Fault};
pub use maybe::Maybe;
pub use outcome::Outcome;
