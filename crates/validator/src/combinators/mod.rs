//! Validator combinators
//!
//! Combinators wrap other validators to build composite rules:
//!
//! - [`And`] — logical conjunction, short-circuits on first failure
//! - [`Or`] — logical disjunction, short-circuits on first success
//! - [`Not`] — logical negation
//!
//! Most code reaches these through the fluent
//! [`ValidateExt`](crate::foundation::ValidateExt) methods rather than
//! constructing them directly.

pub mod and;
pub mod not;
pub mod or;

pub use and::{And, and};
pub use not::{Not, not};
pub use or::{Or, or};
