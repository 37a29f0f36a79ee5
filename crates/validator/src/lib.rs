//! # lodgen-validator
//!
//! Signup-form validation for the Lodgen tenancy suite.
//!
//! Two registration profiles are validated: a **client** (name, phone,
//! email, password) and an **occupant** (name, phone, Aadhaar number,
//! email, password). Each profile runs its field rules in a fixed order
//! and stops at the first failure, reporting which field was invalid.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lodgen_validator::prelude::*;
//!
//! profiles::client::validate("John", "1234567890", "john@x.com", "Abcdefg1")?;
//!
//! let occupant = OccupantRegistration {
//!     name: "Jane".into(),
//!     phone: "1234567890".into(),
//!     aadhaar: "123456789012".into(),
//!     email: "jane@x.com".into(),
//!     password: "Abcdefg1".into(),
//! };
//! occupant.validate()?;
//! ```
//!
//! ## Field Rules
//!
//! Every rule is a stateless [`Validate`](foundation::Validate)
//! implementor and can be used on its own or composed with
//! `.and()` / `.or()` / `.not()`:
//!
//! - [`FullName`](validators::FullName) — letters only, whitespace ignored
//! - [`Phone`](validators::Phone) — contains a 10-digit run
//! - [`Aadhaar`](validators::Aadhaar) — contains a 12-digit run
//! - [`Email`](validators::Email) — `local@letters.com`, nothing fancier
//! - [`Password`](validators::Password) — length plus character classes

// ValidationError is the fundamental error type for all validators —
// boxing it would add indirection to every validation call for no
// practical benefit.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod profiles;
pub mod validators;
