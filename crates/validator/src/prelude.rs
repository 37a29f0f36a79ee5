//! Prelude module for convenient imports.
//!
//! Provides a single `use lodgen_validator::prelude::*;` import that
//! brings in all commonly needed traits, types, validators, and
//! combinators.
//!
//! # Examples
//!
//! ```rust,ignore
//! use lodgen_validator::prelude::*;
//!
//! let rule = full_name();
//! assert!(rule.validate("John Smith").is_ok());
//!
//! profiles::client::validate("John", "1234567890", "john@x.com", "Abcdefg1")?;
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationResult};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, Not, Or, and, not, or};

// ============================================================================
// PROFILES: Registration entry points
// ============================================================================

pub use crate::profiles::{
    self, ClientRegistration, OccupantRegistration, Party, ProfileError, ProfileField,
};
