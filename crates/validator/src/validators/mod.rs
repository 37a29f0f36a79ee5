//! Built-in validators
//!
//! The five signup field rules plus the generic string validators they
//! are built from.
//!
//! # Categories
//!
//! - **Signup rules**: [`FullName`], [`Phone`], [`Aadhaar`], [`Email`],
//!   [`Password`]
//! - **String**: [`NotEmpty`], [`MinLength`], [`MaxLength`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use lodgen_validator::prelude::*;
//!
//! let name = full_name();
//! assert!(name.validate("John Smith").is_ok());
//!
//! // Composition
//! let nickname = not_empty().and(max_length(20));
//! ```

pub mod aadhaar;
pub mod email;
pub mod length;
pub mod name;
pub mod password;
pub mod phone;

// ============================================================================
// RE-EXPORTS: Signup rules
// ============================================================================

pub use aadhaar::{Aadhaar, aadhaar};
pub use email::{Email, email};
pub use name::{FullName, full_name};
pub use password::{Password, password};
pub use phone::{Phone, phone};

// ============================================================================
// RE-EXPORTS: String validators
// ============================================================================

pub use length::{MaxLength, MinLength, NotEmpty, max_length, min_length, not_empty};
