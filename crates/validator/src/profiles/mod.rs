//! Registration profiles
//!
//! A profile is an ordered, fail-fast sequence of field rules for one
//! kind of signup record. Two profiles exist:
//!
//! - [`client`] — name, phone, email, password
//! - [`occupant`] — name, phone, Aadhaar, email, password
//!
//! Each profile checks its fields in a fixed order and stops at the
//! first rule that fails, returning a [`ProfileError`] that names the
//! offending field and the party it belongs to. A profile never reports
//! more than one failure per call; re-validate after correcting the
//! input to surface the next problem.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::foundation::{Validate, ValidationError};

pub mod client;
pub mod occupant;

pub use client::ClientRegistration;
pub use occupant::OccupantRegistration;

// ============================================================================
// PARTY
// ============================================================================

/// The kind of record a profile error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Party {
    /// A prospective client booking accommodation.
    Client,
    /// An occupant registering with an Aadhaar number.
    Occupant,
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Party::Client => "Client",
            Party::Occupant => "Occupant",
        })
    }
}

// ============================================================================
// PROFILE FIELD
// ============================================================================

/// The form field a profile error points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Phone,
    Aadhaar,
    Email,
    Password,
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProfileField::Name => "Name",
            ProfileField::Phone => "Phone Number",
            // Legacy spelling; downstream consumers match on the
            // rendered message.
            ProfileField::Aadhaar => "Aadhar Number",
            ProfileField::Email => "Email",
            ProfileField::Password => "Password",
        })
    }
}

// ============================================================================
// PROFILE ERROR
// ============================================================================

/// First validation failure of a profile run.
///
/// Carries the party the record belongs to, the field that failed, and
/// the underlying rule error as `source`. The rendered message is
/// stable (`"Invalid Occupant Aadhar Number"` and friends) and is part
/// of the crate's contract.
#[derive(Debug, Clone, Error, Serialize)]
#[error("Invalid {party} {field}")]
pub struct ProfileError {
    party: Party,
    field: ProfileField,
    #[source]
    source: ValidationError,
}

impl ProfileError {
    pub(crate) fn new(party: Party, field: ProfileField, source: ValidationError) -> Self {
        Self {
            party,
            field,
            source,
        }
    }

    /// The kind of record that failed validation.
    #[must_use]
    pub fn party(&self) -> Party {
        self.party
    }

    /// The field that failed validation.
    #[must_use]
    pub fn field(&self) -> ProfileField {
        self.field
    }

    /// The underlying rule failure.
    #[must_use]
    pub fn details(&self) -> &ValidationError {
        &self.source
    }
}

// Runs one rule, tagging a failure with the party and field.
pub(crate) fn check<V>(
    rule: &V,
    input: &str,
    party: Party,
    field: ProfileField,
) -> Result<(), ProfileError>
where
    V: Validate<Input = str>,
{
    rule.validate(input)
        .map_err(|source| ProfileError::new(party, field, source))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_display() {
        assert_eq!(Party::Client.to_string(), "Client");
        assert_eq!(Party::Occupant.to_string(), "Occupant");
    }

    #[test]
    fn test_field_display() {
        assert_eq!(ProfileField::Name.to_string(), "Name");
        assert_eq!(ProfileField::Phone.to_string(), "Phone Number");
        assert_eq!(ProfileField::Aadhaar.to_string(), "Aadhar Number");
        assert_eq!(ProfileField::Email.to_string(), "Email");
        assert_eq!(ProfileField::Password.to_string(), "Password");
    }

    #[test]
    fn test_error_message_format() {
        let err = ProfileError::new(
            Party::Occupant,
            ProfileField::Aadhaar,
            ValidationError::new("aadhaar_digits", "no run"),
        );
        assert_eq!(err.to_string(), "Invalid Occupant Aadhar Number");
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error as _;

        let err = ProfileError::new(
            Party::Client,
            ProfileField::Email,
            ValidationError::invalid_format("email"),
        );
        let source = err.source().expect("source is set");
        assert!(source.to_string().contains("invalid_format"));
    }

    #[test]
    fn test_party_serde_tags() {
        assert_eq!(serde_json::to_string(&Party::Client).unwrap(), "\"client\"");
        assert_eq!(
            serde_json::to_string(&Party::Occupant).unwrap(),
            "\"occupant\""
        );
    }
}
