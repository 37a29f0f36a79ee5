//! Client registration profile.

use serde::{Deserialize, Serialize};

use super::{Party, ProfileError, ProfileField, check};
use crate::validators::{Email, FullName, Password, Phone};

/// Validates a client signup record.
///
/// Rules run in order: name, phone, email, password. The first failing
/// field is reported and the remaining rules are skipped.
///
/// # Examples
///
/// ```
/// use lodgen_validator::profiles::client;
///
/// assert!(client::validate("John", "1234567890", "john@x.com", "Abcdefg1").is_ok());
///
/// let err = client::validate("John1", "1234567890", "john@x.com", "Abcdefg1").unwrap_err();
/// assert_eq!(err.to_string(), "Invalid Client Name");
/// ```
pub fn validate(name: &str, phone: &str, email: &str, password: &str) -> Result<(), ProfileError> {
    check(&FullName::new(), name, Party::Client, ProfileField::Name)?;
    check(&Phone::new(), phone, Party::Client, ProfileField::Phone)?;
    check(&Email::new(), email, Party::Client, ProfileField::Email)?;
    check(
        &Password::signup(),
        password,
        Party::Client,
        ProfileField::Password,
    )?;
    Ok(())
}

// ============================================================================
// CLIENT REGISTRATION RECORD
// ============================================================================

/// A client signup record as submitted by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRegistration {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

impl ClientRegistration {
    /// Validates this record; see [`validate`].
    pub fn validate(&self) -> Result<(), ProfileError> {
        validate(&self.name, &self.phone, &self.email, &self.password)
    }
}

// ============================================================================
// TESTS
// ============================================================================
