//! Occupant registration profile.

use serde::{Deserialize, Serialize};

use super::{Party, ProfileError, ProfileField, check};
use crate::validators::{Aadhaar, Email, FullName, Password, Phone};

/// Validates an occupant signup record.
///
/// Rules run in order: name, phone, Aadhaar, password, email. Note that
/// the password is checked before the email - the opposite of the
/// client profile. Callers that map the reported field back to a form
/// control rely on this order, so it must not be "fixed".
///
/// # Examples
///
/// ```
/// use lodgen_validator::profiles::occupant;
///
/// assert!(
///     occupant::validate("Jane", "1234567890", "123456789012", "jane@x.com", "Abcdefg1").is_ok()
/// );
///
/// let err = occupant::validate("Jane", "1234567890", "12345", "jane@x.com", "Abcdefg1")
///     .unwrap_err();
/// assert_eq!(err.to_string(), "Invalid Occupant Aadhar Number");
/// ```
pub fn validate(
    name: &str,
    phone: &str,
    aadhaar: &str,
    email: &str,
    password: &str,
) -> Result<(), ProfileError> {
    check(&FullName::new(), name, Party::Occupant, ProfileField::Name)?;
    check(&Phone::new(), phone, Party::Occupant, ProfileField::Phone)?;
    check(
        &Aadhaar::new(),
        aadhaar,
        Party::Occupant,
        ProfileField::Aadhaar,
    )?;
    check(
        &Password::signup(),
        password,
        Party::Occupant,
        ProfileField::Password,
    )?;
    check(&Email::new(), email, Party::Occupant, ProfileField::Email)?;
    Ok(())
}

// ============================================================================
// OCCUPANT REGISTRATION RECORD
// ============================================================================

/// An occupant signup record as submitted by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupantRegistration {
    pub name: String,
    pub phone: String,
    pub aadhaar: String,
    pub email: String,
    pub password: String,
}

impl OccupantRegistration {
    /// Validates this record; see [`validate`].
    pub fn validate(&self) -> Result<(), ProfileError> {
        validate(
            &self.name,
            &self.phone,
            &self.aadhaar,
            &self.email,
            &self.password,
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
