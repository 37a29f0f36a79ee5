//! Password format validator.
//!
//! Checks password format only; strength estimation and hashing are the
//! caller's concern.

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// PASSWORD VALIDATOR
// ============================================================================

/// Validates password format against configurable requirements.
///
/// Requirements can include a minimum length (in characters) and
/// required ASCII character classes. Checks run in a fixed order -
/// length, lowercase, uppercase, digit - and the first unmet
/// requirement is reported.
///
/// # Examples
///
/// ```
/// use lodgen_validator::validators::Password;
/// use lodgen_validator::foundation::Validate;
///
/// // The signup policy: 8+ chars with lower, upper, and digit.
/// let signup = Password::signup();
/// assert!(signup.validate("Abcdefg1").is_ok());
/// assert!(signup.validate("abcdefg1").is_err()); // no uppercase
/// assert!(signup.validate("Abc1").is_err()); // too short
///
/// // A custom policy
/// let pin = Password::new().min_length(4).require_digit();
/// assert!(pin.validate("1234").is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Password {
    min_length: usize,
    require_lowercase: bool,
    require_uppercase: bool,
    require_digit: bool,
}

impl Password {
    /// Creates a new password validator with minimal requirements.
    ///
    /// Default settings: minimum length 1, no character class
    /// requirements.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_length: 1,
            require_lowercase: false,
            require_uppercase: false,
            require_digit: false,
        }
    }

    /// Creates the signup password policy.
    ///
    /// Requirements:
    /// - Minimum 8 characters
    /// - At least one lowercase ASCII letter
    /// - At least one uppercase ASCII letter
    /// - At least one digit
    ///
    /// No special-character requirement.
    #[must_use]
    pub fn signup() -> Self {
        Self::new()
            .min_length(8)
            .require_lowercase()
            .require_uppercase()
            .require_digit()
    }

    /// Sets the minimum password length, counted in characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = len;
        self
    }

    /// Requires at least one lowercase ASCII letter.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_lowercase(mut self) -> Self {
        self.require_lowercase = true;
        self
    }

    /// Requires at least one uppercase ASCII letter.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_uppercase(mut self) -> Self {
        self.require_uppercase = true;
        self
    }

    /// Requires at least one ASCII digit.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_digit(mut self) -> Self {
        self.require_digit = true;
        self
    }
}

impl Default for Password {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Password {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let length = input.chars().count();
        if length < self.min_length {
            return Err(ValidationError::new(
                "password_too_short",
                format!("Password must be at least {} characters", self.min_length),
            )
            .with_param("min", self.min_length.to_string())
            .with_param("actual", length.to_string()));
        }

        if self.require_lowercase && !input.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(ValidationError::new(
                "password_no_lowercase",
                "Password must contain at least one lowercase letter",
            ));
        }

        if self.require_uppercase && !input.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::new(
                "password_no_uppercase",
                "Password must contain at least one uppercase letter",
            ));
        }

        if self.require_digit && !input.chars().any(|c| c.is_ascii_digit()) {
            return Err(ValidationError::new(
                "password_no_digit",
                "Password must contain at least one digit",
            ));
        }

        Ok(())
    }
}

/// Creates the signup password validator.
#[must_use]
pub fn password() -> Password {
    Password::signup()
}

// ============================================================================
// TESTS
// ============================================================================
