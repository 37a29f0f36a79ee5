//! Person-name validator.
//!
//! Validates names as they are typed into a signup form.

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// FULL NAME VALIDATOR
// ============================================================================

/// Validates a person's name.
///
/// All whitespace is ignored, so `"John Smith"` and `" John  Smith "`
/// are both accepted. After whitespace removal the remainder must be
/// non-empty and consist exclusively of ASCII letters - no digits, no
/// punctuation, no accented characters.
///
/// # Examples
///
/// ```
/// use lodgen_validator::validators::full_name;
/// use lodgen_validator::foundation::Validate;
///
/// let validator = full_name();
/// assert!(validator.validate("John").is_ok());
/// assert!(validator.validate("  John  Smith  ").is_ok());
/// assert!(validator.validate("John1").is_err());
/// assert!(validator.validate("O'Brien").is_err());
/// assert!(validator.validate("   ").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FullName;

impl FullName {
    /// Creates a new name validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Validate for FullName {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let mut letters = input.chars().filter(|c| !c.is_whitespace()).peekable();

        if letters.peek().is_none() {
            return Err(ValidationError::new(
                "full_name_empty",
                "Name must not be empty",
            ));
        }

        if letters.all(|c| c.is_ascii_alphabetic()) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "full_name_charset",
                "Name must contain only letters",
            ))
        }
    }
}

/// Creates a name validator.
#[must_use]
pub const fn full_name() -> FullName {
    FullName::new()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name() {
        let validator = full_name();
        assert!(validator.validate("John").is_ok());
        assert!(validator.validate("jane").is_ok());
        assert!(validator.validate("X").is_ok());
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let validator = full_name();
        assert!(validator.validate("John Smith").is_ok());
        assert!(validator.validate("  John  Smith  ").is_ok());
        assert!(validator.validate("John\tSmith\n").is_ok());
    }

    #[test]
    fn test_digits_rejected() {
        let validator = full_name();
        assert!(validator.validate("John1").is_err());
        assert!(validator.validate("4chan").is_err());
    }

    #[test]
    fn test_punctuation_rejected() {
        let validator = full_name();
        assert!(validator.validate("O'Brien").is_err());
        assert!(validator.validate("Smith-Jones").is_err());
        assert!(validator.validate("J.R.").is_err());
    }

    #[test]
    fn test_non_ascii_rejected() {
        let validator = full_name();
        assert!(validator.validate("Jos\u{e9}").is_err());
        assert!(validator.validate("\u{410}\u{43d}\u{43d}\u{430}").is_err());
    }

    #[test]
    fn test_empty_and_blank_rejected() {
        let validator = full_name();
        let err = validator.validate("").unwrap_err();
        assert_eq!(err.code, "full_name_empty");
        let err = validator.validate("   \t ").unwrap_err();
        assert_eq!(err.code, "full_name_empty");
    }
}
