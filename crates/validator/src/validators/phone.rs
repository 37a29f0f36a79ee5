//! Phone-number validator.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

static PHONE_RUN: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new("[0-9]{10}").unwrap());

// ============================================================================
// PHONE VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that the input contains a 10-digit phone number.
    ///
    /// The check is a substring search, not a full-string match: any
    /// contiguous run of 10 ASCII digits anywhere in the input passes,
    /// including runs embedded in other text and runs longer than 10
    /// digits. Callers that accept formatted numbers rely on this
    /// looseness, so it must not be tightened to an anchored match.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodgen_validator::validators::phone;
    /// use lodgen_validator::foundation::Validate;
    ///
    /// let validator = phone();
    /// assert!(validator.validate("1234567890").is_ok());
    /// assert!(validator.validate("call 1234567890 now").is_ok());
    /// assert!(validator.validate("123-456-7890").is_err());
    /// ```
    pub Phone { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::new(
            "phone_digits",
            "Phone number must contain 10 consecutive digits",
        )
    }
    new() {
        Self {
            pattern: PHONE_RUN.clone(),
        }
    }
    fn phone();
}

// ============================================================================
// TESTS
// ============================================================================
