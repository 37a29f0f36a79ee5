//! Aadhaar-number validator.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

static AADHAAR_RUN: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new("[0-9]{12}").unwrap());

// ============================================================================
// AADHAAR VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that the input contains a 12-digit Aadhaar number.
    ///
    /// Same substring-search semantics as [`Phone`](super::Phone): any
    /// contiguous run of 12 ASCII digits anywhere in the input passes.
    /// No checksum verification is performed.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodgen_validator::validators::aadhaar;
    /// use lodgen_validator::foundation::Validate;
    ///
    /// let validator = aadhaar();
    /// assert!(validator.validate("123456789012").is_ok());
    /// assert!(validator.validate("1234 5678 9012").is_err());
    /// ```
    pub Aadhaar { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::new(
            "aadhaar_digits",
            "Aadhaar number must contain 12 consecutive digits",
        )
    }
    new() {
        Self {
            pattern: AADHAAR_RUN.clone(),
        }
    }
    fn aadhaar();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_bare_twelve_digits() {
        let validator = aadhaar();
        assert!(validator.validate("123456789012").is_ok());
    }

    #[test]
    fn test_embedded_run_passes() {
        let validator = aadhaar();
        assert!(validator.validate("aadhaar: 123456789012").is_ok());
    }

    #[test]
    fn test_longer_run_passes() {
        let validator = aadhaar();
        assert!(validator.validate("1234567890123").is_ok());
    }

    #[test]
    fn test_ten_digits_fail() {
        // A phone-length run is not an Aadhaar number.
        let validator = aadhaar();
        assert!(validator.validate("1234567890").is_err());
    }

    #[test]
    fn test_grouped_digits_fail() {
        let validator = aadhaar();
        assert!(validator.validate("1234 5678 9012").is_err());
    }
}
