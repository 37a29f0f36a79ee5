//! Smoke test: everything a caller needs is reachable via the prelude.

use lodgen_validator::prelude::*;

#[test]
fn field_rules_are_in_scope() {
    assert!(full_name().validate("John").is_ok());
    assert!(phone().validate("1234567890").is_ok());
    assert!(aadhaar().validate("123456789012").is_ok());
    assert!(email().validate("a@bc.com").is_ok());
    assert!(password().validate("Abcdefg1").is_ok());
}

#[test]
fn combinators_are_in_scope() {
    let rule = not_empty().and(min_length(2)).or(max_length(0));
    assert!(rule.validate("ok").is_ok());
    assert!(rule.validate("").is_ok()); // empty matches max_length(0)
    assert!(rule.validate("x").is_err());
}

#[test]
fn profiles_are_in_scope() {
    let err: ProfileError =
        profiles::client::validate("", "1234567890", "a@bc.com", "Abcdefg1").unwrap_err();
    assert_eq!(err.party(), Party::Client);
    assert_eq!(err.field(), ProfileField::Name);
}

#[test]
fn validation_result_alias_is_usable() {
    fn run() -> ValidationResult<()> {
        email().validate("a@bc.com")?;
        Ok(())
    }
    assert!(run().is_ok());
}
