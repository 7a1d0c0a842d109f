// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, validate_building_fields, validate_color, validate_email, validate_room_fields,
    validate_user_fields,
};

#[test]
fn test_validate_user_fields_accepts_valid_user() {
    let result: Result<(), DomainError> = validate_user_fields("Ana Ruiz", "ana@example.org");
    assert!(result.is_ok());
}

#[test]
fn test_validate_user_fields_rejects_blank_name() {
    let result: Result<(), DomainError> = validate_user_fields("   ", "ana@example.org");
    assert!(matches!(result, Err(DomainError::InvalidName(_))));
}

#[test]
fn test_validate_email_rejects_malformed_addresses() {
    for email in ["", "plain", "@example.org", "ana@", "a b@example.org", "a@b@c"] {
        assert!(
            matches!(validate_email(email), Err(DomainError::InvalidEmail(_))),
            "expected {email:?} to be rejected"
        );
    }
}

#[test]
fn test_validate_building_fields_requires_name() {
    assert!(validate_building_fields("Ayuntamiento").is_ok());
    assert!(matches!(
        validate_building_fields(""),
        Err(DomainError::InvalidName(_))
    ));
}

#[test]
fn test_validate_room_fields_accepts_optional_fields_absent() {
    assert!(validate_room_fields("Sala de Plenos", None, None).is_ok());
}

#[test]
fn test_validate_room_fields_rejects_non_positive_capacity() {
    assert_eq!(
        validate_room_fields("Sala", Some(0), None),
        Err(DomainError::InvalidCapacity { capacity: 0 })
    );
}

#[test]
fn test_validate_room_fields_checks_color() {
    assert!(validate_room_fields("Sala", Some(20), Some("#1A2b3C")).is_ok());
    assert!(matches!(
        validate_room_fields("Sala", Some(20), Some("blue")),
        Err(DomainError::InvalidColor(_))
    ));
}

#[test]
fn test_validate_color_requires_hash_and_six_hex_digits() {
    assert!(validate_color("#ffffff").is_ok());
    assert!(validate_color("ffffff").is_err());
    assert!(validate_color("#fffff").is_err());
    assert!(validate_color("#gggggg").is_err());
}
