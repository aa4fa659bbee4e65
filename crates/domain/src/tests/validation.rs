// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::datetime;

use crate::{DomainError, validate_event_fields, validate_user_fields};

#[test]
fn test_validate_user_fields_accepts_valid_user() {
    assert!(validate_user_fields("Ada", "ada@campus.edu", "secret").is_ok());
}

#[test]
fn test_validate_user_fields_rejects_empty_name() {
    assert!(matches!(
        validate_user_fields("   ", "ada@campus.edu", "secret"),
        Err(DomainError::InvalidName(_))
    ));
}

#[test]
fn test_validate_user_fields_rejects_bad_email() {
    for email in ["", "ada", "@campus.edu", "ada@"] {
        assert!(
            matches!(
                validate_user_fields("Ada", email, "secret"),
                Err(DomainError::InvalidEmail(_))
            ),
            "expected '{email}' to be rejected"
        );
    }
}

#[test]
fn test_validate_user_fields_rejects_empty_password() {
    assert!(matches!(
        validate_user_fields("Ada", "ada@campus.edu", ""),
        Err(DomainError::InvalidPassword(_))
    ));
}

#[test]
fn test_validate_event_fields_accepts_valid_event() {
    let start = datetime!(2026-03-01 09:00 UTC);
    let end = datetime!(2026-03-01 17:00 UTC);
    assert!(validate_event_fields("Rust Workshop", start, end, Some(10)).is_ok());
    assert!(validate_event_fields("Rust Workshop", start, end, None).is_ok());
}

#[test]
fn test_validate_event_fields_rejects_empty_title() {
    let start = datetime!(2026-03-01 09:00 UTC);
    let end = datetime!(2026-03-01 17:00 UTC);
    assert!(matches!(
        validate_event_fields("", start, end, None),
        Err(DomainError::InvalidTitle(_))
    ));
}

#[test]
fn test_validate_event_fields_rejects_end_not_after_start() {
    let start = datetime!(2026-03-01 09:00 UTC);
    let before = datetime!(2026-03-01 08:00 UTC);
    assert!(matches!(
        validate_event_fields("Talk", start, before, None),
        Err(DomainError::InvalidEventWindow { .. })
    ));
    assert!(matches!(
        validate_event_fields("Talk", start, start, None),
        Err(DomainError::InvalidEventWindow { .. })
    ));
}

#[test]
fn test_validate_event_fields_rejects_non_positive_capacity() {
    let start = datetime!(2026-03-01 09:00 UTC);
    let end = datetime!(2026-03-01 17:00 UTC);
    assert_eq!(
        validate_event_fields("Fest", start, end, Some(0)),
        Err(DomainError::InvalidCapacity { capacity: 0 })
    );
}
