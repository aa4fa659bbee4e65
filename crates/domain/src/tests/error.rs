// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidRole(String::from("teacher"));
    assert_eq!(
        format!("{err}"),
        "Invalid role: 'teacher'. Must be 'admin' or 'student'"
    );

    let err: DomainError = DomainError::InvalidName(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid name: test");

    let err: DomainError = DomainError::InvalidEmail(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid email: test");

    let err: DomainError = DomainError::InvalidTitle(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid title: test");

    let err: DomainError = DomainError::InvalidCapacity { capacity: 0 };
    assert_eq!(
        format!("{err}"),
        "Invalid capacity: 0. Must be greater than 0"
    );

    let err: DomainError = DomainError::InvalidRating {
        rating: 9,
        min: 1,
        max: 5,
    };
    assert_eq!(format!("{err}"), "Invalid rating: 9. Must be between 1 and 5");
}
