// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::OffsetDateTime;

/// Validates the fields of a new user account.
///
/// Only shape is checked here. Email uniqueness requires storage and is
/// enforced by the persistence layer.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The email is empty or has no `@`
/// - The password is empty
pub fn validate_user_fields(name: &str, email: &str, password: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }

    let email: &str = email.trim();
    if email.is_empty() {
        return Err(DomainError::InvalidEmail(String::from(
            "Email cannot be empty",
        )));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
        _ => {
            return Err(DomainError::InvalidEmail(format!(
                "'{email}' is not an email address"
            )));
        }
    }

    if password.is_empty() {
        return Err(DomainError::InvalidPassword(String::from(
            "Password cannot be empty",
        )));
    }

    Ok(())
}

/// Validates the fields of a new event.
///
/// # Errors
///
/// Returns an error if:
/// - The title is empty
/// - The event does not end strictly after it starts
/// - A capacity is given and is not positive
pub fn validate_event_fields(
    title: &str,
    start: OffsetDateTime,
    end: OffsetDateTime,
    capacity: Option<i64>,
) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::InvalidTitle(String::from(
            "Title cannot be empty",
        )));
    }

    if end <= start {
        return Err(DomainError::InvalidEventWindow {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    if let Some(capacity) = capacity
        && capacity <= 0
    {
        return Err(DomainError::InvalidCapacity { capacity });
    }

    Ok(())
}
