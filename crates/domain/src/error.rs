// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Role string is not one of the known roles.
    #[error("Invalid role: '{0}'. Must be 'admin' or 'student'")]
    InvalidRole(String),
    /// Event type string is not one of the known event types.
    #[error("Invalid event type: '{0}'. Must be one of workshop, fest, seminar, talk, other")]
    InvalidEventType(String),
    /// Registration status string is not recognized.
    #[error("Invalid registration status: '{0}'")]
    InvalidRegistrationStatus(String),
    /// User name is empty or invalid.
    #[error("Invalid name: {0}")]
    InvalidName(String),
    /// Email address is empty or malformed.
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
    /// Password is empty.
    #[error("Invalid password: {0}")]
    InvalidPassword(String),
    /// Event title is empty.
    #[error("Invalid title: {0}")]
    InvalidTitle(String),
    /// Event does not end after it starts.
    #[error("Event must end after it starts (start: {start}, end: {end})")]
    InvalidEventWindow {
        /// The requested start time.
        start: String,
        /// The requested end time.
        end: String,
    },
    /// Event capacity must be positive when given.
    #[error("Invalid capacity: {capacity}. Must be greater than 0")]
    InvalidCapacity {
        /// The invalid capacity.
        capacity: i64,
    },
    /// Feedback rating is outside the accepted range.
    #[error("Invalid rating: {rating}. Must be between {min} and {max}")]
    InvalidRating {
        /// The invalid rating.
        rating: i64,
        /// The smallest accepted rating.
        min: u8,
        /// The largest accepted rating.
        max: u8,
    },
}
