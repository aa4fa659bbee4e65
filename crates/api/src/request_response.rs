// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// API request to create a user account.
///
/// `role` is kept as a string so unknown roles are reported as invalid
/// input rather than a body decoding failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// The display name.
    pub name: String,
    /// The login email.
    pub email: String,
    /// The plain-text password.
    pub password: String,
    /// `admin` or `student`.
    pub role: String,
}

/// A user as returned by the API. Never includes the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// The user's ID.
    pub id: i64,
    /// The display name.
    pub name: String,
    /// The login email.
    pub email: String,
    /// `admin` or `student`.
    pub role: String,
}

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The login email.
    pub email: String,
    /// The plain-text password.
    pub password: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The bearer token for subsequent requests.
    pub token: String,
    /// The user's ID.
    pub user_id: i64,
    /// `admin` or `student`.
    pub role: String,
}

/// Acknowledgement for operations with no other payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Always `true`.
    pub success: bool,
}

/// API request to create an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    /// The event title.
    pub title: String,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// One of `workshop`, `fest`, `seminar`, `talk`, `other`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Start time. RFC 3339, or a local `YYYY-MM-DDTHH:MM[:SS]` read as UTC.
    #[serde(with = "event_datetime")]
    pub start_datetime: OffsetDateTime,
    /// End time, in the same forms as the start. Must be after the start.
    #[serde(with = "event_datetime")]
    pub end_datetime: OffsetDateTime,
    /// Optional location.
    #[serde(default)]
    pub location: Option<String>,
    /// Optional positive capacity. Informational only.
    #[serde(default)]
    pub capacity: Option<i64>,
}

/// Event times as sent by clients.
///
/// HTML `datetime-local` inputs produce values without an offset, such as
/// `2026-05-01T10:00`. Those are taken as UTC. Output is always RFC 3339.
mod event_datetime {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};
    use time::format_description::BorrowedFormatItem;
    use time::format_description::well_known::Rfc3339;
    use time::macros::format_description;
    use time::{OffsetDateTime, PrimitiveDateTime};

    const LOCAL_WITH_SECONDS: &[BorrowedFormatItem<'static>] =
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    const LOCAL_MINUTES: &[BorrowedFormatItem<'static>] =
        format_description!("[year]-[month]-[day]T[hour]:[minute]");

    /// Parses an event time, falling back to offset-less forms as UTC.
    pub fn parse(value: &str) -> Option<OffsetDateTime> {
        OffsetDateTime::parse(value, &Rfc3339).ok().or_else(|| {
            PrimitiveDateTime::parse(value, LOCAL_WITH_SECONDS)
                .or_else(|_| PrimitiveDateTime::parse(value, LOCAL_MINUTES))
                .ok()
                .map(PrimitiveDateTime::assume_utc)
        })
    }

    pub fn serialize<S: Serializer>(
        value: &OffsetDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        time::serde::rfc3339::serialize(value, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<OffsetDateTime, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| {
            D::Error::custom(format!(
                "invalid datetime '{raw}': expected RFC 3339 or YYYY-MM-DDTHH:MM[:SS]"
            ))
        })
    }
}

/// An event as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResponse {
    /// The event ID.
    pub id: i64,
    /// The event title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// The event type.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Human-readable event type, e.g. "Tech Talk".
    pub type_label: String,
    /// Start time (RFC 3339, UTC).
    pub start_datetime: String,
    /// End time (RFC 3339, UTC).
    pub end_datetime: String,
    /// Optional location.
    pub location: Option<String>,
    /// Optional capacity.
    pub capacity: Option<i32>,
    /// The creator's display name.
    pub created_by: String,
}

/// API request to register the caller for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterForEventRequest {
    /// The event to register for.
    pub event_id: i64,
}

/// API response for a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    /// The registration ID.
    pub registration_id: i64,
    /// The registration status.
    pub status: String,
}

/// One of the caller's registrations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyRegistrationInfo {
    /// The registration ID.
    pub registration_id: i64,
    /// The event ID.
    pub event_id: i64,
    /// The event title.
    pub event: String,
    /// The registration status.
    pub status: String,
    /// When the registration was created (RFC 3339, UTC).
    pub registered_at: String,
    /// Whether attendance was marked present.
    pub attendance: bool,
}

/// API request to mark attendance for a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkAttendanceRequest {
    /// The registration to mark.
    pub registration_id: i64,
    /// Whether the student attended.
    pub present: bool,
}

/// API response for marked attendance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceResponse {
    /// The attendance record ID.
    pub attendance_id: i64,
    /// Whether the student attended.
    pub present: bool,
    /// Check-in time when present (RFC 3339, UTC).
    pub checked_in_at: Option<String>,
}

/// API request to submit feedback for a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitFeedbackRequest {
    /// The caller's registration.
    pub registration_id: i64,
    /// Rating from 1 to 5.
    pub rating: i64,
    /// Optional comment.
    #[serde(default)]
    pub comment: Option<String>,
}

/// API response for submitted feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackResponse {
    /// The feedback ID, stable across resubmissions.
    pub feedback_id: i64,
    /// The stored rating.
    pub rating: i32,
}

/// One row of the event popularity report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPopularityEntry {
    /// The event ID.
    pub event_id: i64,
    /// The event title.
    pub event: String,
    /// Number of registrations, regardless of status.
    pub registrations: usize,
}

/// One row of the student participation report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentParticipationEntry {
    /// The student's user ID.
    pub student_id: i64,
    /// The student's display name.
    pub student: String,
    /// Number of registrations marked present.
    pub attended: usize,
}
