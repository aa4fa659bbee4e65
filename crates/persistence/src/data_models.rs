// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campus_events_domain::{EventType, RegistrationStatus, Role};
use time::OffsetDateTime;

/// A stored user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Input for creating an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub event_type: EventType,
    pub start_datetime: OffsetDateTime,
    pub end_datetime: OffsetDateTime,
    pub location: Option<String>,
    pub capacity: Option<i32>,
    pub created_by: i64,
}

/// A stored event together with its creator's display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventData {
    pub event_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub event_type: EventType,
    /// RFC 3339, UTC.
    pub start_datetime: String,
    /// RFC 3339, UTC.
    pub end_datetime: String,
    pub location: Option<String>,
    pub capacity: Option<i32>,
    pub created_by: i64,
    pub creator_name: String,
}

/// A stored registration of a student for an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationData {
    pub registration_id: i64,
    pub event_id: i64,
    pub student_id: i64,
    pub registered_at: String,
    pub status: RegistrationStatus,
}

/// A registration as seen by its student: joined with the event title and
/// whether attendance was marked present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRegistrationData {
    pub registration_id: i64,
    pub event_id: i64,
    pub event_title: String,
    pub registered_at: String,
    pub status: RegistrationStatus,
    pub attended: bool,
}

/// A stored attendance record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceData {
    pub attendance_id: i64,
    pub registration_id: i64,
    pub present: bool,
    pub checked_in_at: Option<String>,
}

/// A stored feedback entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackData {
    pub feedback_id: i64,
    pub registration_id: i64,
    pub rating: i32,
    pub comment: Option<String>,
    pub submitted_at: String,
}

/// A user's live authentication token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenData {
    pub token_id: i64,
    pub user_id: i64,
    pub token: String,
    pub created_at: String,
}

/// Registration count for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPopularityData {
    pub event_id: i64,
    pub title: String,
    pub registrations: usize,
}

/// Present-attendance count for one student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentParticipationData {
    pub user_id: i64,
    pub name: String,
    pub attended: usize,
}
