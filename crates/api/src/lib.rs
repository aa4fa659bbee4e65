// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedUser, AuthenticationService, AuthorizationService};
pub use error::{ApiError, AuthError, translate_domain_error, translate_persistence_error};
pub use handlers::{
    create_event, create_user, delete_event, event_popularity, list_events, login, logout,
    mark_attendance, my_registrations, register_for_event, student_participation,
    submit_feedback, whoami,
};
pub use request_response::{
    AttendanceResponse, CreateEventRequest, CreateUserRequest, EventPopularityEntry,
    EventResponse, FeedbackResponse, LoginRequest, LoginResponse, MarkAttendanceRequest,
    MyRegistrationInfo, RegisterForEventRequest, RegistrationResponse, StudentParticipationEntry,
    SubmitFeedbackRequest, SuccessResponse, UserResponse,
};
