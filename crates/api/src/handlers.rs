// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Each handler authorizes the caller, validates the request shape, performs
//! one or two repository calls and shapes a typed response. Handlers are
//! generic over [`Repository`] so they run unchanged against any storage.

use campus_events_domain::{
    EventType, Rating, Role, validate_event_fields, validate_user_fields,
};
use campus_events_persistence::{
    AttendanceData, EventData, FeedbackData, NewEvent, PersistenceError, RegistrationData,
    Repository, TokenData, UserData,
};
use tracing::info;

use crate::auth::{AuthenticatedUser, AuthenticationService, AuthorizationService};
use crate::error::{ApiError, translate_persistence_error};
use crate::request_response::{
    AttendanceResponse, CreateEventRequest, CreateUserRequest, EventPopularityEntry,
    EventResponse, FeedbackResponse, LoginRequest, LoginResponse, MarkAttendanceRequest,
    MyRegistrationInfo, RegisterForEventRequest, RegistrationResponse, StudentParticipationEntry,
    SubmitFeedbackRequest, SuccessResponse, UserResponse,
};

fn event_to_response(event: EventData) -> EventResponse {
    EventResponse {
        id: event.event_id,
        title: event.title,
        description: event.description,
        event_type: event.event_type.to_string(),
        type_label: event.event_type.label().to_string(),
        start_datetime: event.start_datetime,
        end_datetime: event.end_datetime,
        location: event.location,
        capacity: event.capacity,
        created_by: event.creator_name,
    }
}

fn user_to_response(user: UserData) -> UserResponse {
    UserResponse {
        id: user.user_id,
        name: user.name,
        email: user.email,
        role: user.role.to_string(),
    }
}

/// Creates a user account. Open to anyone.
///
/// # Errors
///
/// Returns an error if:
/// - Any field fails validation or the role is unknown
/// - The email is already in use
/// - Database operations fail
pub fn create_user<R: Repository>(
    repository: &mut R,
    request: &CreateUserRequest,
) -> Result<UserResponse, ApiError> {
    validate_user_fields(&request.name, &request.email, &request.password)?;
    let role: Role = request.role.parse()?;

    let email: &str = request.email.trim();
    let user_id: i64 = repository
        .create_user(request.name.trim(), email, &request.password, role)
        .map_err(|e| match e {
            PersistenceError::UniqueViolation(_) => ApiError::DomainRuleViolation {
                rule: String::from("unique_email"),
                message: format!("A user with email '{email}' already exists"),
            },
            other => translate_persistence_error(other, "User"),
        })?;

    let user: UserData = repository
        .get_user_by_id(user_id)
        .map_err(|e| translate_persistence_error(e, "User"))?
        .ok_or_else(|| ApiError::Internal {
            message: String::from("User not found after creation"),
        })?;

    Ok(user_to_response(user))
}

/// Logs in with email and password, issuing a fresh token.
///
/// The email is trimmed the same way `create_user` trims it before storage.
///
/// # Errors
///
/// Returns an error if the credentials are invalid or the token cannot be
/// stored.
pub fn login<R: Repository>(
    repository: &mut R,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let (token, user): (TokenData, AuthenticatedUser) =
        AuthenticationService::issue_or_rotate(
            repository,
            request.email.trim(),
            &request.password,
        )?;

    Ok(LoginResponse {
        token: token.token,
        user_id: user.user_id,
        role: user.role.to_string(),
    })
}

/// Logs out by deleting the token.
///
/// # Errors
///
/// Returns an error if the token does not exist or the delete fails.
pub fn logout<R: Repository>(
    repository: &mut R,
    token: &str,
) -> Result<SuccessResponse, ApiError> {
    if !AuthenticationService::revoke(repository, token)? {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Token"),
            message: String::from("Invalid token"),
        });
    }

    Ok(SuccessResponse { success: true })
}

/// Returns the caller's own account.
#[must_use]
pub fn whoami(user: &AuthenticatedUser) -> UserResponse {
    UserResponse {
        id: user.user_id,
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role.to_string(),
    }
}

/// Creates an event owned by the calling admin.
///
/// # Errors
///
/// Returns an error if:
/// - The caller is not an admin
/// - The title is empty, the type is unknown, the event does not end after
///   it starts, or the capacity is not positive
/// - Database operations fail
pub fn create_event<R: Repository>(
    repository: &mut R,
    request: CreateEventRequest,
    user: &AuthenticatedUser,
) -> Result<EventResponse, ApiError> {
    AuthorizationService::require_admin(user, "create_event")?;

    let event_type: EventType = request.event_type.parse()?;
    validate_event_fields(
        &request.title,
        request.start_datetime,
        request.end_datetime,
        request.capacity,
    )?;
    let capacity: Option<i32> = request
        .capacity
        .map(i32::try_from)
        .transpose()
        .map_err(|_| ApiError::InvalidInput {
            field: String::from("capacity"),
            message: String::from("Capacity is too large"),
        })?;

    let new_event: NewEvent = NewEvent {
        title: request.title.trim().to_string(),
        description: request.description,
        event_type,
        start_datetime: request.start_datetime,
        end_datetime: request.end_datetime,
        location: request.location,
        capacity,
        created_by: user.user_id,
    };

    let event_id: i64 = repository
        .create_event(&new_event)
        .map_err(|e| translate_persistence_error(e, "Event"))?;

    let event: EventData = repository
        .get_event(event_id)
        .map_err(|e| translate_persistence_error(e, "Event"))?
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Event not found after creation"),
        })?;

    Ok(event_to_response(event))
}

/// Lists all events in ID order. Open to anyone.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_events<R: Repository>(repository: &mut R) -> Result<Vec<EventResponse>, ApiError> {
    let events: Vec<EventData> = repository
        .list_events()
        .map_err(|e| translate_persistence_error(e, "Event"))?;

    Ok(events.into_iter().map(event_to_response).collect())
}

/// Deletes an event and everything registered against it.
///
/// # Errors
///
/// Returns an error if the caller is not an admin or the event does not exist.
pub fn delete_event<R: Repository>(
    repository: &mut R,
    event_id: i64,
    user: &AuthenticatedUser,
) -> Result<SuccessResponse, ApiError> {
    AuthorizationService::require_admin(user, "delete_event")?;

    repository
        .delete_event(event_id)
        .map_err(|e| translate_persistence_error(e, "Event"))?;

    info!(event_id, user_id = user.user_id, "Event deleted");

    Ok(SuccessResponse { success: true })
}

/// Registers the calling student for an event.
///
/// Registering again returns the existing registration unchanged.
///
/// # Errors
///
/// Returns an error if the caller is not a student or the event does not
/// exist.
pub fn register_for_event<R: Repository>(
    repository: &mut R,
    request: RegisterForEventRequest,
    user: &AuthenticatedUser,
) -> Result<RegistrationResponse, ApiError> {
    AuthorizationService::require_student(user, "register_for_event")?;

    if repository
        .get_event(request.event_id)
        .map_err(|e| translate_persistence_error(e, "Event"))?
        .is_none()
    {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Event"),
            message: format!("Event {} does not exist", request.event_id),
        });
    }

    let registration: RegistrationData = repository
        .get_or_create_registration(request.event_id, user.user_id)
        .map_err(|e| translate_persistence_error(e, "Registration"))?;

    Ok(RegistrationResponse {
        registration_id: registration.registration_id,
        status: registration.status.to_string(),
    })
}

/// Lists the calling student's registrations.
///
/// # Errors
///
/// Returns an error if the caller is not a student or the query fails.
pub fn my_registrations<R: Repository>(
    repository: &mut R,
    user: &AuthenticatedUser,
) -> Result<Vec<MyRegistrationInfo>, ApiError> {
    AuthorizationService::require_student(user, "my_registrations")?;

    let registrations = repository
        .list_registrations_for_student(user.user_id)
        .map_err(|e| translate_persistence_error(e, "Registration"))?;

    Ok(registrations
        .into_iter()
        .map(|r| MyRegistrationInfo {
            registration_id: r.registration_id,
            event_id: r.event_id,
            event: r.event_title,
            status: r.status.to_string(),
            registered_at: r.registered_at,
            attendance: r.attended,
        })
        .collect())
}

/// Marks whether the student of a registration attended.
///
/// # Errors
///
/// Returns an error if the caller is not an admin or the registration does
/// not exist.
pub fn mark_attendance<R: Repository>(
    repository: &mut R,
    request: MarkAttendanceRequest,
    user: &AuthenticatedUser,
) -> Result<AttendanceResponse, ApiError> {
    AuthorizationService::require_admin(user, "mark_attendance")?;

    if repository
        .get_registration(request.registration_id)
        .map_err(|e| translate_persistence_error(e, "Registration"))?
        .is_none()
    {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Registration"),
            message: format!("Registration {} does not exist", request.registration_id),
        });
    }

    let attendance: AttendanceData = repository
        .upsert_attendance(request.registration_id, request.present)
        .map_err(|e| translate_persistence_error(e, "Attendance"))?;

    Ok(AttendanceResponse {
        attendance_id: attendance.attendance_id,
        present: attendance.present,
        checked_in_at: attendance.checked_in_at,
    })
}

/// Stores the calling student's feedback for one of their registrations.
///
/// Resubmitting replaces the rating and comment.
///
/// # Errors
///
/// Returns an error if:
/// - The caller is not a student
/// - The rating is out of range
/// - The registration does not exist or belongs to another student
pub fn submit_feedback<R: Repository>(
    repository: &mut R,
    request: &SubmitFeedbackRequest,
    user: &AuthenticatedUser,
) -> Result<FeedbackResponse, ApiError> {
    AuthorizationService::require_student(user, "submit_feedback")?;

    let rating: Rating = Rating::new(request.rating)?;

    let owned: bool = repository
        .get_registration(request.registration_id)
        .map_err(|e| translate_persistence_error(e, "Registration"))?
        .is_some_and(|r| r.student_id == user.user_id);

    // Other students' registrations are reported as missing
    if !owned {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Registration"),
            message: format!("Registration {} does not exist", request.registration_id),
        });
    }

    let feedback: FeedbackData = repository
        .upsert_feedback(
            request.registration_id,
            i32::from(rating.value()),
            request.comment.as_deref(),
        )
        .map_err(|e| translate_persistence_error(e, "Feedback"))?;

    Ok(FeedbackResponse {
        feedback_id: feedback.feedback_id,
        rating: feedback.rating,
    })
}

/// Reports every event with its registration count, most popular first.
///
/// # Errors
///
/// Returns an error if the caller is not an admin or the query fails.
pub fn event_popularity<R: Repository>(
    repository: &mut R,
    user: &AuthenticatedUser,
) -> Result<Vec<EventPopularityEntry>, ApiError> {
    AuthorizationService::require_admin(user, "event_popularity")?;

    let rows = repository
        .event_popularity()
        .map_err(|e| translate_persistence_error(e, "Report"))?;

    Ok(rows
        .into_iter()
        .map(|r| EventPopularityEntry {
            event_id: r.event_id,
            event: r.title,
            registrations: r.registrations,
        })
        .collect())
}

/// Reports every student with the number of events they attended.
///
/// # Errors
///
/// Returns an error if the caller is not an admin or the query fails.
pub fn student_participation<R: Repository>(
    repository: &mut R,
    user: &AuthenticatedUser,
) -> Result<Vec<StudentParticipationEntry>, ApiError> {
    AuthorizationService::require_admin(user, "student_participation")?;

    let rows = repository
        .student_participation()
        .map_err(|e| translate_persistence_error(e, "Report"))?;

    Ok(rows
        .into_iter()
        .map(|r| StudentParticipationEntry {
            student_id: r.user_id,
            student: r.name,
            attended: r.attended,
        })
        .collect())
}
