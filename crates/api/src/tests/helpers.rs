// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use campus_events_persistence::Persistence;
use time::macros::datetime;

use crate::{
    AuthenticatedUser, AuthenticationService, CreateEventRequest, CreateUserRequest,
    EventResponse, LoginRequest, LoginResponse, create_event, create_user, login,
};

pub fn setup_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory database")
}

pub fn create_test_user_request(name: &str, email: &str, role: &str) -> CreateUserRequest {
    CreateUserRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: String::from("password"),
        role: role.to_string(),
    }
}

/// Creates a user, logs them in and resolves the issued token.
pub fn create_logged_in_user(
    persistence: &mut Persistence,
    name: &str,
    email: &str,
    role: &str,
) -> (LoginResponse, AuthenticatedUser) {
    create_user(persistence, &create_test_user_request(name, email, role))
        .expect("Failed to create user");

    let login_response: LoginResponse = login(
        persistence,
        &LoginRequest {
            email: email.to_string(),
            password: String::from("password"),
        },
    )
    .expect("Failed to log in");

    let user: AuthenticatedUser =
        AuthenticationService::authenticate(persistence, Some(&login_response.token))
            .expect("Failed to resolve token");

    (login_response, user)
}

pub fn create_test_admin(persistence: &mut Persistence) -> AuthenticatedUser {
    create_logged_in_user(persistence, "Admin", "admin@campus.test", "admin").1
}

pub fn create_test_student(persistence: &mut Persistence, name: &str) -> AuthenticatedUser {
    let email: String = format!("{}@campus.test", name.to_lowercase());
    create_logged_in_user(persistence, name, &email, "student").1
}

pub fn create_test_event_request(title: &str) -> CreateEventRequest {
    CreateEventRequest {
        title: title.to_string(),
        description: Some(String::from("Hands-on session")),
        event_type: String::from("workshop"),
        start_datetime: datetime!(2026-04-10 09:00 UTC),
        end_datetime: datetime!(2026-04-10 11:00 UTC),
        location: Some(String::from("Lab 3")),
        capacity: Some(10),
    }
}

pub fn create_test_event(
    persistence: &mut Persistence,
    admin: &AuthenticatedUser,
    title: &str,
) -> EventResponse {
    create_event(persistence, create_test_event_request(title), admin)
        .expect("Failed to create event")
}
