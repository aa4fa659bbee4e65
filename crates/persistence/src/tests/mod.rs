// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod cascade_tests;
mod initialization_tests;
mod registration_tests;

use campus_events_domain::{EventType, Role};
use time::macros::datetime;

use crate::{NewEvent, Persistence, Repository};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory database")
}

pub fn create_test_admin(persistence: &mut Persistence) -> i64 {
    persistence
        .create_user("Admin", "admin@campus.test", "admin-pass", Role::Admin)
        .expect("Failed to create admin")
}

pub fn create_test_student(persistence: &mut Persistence, name: &str, email: &str) -> i64 {
    persistence
        .create_user(name, email, "student-pass", Role::Student)
        .expect("Failed to create student")
}

pub fn create_test_new_event(created_by: i64, title: &str) -> NewEvent {
    NewEvent {
        title: title.to_string(),
        description: Some(String::from("An event for tests")),
        event_type: EventType::Workshop,
        start_datetime: datetime!(2026-03-01 10:00 UTC),
        end_datetime: datetime!(2026-03-01 12:00 UTC),
        location: Some(String::from("Hall A")),
        capacity: Some(50),
        created_by,
    }
}

pub fn create_test_event(persistence: &mut Persistence, created_by: i64, title: &str) -> i64 {
    persistence
        .create_event(&create_test_new_event(created_by, title))
        .expect("Failed to create event")
}
