// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role enforcement tests.
//!
//! Admin-only handlers reject students and student-only handlers reject
//! admins, without touching storage.

use campus_events_persistence::Repository;

use crate::{
    ApiError, MarkAttendanceRequest, RegisterForEventRequest, SubmitFeedbackRequest,
    create_event, delete_event, event_popularity, mark_attendance, my_registrations,
    register_for_event, student_participation, submit_feedback,
};

use super::helpers::{
    create_test_admin, create_test_event, create_test_event_request, create_test_student,
    setup_test_persistence,
};

fn assert_unauthorized<T: std::fmt::Debug>(result: Result<T, ApiError>, required: &str) {
    match result {
        Err(ApiError::Unauthorized { required_role, .. }) => {
            assert_eq!(required_role, required);
        }
        other => panic!("Expected Unauthorized, got {other:?}"),
    }
}

#[test]
fn test_create_event_rejects_student() {
    let mut persistence = setup_test_persistence();
    let student = create_test_student(&mut persistence, "Alice");

    let result = create_event(
        &mut persistence,
        create_test_event_request("Sneaky"),
        &student,
    );

    assert_unauthorized(result, "admin");
    assert!(persistence.list_events().unwrap().is_empty());
}

#[test]
fn test_delete_event_rejects_student() {
    let mut persistence = setup_test_persistence();
    let admin = create_test_admin(&mut persistence);
    let student = create_test_student(&mut persistence, "Alice");
    let event = create_test_event(&mut persistence, &admin, "Keep");

    assert_unauthorized(delete_event(&mut persistence, event.id, &student), "admin");
    assert!(persistence.get_event(event.id).unwrap().is_some());
}

#[test]
fn test_mark_attendance_rejects_student() {
    let mut persistence = setup_test_persistence();
    let student = create_test_student(&mut persistence, "Alice");

    let result = mark_attendance(
        &mut persistence,
        MarkAttendanceRequest {
            registration_id: 1,
            present: true,
        },
        &student,
    );

    assert_unauthorized(result, "admin");
}

#[test]
fn test_reports_reject_student() {
    let mut persistence = setup_test_persistence();
    let student = create_test_student(&mut persistence, "Alice");

    assert_unauthorized(event_popularity(&mut persistence, &student), "admin");
    assert_unauthorized(student_participation(&mut persistence, &student), "admin");
}

#[test]
fn test_register_rejects_admin() {
    let mut persistence = setup_test_persistence();
    let admin = create_test_admin(&mut persistence);
    let event = create_test_event(&mut persistence, &admin, "Seminar");

    let result = register_for_event(
        &mut persistence,
        RegisterForEventRequest { event_id: event.id },
        &admin,
    );

    assert_unauthorized(result, "student");
}

#[test]
fn test_my_registrations_rejects_admin() {
    let mut persistence = setup_test_persistence();
    let admin = create_test_admin(&mut persistence);

    assert_unauthorized(my_registrations(&mut persistence, &admin), "student");
}

#[test]
fn test_submit_feedback_rejects_admin() {
    let mut persistence = setup_test_persistence();
    let admin = create_test_admin(&mut persistence);

    let result = submit_feedback(
        &mut persistence,
        &SubmitFeedbackRequest {
            registration_id: 1,
            rating: 5,
            comment: None,
        },
        &admin,
    );

    assert_unauthorized(result, "student");
}
