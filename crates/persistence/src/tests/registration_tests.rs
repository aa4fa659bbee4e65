// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for registration persistence.

use campus_events_domain::RegistrationStatus;

use super::{create_test_admin, create_test_event, create_test_persistence, create_test_student};
use crate::Repository;

#[test]
fn test_register_creates_registration() {
    let mut persistence = create_test_persistence();
    let admin_id = create_test_admin(&mut persistence);
    let event_id = create_test_event(&mut persistence, admin_id, "Seminar");
    let student_id = create_test_student(&mut persistence, "Alice", "alice@campus.test");

    let registration = persistence
        .get_or_create_registration(event_id, student_id)
        .unwrap();

    assert_eq!(registration.event_id, event_id);
    assert_eq!(registration.student_id, student_id);
    assert_eq!(registration.status, RegistrationStatus::Registered);
    assert!(!registration.registered_at.is_empty());
}

#[test]
fn test_register_is_idempotent() {
    let mut persistence = create_test_persistence();
    let admin_id = create_test_admin(&mut persistence);
    let event_id = create_test_event(&mut persistence, admin_id, "Seminar");
    let student_id = create_test_student(&mut persistence, "Alice", "alice@campus.test");

    let first = persistence
        .get_or_create_registration(event_id, student_id)
        .unwrap();
    let second = persistence
        .get_or_create_registration(event_id, student_id)
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(
        persistence
            .list_registrations_for_student(student_id)
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_register_for_missing_event_fails() {
    let mut persistence = create_test_persistence();
    let student_id = create_test_student(&mut persistence, "Alice", "alice@campus.test");

    assert!(persistence.get_or_create_registration(99, student_id).is_err());
}

#[test]
fn test_list_registrations_for_student() {
    let mut persistence = create_test_persistence();
    let admin_id = create_test_admin(&mut persistence);
    let first_event = create_test_event(&mut persistence, admin_id, "First");
    let second_event = create_test_event(&mut persistence, admin_id, "Second");
    let alice = create_test_student(&mut persistence, "Alice", "alice@campus.test");
    let bob = create_test_student(&mut persistence, "Bob", "bob@campus.test");

    let attended = persistence
        .get_or_create_registration(first_event, alice)
        .unwrap();
    persistence
        .get_or_create_registration(second_event, alice)
        .unwrap();
    persistence
        .get_or_create_registration(second_event, bob)
        .unwrap();
    persistence
        .upsert_attendance(attended.registration_id, true)
        .unwrap();

    let registrations = persistence.list_registrations_for_student(alice).unwrap();

    assert_eq!(registrations.len(), 2);
    assert_eq!(registrations[0].event_title, "First");
    assert!(registrations[0].attended);
    assert_eq!(registrations[1].event_title, "Second");
    assert!(!registrations[1].attended);
}

#[test]
fn test_absent_attendance_is_not_attended() {
    let mut persistence = create_test_persistence();
    let admin_id = create_test_admin(&mut persistence);
    let event_id = create_test_event(&mut persistence, admin_id, "Fest");
    let alice = create_test_student(&mut persistence, "Alice", "alice@campus.test");

    let registration = persistence
        .get_or_create_registration(event_id, alice)
        .unwrap();
    persistence
        .upsert_attendance(registration.registration_id, false)
        .unwrap();

    let registrations = persistence.list_registrations_for_student(alice).unwrap();
    assert!(!registrations[0].attended);
}

#[test]
fn test_student_with_no_registrations_gets_empty_list() {
    let mut persistence = create_test_persistence();
    let alice = create_test_student(&mut persistence, "Alice", "alice@campus.test");

    assert!(
        persistence
            .list_registrations_for_student(alice)
            .unwrap()
            .is_empty()
    );
}
