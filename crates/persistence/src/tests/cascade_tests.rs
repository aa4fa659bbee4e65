// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for cascading deletes.

use super::{create_test_admin, create_test_event, create_test_persistence, create_test_student};
use crate::Repository;

#[test]
fn test_deleting_event_removes_dependents() {
    let mut persistence = create_test_persistence();
    let admin_id = create_test_admin(&mut persistence);
    let event_id = create_test_event(&mut persistence, admin_id, "Cascade");
    let alice = create_test_student(&mut persistence, "Alice", "alice@campus.test");

    let registration = persistence
        .get_or_create_registration(event_id, alice)
        .unwrap();
    persistence
        .upsert_attendance(registration.registration_id, true)
        .unwrap();
    persistence
        .upsert_feedback(registration.registration_id, 4, Some("good"))
        .unwrap();

    persistence.delete_event(event_id).unwrap();

    assert!(
        persistence
            .get_registration(registration.registration_id)
            .unwrap()
            .is_none()
    );
    assert!(
        persistence
            .get_attendance_for_registration(registration.registration_id)
            .unwrap()
            .is_none()
    );
    assert!(
        persistence
            .get_feedback_for_registration(registration.registration_id)
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_deleting_user_removes_token_and_registrations() {
    let mut persistence = create_test_persistence();
    let admin_id = create_test_admin(&mut persistence);
    let event_id = create_test_event(&mut persistence, admin_id, "Cascade");
    let alice = create_test_student(&mut persistence, "Alice", "alice@campus.test");

    let registration = persistence
        .get_or_create_registration(event_id, alice)
        .unwrap();
    persistence.issue_or_rotate_token(alice, "alice-token").unwrap();

    persistence.delete_user(alice).unwrap();

    assert!(persistence.get_user_by_token("alice-token").unwrap().is_none());
    assert!(
        persistence
            .get_registration(registration.registration_id)
            .unwrap()
            .is_none()
    );
    assert_eq!(persistence.event_popularity().unwrap()[0].registrations, 0);
}

#[test]
fn test_deleting_admin_removes_their_events() {
    let mut persistence = create_test_persistence();
    let admin_id = create_test_admin(&mut persistence);
    create_test_event(&mut persistence, admin_id, "Owned");

    persistence.delete_user(admin_id).unwrap();

    assert!(persistence.list_events().unwrap().is_empty());
}
