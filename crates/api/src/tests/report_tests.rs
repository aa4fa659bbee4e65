// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the admin reports.

use crate::{
    MarkAttendanceRequest, RegisterForEventRequest, event_popularity, mark_attendance,
    register_for_event, student_participation,
};

use super::helpers::{
    create_test_admin, create_test_event, create_test_student, setup_test_persistence,
};

#[test]
fn test_event_popularity_orders_by_registrations() {
    let mut persistence = setup_test_persistence();
    let admin = create_test_admin(&mut persistence);
    let alice = create_test_student(&mut persistence, "Alice");
    let bob = create_test_student(&mut persistence, "Bob");
    let small = create_test_event(&mut persistence, &admin, "Small");
    let big = create_test_event(&mut persistence, &admin, "Big");

    for student in [&alice, &bob] {
        register_for_event(
            &mut persistence,
            RegisterForEventRequest { event_id: big.id },
            student,
        )
        .unwrap();
    }

    let report = event_popularity(&mut persistence, &admin).unwrap();

    assert_eq!(report.len(), 2);
    assert_eq!((report[0].event.as_str(), report[0].registrations), ("Big", 2));
    assert_eq!(
        (report[1].event_id, report[1].registrations),
        (small.id, 0)
    );
}

#[test]
fn test_student_participation_lists_every_student() {
    let mut persistence = setup_test_persistence();
    let admin = create_test_admin(&mut persistence);
    let alice = create_test_student(&mut persistence, "Alice");
    let bob = create_test_student(&mut persistence, "Bob");
    let event = create_test_event(&mut persistence, &admin, "Fest");
    let registration = register_for_event(
        &mut persistence,
        RegisterForEventRequest { event_id: event.id },
        &alice,
    )
    .unwrap();
    mark_attendance(
        &mut persistence,
        MarkAttendanceRequest {
            registration_id: registration.registration_id,
            present: true,
        },
        &admin,
    )
    .unwrap();

    let report = student_participation(&mut persistence, &admin).unwrap();

    let rows: Vec<(i64, &str, usize)> = report
        .iter()
        .map(|r| (r.student_id, r.student.as_str(), r.attended))
        .collect();
    assert_eq!(
        rows,
        vec![(alice.user_id, "Alice", 1), (bob.user_id, "Bob", 0)]
    );
}
