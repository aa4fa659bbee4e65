// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end flow across every handler.

use crate::{
    MarkAttendanceRequest, RegisterForEventRequest, SubmitFeedbackRequest, event_popularity,
    list_events, mark_attendance, my_registrations, register_for_event, student_participation,
    submit_feedback,
};

use super::helpers::{
    create_test_admin, create_test_event, create_test_student, setup_test_persistence,
};

#[test]
fn test_full_event_lifecycle() {
    let mut persistence = setup_test_persistence();
    let admin = create_test_admin(&mut persistence);
    let student = create_test_student(&mut persistence, "Sam");

    let event = create_test_event(&mut persistence, &admin, "Campus Hackathon");
    assert_eq!(event.capacity, Some(10));
    assert_eq!(list_events(&mut persistence).unwrap().len(), 1);

    let registration = register_for_event(
        &mut persistence,
        RegisterForEventRequest { event_id: event.id },
        &student,
    )
    .unwrap();
    assert_eq!(registration.status, "registered");

    mark_attendance(
        &mut persistence,
        MarkAttendanceRequest {
            registration_id: registration.registration_id,
            present: true,
        },
        &admin,
    )
    .unwrap();

    let mine = my_registrations(&mut persistence, &student).unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].registration_id, registration.registration_id);
    assert!(mine[0].attendance);

    let feedback = submit_feedback(
        &mut persistence,
        &SubmitFeedbackRequest {
            registration_id: registration.registration_id,
            rating: 4,
            comment: Some(String::from("Great mentors")),
        },
        &student,
    )
    .unwrap();
    assert_eq!(feedback.rating, 4);

    let popularity = event_popularity(&mut persistence, &admin).unwrap();
    assert_eq!(popularity[0].event, "Campus Hackathon");
    assert_eq!(popularity[0].registrations, 1);

    let participation = student_participation(&mut persistence, &admin).unwrap();
    assert_eq!(participation.len(), 1);
    assert_eq!(participation[0].student, "Sam");
    assert_eq!(participation[0].attended, 1);
}
