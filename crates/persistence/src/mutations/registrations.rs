// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Registration mutations.

use campus_events_domain::RegistrationStatus;
use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use crate::data_models::RegistrationData;
use crate::diesel_schema::registrations;
use crate::error::PersistenceError;
use crate::mutations::now_timestamp;
use crate::queries::registrations::get_registration_for_pair;

/// Returns the registration of a student for an event, creating it first
/// if none exists.
///
/// Repeated calls return the same registration. The `(event, student)`
/// uniqueness constraint makes the insert a no-op on repeats.
///
/// # Errors
///
/// Returns an error if the event or student does not exist or the database
/// operation fails.
pub fn get_or_create_registration(
    conn: &mut SqliteConnection,
    event_id: i64,
    student_id: i64,
) -> Result<RegistrationData, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        let registered_at: String = now_timestamp()?;

        let inserted: usize = diesel::insert_or_ignore_into(registrations::table)
            .values((
                registrations::event_id.eq(event_id),
                registrations::student_id.eq(student_id),
                registrations::registered_at.eq(&registered_at),
                registrations::status.eq(RegistrationStatus::Registered.as_str()),
            ))
            .execute(conn)?;

        if inserted == 0 {
            debug!(event_id, student_id, "Student already registered");
        } else {
            info!(event_id, student_id, "Registration created");
        }

        get_registration_for_pair(conn, event_id, student_id)?.ok_or_else(|| {
            PersistenceError::NotFound(format!(
                "Registration for event {event_id} and student {student_id} not found"
            ))
        })
    })
}
