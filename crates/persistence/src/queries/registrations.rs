// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Registration queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::{RegistrationData, StudentRegistrationData};
use crate::diesel_schema::{attendance, events, registrations};
use crate::error::PersistenceError;

/// Diesel Queryable struct for registration rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = registrations)]
pub(crate) struct RegistrationRow {
    registration_id: i64,
    event_id: i64,
    student_id: i64,
    registered_at: String,
    status: String,
}

impl TryFrom<RegistrationRow> for RegistrationData {
    type Error = PersistenceError;

    fn try_from(row: RegistrationRow) -> Result<Self, Self::Error> {
        Ok(Self {
            registration_id: row.registration_id,
            event_id: row.event_id,
            student_id: row.student_id,
            registered_at: row.registered_at,
            status: row.status.parse()?,
        })
    }
}

/// Retrieves a registration by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the registration is not found.
pub fn get_registration(
    conn: &mut SqliteConnection,
    registration_id: i64,
) -> Result<Option<RegistrationData>, PersistenceError> {
    debug!("Looking up registration by ID: {}", registration_id);

    registrations::table
        .filter(registrations::registration_id.eq(registration_id))
        .select(RegistrationRow::as_select())
        .first(conn)
        .optional()?
        .map(RegistrationData::try_from)
        .transpose()
}

/// Retrieves the registration of a student for an event.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the student is not registered for the event.
pub fn get_registration_for_pair(
    conn: &mut SqliteConnection,
    event_id: i64,
    student_id: i64,
) -> Result<Option<RegistrationData>, PersistenceError> {
    registrations::table
        .filter(registrations::event_id.eq(event_id))
        .filter(registrations::student_id.eq(student_id))
        .select(RegistrationRow::as_select())
        .first(conn)
        .optional()?
        .map(RegistrationData::try_from)
        .transpose()
}

/// Lists a student's registrations in ID order, joined with the event
/// title and whether attendance was marked present.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_registrations_for_student(
    conn: &mut SqliteConnection,
    student_id: i64,
) -> Result<Vec<StudentRegistrationData>, PersistenceError> {
    debug!("Listing registrations for student ID: {}", student_id);

    let rows: Vec<(RegistrationRow, String, Option<i32>)> = registrations::table
        .inner_join(events::table.on(registrations::event_id.eq(events::event_id)))
        .left_join(
            attendance::table
                .on(attendance::registration_id.eq(registrations::registration_id)),
        )
        .filter(registrations::student_id.eq(student_id))
        .order(registrations::registration_id.asc())
        .select((
            RegistrationRow::as_select(),
            events::title,
            attendance::present.nullable(),
        ))
        .load(conn)?;

    rows.into_iter()
        .map(|(row, event_title, present)| {
            let registration: RegistrationData = row.try_into()?;
            Ok(StudentRegistrationData {
                registration_id: registration.registration_id,
                event_id: registration.event_id,
                event_title,
                registered_at: registration.registered_at,
                status: registration.status,
                attended: present == Some(1),
            })
        })
        .collect()
}
