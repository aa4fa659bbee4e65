// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::data_models::AttendanceData;
use crate::diesel_schema::attendance;
use crate::error::PersistenceError;
use crate::mutations::now_timestamp;
use crate::queries::attendance::get_attendance_for_registration;

/// Records whether the student of a registration attended.
///
/// There is at most one attendance record per registration; a repeated
/// call overwrites `present`. A check-in time is kept while the record
/// stays present and cleared when it is marked absent.
///
/// # Errors
///
/// Returns an error if the registration does not exist or the database
/// operation fails.
pub fn upsert_attendance(
    conn: &mut SqliteConnection,
    registration_id: i64,
    present: bool,
) -> Result<AttendanceData, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        diesel::insert_or_ignore_into(attendance::table)
            .values(attendance::registration_id.eq(registration_id))
            .execute(conn)?;

        let existing: Option<AttendanceData> =
            get_attendance_for_registration(conn, registration_id)?;

        let checked_in_at: Option<String> = if present {
            match existing {
                Some(AttendanceData {
                    present: true,
                    checked_in_at: Some(previous),
                    ..
                }) => Some(previous),
                _ => Some(now_timestamp()?),
            }
        } else {
            None
        };

        diesel::update(attendance::table.filter(attendance::registration_id.eq(registration_id)))
            .set((
                attendance::present.eq(i32::from(present)),
                attendance::checked_in_at.eq(checked_in_at),
            ))
            .execute(conn)?;

        info!(registration_id, present, "Attendance recorded");

        get_attendance_for_registration(conn, registration_id)?.ok_or_else(|| {
            PersistenceError::NotFound(format!(
                "Attendance for registration {registration_id} not found"
            ))
        })
    })
}
