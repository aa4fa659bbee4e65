// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::AttendanceData;
use crate::diesel_schema::attendance;
use crate::error::PersistenceError;

/// Diesel Queryable struct for attendance rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = attendance)]
struct AttendanceRow {
    attendance_id: i64,
    registration_id: i64,
    present: i32,
    checked_in_at: Option<String>,
}

/// Retrieves the attendance record of a registration.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if attendance was never marked.
pub fn get_attendance_for_registration(
    conn: &mut SqliteConnection,
    registration_id: i64,
) -> Result<Option<AttendanceData>, PersistenceError> {
    let row: Option<AttendanceRow> = attendance::table
        .filter(attendance::registration_id.eq(registration_id))
        .select(AttendanceRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(|row| AttendanceData {
        attendance_id: row.attendance_id,
        registration_id: row.registration_id,
        present: row.present != 0,
        checked_in_at: row.checked_in_at,
    }))
}
