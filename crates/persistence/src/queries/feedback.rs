// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::FeedbackData;
use crate::diesel_schema::feedback;
use crate::error::PersistenceError;

/// Diesel Queryable struct for feedback rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = feedback)]
struct FeedbackRow {
    feedback_id: i64,
    registration_id: i64,
    rating: i32,
    comment: Option<String>,
    submitted_at: String,
}

/// Retrieves the feedback submitted for a registration.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no feedback was submitted.
pub fn get_feedback_for_registration(
    conn: &mut SqliteConnection,
    registration_id: i64,
) -> Result<Option<FeedbackData>, PersistenceError> {
    let row: Option<FeedbackRow> = feedback::table
        .filter(feedback::registration_id.eq(registration_id))
        .select(FeedbackRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(|row| FeedbackData {
        feedback_id: row.feedback_id,
        registration_id: row.registration_id,
        rating: row.rating,
        comment: row.comment,
        submitted_at: row.submitted_at,
    }))
}
