// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::data_models::FeedbackData;
use crate::diesel_schema::feedback;
use crate::error::PersistenceError;
use crate::mutations::now_timestamp;
use crate::queries::feedback::get_feedback_for_registration;

/// Stores feedback for a registration, replacing any earlier feedback.
///
/// The feedback ID is stable across updates; the submission time is
/// refreshed.
///
/// # Errors
///
/// Returns an error if the registration does not exist or the database
/// operation fails.
pub fn upsert_feedback(
    conn: &mut SqliteConnection,
    registration_id: i64,
    rating: i32,
    comment: Option<&str>,
) -> Result<FeedbackData, PersistenceError> {
    let submitted_at: String = now_timestamp()?;

    diesel::insert_into(feedback::table)
        .values((
            feedback::registration_id.eq(registration_id),
            feedback::rating.eq(rating),
            feedback::comment.eq(comment),
            feedback::submitted_at.eq(&submitted_at),
        ))
        .on_conflict(feedback::registration_id)
        .do_update()
        .set((
            feedback::rating.eq(rating),
            feedback::comment.eq(comment),
            feedback::submitted_at.eq(&submitted_at),
        ))
        .execute(conn)?;

    info!(registration_id, rating, "Feedback stored");

    get_feedback_for_registration(conn, registration_id)?.ok_or_else(|| {
        PersistenceError::NotFound(format!(
            "Feedback for registration {registration_id} not found"
        ))
    })
}
