// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::data_models::NewEvent;
use crate::diesel_schema::events;
use crate::error::PersistenceError;
use crate::mutations::format_timestamp;

/// Creates a new event.
///
/// # Errors
///
/// Returns an error if the creator does not exist or the insert fails.
pub fn create_event(conn: &mut SqliteConnection, event: &NewEvent) -> Result<i64, PersistenceError> {
    info!(
        "Creating event '{}' ({}) for creator ID: {}",
        event.title, event.event_type, event.created_by
    );

    let start: String = format_timestamp(event.start_datetime)?;
    let end: String = format_timestamp(event.end_datetime)?;

    let event_id: i64 = diesel::insert_into(events::table)
        .values((
            events::title.eq(&event.title),
            events::description.eq(event.description.as_deref()),
            events::event_type.eq(event.event_type.as_str()),
            events::start_datetime.eq(&start),
            events::end_datetime.eq(&end),
            events::location.eq(event.location.as_deref()),
            events::capacity.eq(event.capacity),
            events::created_by.eq(event.created_by),
        ))
        .returning(events::event_id)
        .get_result(conn)?;

    info!(event_id, "Event created successfully");

    Ok(event_id)
}

/// Deletes an event together with its registrations, attendance and feedback.
///
/// # Errors
///
/// Returns `NotFound` if no such event exists.
pub fn delete_event(conn: &mut SqliteConnection, event_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting event ID: {}", event_id);

    let deleted: usize =
        diesel::delete(events::table.filter(events::event_id.eq(event_id))).execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Event with ID {event_id} not found"
        )));
    }

    Ok(())
}
