// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event queries.
//!
//! Every event is returned joined with its creator so callers can show the
//! creator's display name instead of the raw user reference.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::EventData;
use crate::diesel_schema::{events, users};
use crate::error::PersistenceError;

/// Diesel Queryable struct for event rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = events)]
pub(crate) struct EventRow {
    event_id: i64,
    title: String,
    description: Option<String>,
    event_type: String,
    start_datetime: String,
    end_datetime: String,
    location: Option<String>,
    capacity: Option<i32>,
    created_by: i64,
}

fn to_event_data((row, creator_name): (EventRow, String)) -> Result<EventData, PersistenceError> {
    Ok(EventData {
        event_id: row.event_id,
        title: row.title,
        description: row.description,
        event_type: row.event_type.parse()?,
        start_datetime: row.start_datetime,
        end_datetime: row.end_datetime,
        location: row.location,
        capacity: row.capacity,
        created_by: row.created_by,
        creator_name,
    })
}

/// Retrieves an event by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the event is not found.
pub fn get_event(
    conn: &mut SqliteConnection,
    event_id: i64,
) -> Result<Option<EventData>, PersistenceError> {
    debug!("Looking up event by ID: {}", event_id);

    events::table
        .inner_join(users::table.on(events::created_by.eq(users::user_id)))
        .filter(events::event_id.eq(event_id))
        .select((EventRow::as_select(), users::name))
        .first::<(EventRow, String)>(conn)
        .optional()?
        .map(to_event_data)
        .transpose()
}

/// Lists every event in ID order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_events(conn: &mut SqliteConnection) -> Result<Vec<EventData>, PersistenceError> {
    debug!("Listing all events");

    events::table
        .inner_join(users::table.on(events::created_by.eq(users::user_id)))
        .order(events::event_id.asc())
        .select((EventRow::as_select(), users::name))
        .load::<(EventRow, String)>(conn)?
        .into_iter()
        .map(to_event_data)
        .collect()
}
