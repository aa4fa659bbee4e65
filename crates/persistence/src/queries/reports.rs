// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Aggregation queries backing the admin reports.
//!
//! Counts are grouped in SQL and merged with the full entity list in Rust
//! so that events and students with no matching rows report zero.

use std::collections::HashMap;

use campus_events_domain::Role;
use diesel::prelude::*;
use diesel::SqliteConnection;
use num_traits::ToPrimitive;

use crate::data_models::{EventPopularityData, StudentParticipationData};
use crate::diesel_schema::{attendance, events, registrations, users};
use crate::error::PersistenceError;

fn count_to_usize(count: i64) -> Result<usize, PersistenceError> {
    count
        .to_usize()
        .ok_or_else(|| PersistenceError::DatabaseError("Count conversion failed".to_string()))
}

/// Counts registrations per event, regardless of registration status.
///
/// Sorted by count descending; ties keep event ID order.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or if count conversion fails.
pub fn event_popularity(
    conn: &mut SqliteConnection,
) -> Result<Vec<EventPopularityData>, PersistenceError> {
    let all_events: Vec<(i64, String)> = events::table
        .order(events::event_id.asc())
        .select((events::event_id, events::title))
        .load(conn)?;

    let counts: HashMap<i64, i64> = registrations::table
        .group_by(registrations::event_id)
        .select((
            registrations::event_id,
            diesel::dsl::count(registrations::registration_id),
        ))
        .load::<(i64, i64)>(conn)?
        .into_iter()
        .collect();

    let mut result: Vec<EventPopularityData> = Vec::with_capacity(all_events.len());
    for (event_id, title) in all_events {
        let registrations: usize = count_to_usize(counts.get(&event_id).copied().unwrap_or(0))?;
        result.push(EventPopularityData {
            event_id,
            title,
            registrations,
        });
    }

    // sort_by is stable, so equal counts stay in event ID order
    result.sort_by(|a, b| b.registrations.cmp(&a.registrations));

    Ok(result)
}

/// Counts, for every student, the registrations whose attendance is
/// marked present. Students are returned in user ID order.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or if count conversion fails.
pub fn student_participation(
    conn: &mut SqliteConnection,
) -> Result<Vec<StudentParticipationData>, PersistenceError> {
    let students: Vec<(i64, String)> = users::table
        .filter(users::role.eq(Role::Student.as_str()))
        .order(users::user_id.asc())
        .select((users::user_id, users::name))
        .load(conn)?;

    let counts: HashMap<i64, i64> = registrations::table
        .inner_join(
            attendance::table.on(attendance::registration_id.eq(registrations::registration_id)),
        )
        .filter(attendance::present.eq(1))
        .group_by(registrations::student_id)
        .select((
            registrations::student_id,
            diesel::dsl::count(attendance::attendance_id),
        ))
        .load::<(i64, i64)>(conn)?
        .into_iter()
        .collect();

    students
        .into_iter()
        .map(|(user_id, name)| {
            Ok(StudentParticipationData {
                user_id,
                name,
                attended: count_to_usize(counts.get(&user_id).copied().unwrap_or(0))?,
            })
        })
        .collect()
}
