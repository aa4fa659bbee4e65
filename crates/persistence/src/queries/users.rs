// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::UserData;
use crate::diesel_schema::users;
use crate::error::PersistenceError;

/// Diesel Queryable struct for user rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = users)]
pub(crate) struct UserRow {
    user_id: i64,
    name: String,
    email: String,
    password_hash: String,
    role: String,
}

impl TryFrom<UserRow> for UserData {
    type Error = PersistenceError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: row.user_id,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            role: row.role.parse()?,
        })
    }
}

/// Retrieves a user by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the user is not found.
pub fn get_user_by_id(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Option<UserData>, PersistenceError> {
    debug!("Looking up user by ID: {}", user_id);

    users::table
        .filter(users::user_id.eq(user_id))
        .select(UserRow::as_select())
        .first(conn)
        .optional()?
        .map(UserData::try_from)
        .transpose()
}

/// Retrieves a user by exact email address.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the user is not found.
pub fn get_user_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> Result<Option<UserData>, PersistenceError> {
    debug!("Looking up user by email: {}", email);

    users::table
        .filter(users::email.eq(email))
        .select(UserRow::as_select())
        .first(conn)
        .optional()?
        .map(UserData::try_from)
        .transpose()
}

/// Returns the user whose email and password both match.
///
/// An unknown email and a wrong password are indistinguishable to the
/// caller: both yield `Ok(None)`.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored hash is
/// malformed.
pub fn verify_credentials(
    conn: &mut SqliteConnection,
    email: &str,
    password: &str,
) -> Result<Option<UserData>, PersistenceError> {
    let Some(user) = get_user_by_email(conn, email)? else {
        debug!("No user with email {}", email);
        return Ok(None);
    };

    if bcrypt::verify(password, &user.password_hash)? {
        Ok(Some(user))
    } else {
        debug!(user_id = user.user_id, "Password mismatch");
        Ok(None)
    }
}
