// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User mutations.

use campus_events_domain::Role;
use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::diesel_schema::users;
use crate::error::PersistenceError;

/// Creates a new user.
///
/// The password is hashed with bcrypt at the given cost before storage.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The display name
/// * `email` - The login email, unique across users
/// * `password` - The plain-text password (will be hashed)
/// * `role` - The user's role
/// * `password_cost` - The bcrypt cost factor
///
/// # Errors
///
/// Returns `UniqueViolation` if the email is already taken, or another
/// error if hashing or the insert fails.
pub fn create_user(
    conn: &mut SqliteConnection,
    name: &str,
    email: &str,
    password: &str,
    role: Role,
    password_cost: u32,
) -> Result<i64, PersistenceError> {
    info!("Creating user with email: {}, role: {}", email, role);

    let password_hash: String = bcrypt::hash(password, password_cost)?;

    let user_id: i64 = diesel::insert_into(users::table)
        .values((
            users::name.eq(name),
            users::email.eq(email),
            users::password_hash.eq(&password_hash),
            users::role.eq(role.as_str()),
        ))
        .returning(users::user_id)
        .get_result(conn)?;

    info!(user_id, "User created successfully");

    Ok(user_id)
}

/// Deletes a user.
///
/// Everything the user owns (events, registrations and tokens) is removed
/// by cascade.
///
/// # Errors
///
/// Returns `NotFound` if no such user exists.
pub fn delete_user(conn: &mut SqliteConnection, user_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting user ID: {}", user_id);

    let deleted: usize =
        diesel::delete(users::table.filter(users::user_id.eq(user_id))).execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!(
            "User with ID {user_id} not found"
        )));
    }

    Ok(())
}
