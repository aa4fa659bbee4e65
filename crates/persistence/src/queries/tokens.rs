// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Token queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::{TokenData, UserData};
use crate::diesel_schema::{user_tokens, users};
use crate::error::PersistenceError;
use crate::queries::users::UserRow;

/// Diesel Queryable struct for token rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = user_tokens)]
struct TokenRow {
    token_id: i64,
    user_id: i64,
    token: String,
    created_at: String,
}

/// Retrieves the live token of a user.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the user has no token.
pub fn get_token_for_user(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Option<TokenData>, PersistenceError> {
    let row: Option<TokenRow> = user_tokens::table
        .filter(user_tokens::user_id.eq(user_id))
        .select(TokenRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(|row| TokenData {
        token_id: row.token_id,
        user_id: row.user_id,
        token: row.token,
        created_at: row.created_at,
    }))
}

/// Resolves a token to the user that owns it.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no such token exists.
pub fn get_user_by_token(
    conn: &mut SqliteConnection,
    token: &str,
) -> Result<Option<UserData>, PersistenceError> {
    debug!("Resolving token");

    user_tokens::table
        .inner_join(users::table.on(user_tokens::user_id.eq(users::user_id)))
        .filter(user_tokens::token.eq(token))
        .select(UserRow::as_select())
        .first::<UserRow>(conn)
        .optional()?
        .map(UserData::try_from)
        .transpose()
}
