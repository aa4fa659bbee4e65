// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Token mutations.
//!
//! A user holds at most one token. Logging in again replaces it.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use crate::data_models::TokenData;
use crate::diesel_schema::user_tokens;
use crate::error::PersistenceError;
use crate::mutations::now_timestamp;
use crate::queries::tokens::get_token_for_user;

/// Stores `token` as the user's token, replacing any previous one.
///
/// # Errors
///
/// Returns an error if the user does not exist or the database operation
/// fails.
pub fn issue_or_rotate_token(
    conn: &mut SqliteConnection,
    user_id: i64,
    token: &str,
) -> Result<TokenData, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        let created_at: String = now_timestamp()?;

        if get_token_for_user(conn, user_id)?.is_some() {
            diesel::update(user_tokens::table.filter(user_tokens::user_id.eq(user_id)))
                .set((
                    user_tokens::token.eq(token),
                    user_tokens::created_at.eq(&created_at),
                ))
                .execute(conn)?;
            info!(user_id, "Token rotated");
        } else {
            diesel::insert_into(user_tokens::table)
                .values((
                    user_tokens::user_id.eq(user_id),
                    user_tokens::token.eq(token),
                    user_tokens::created_at.eq(&created_at),
                ))
                .execute(conn)?;
            info!(user_id, "Token issued");
        }

        get_token_for_user(conn, user_id)?.ok_or_else(|| {
            PersistenceError::NotFound(format!("Token for user {user_id} not found"))
        })
    })
}

/// Deletes a token.
///
/// Returns `false` if no such token existed.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn delete_token(conn: &mut SqliteConnection, token: &str) -> Result<bool, PersistenceError> {
    let deleted: usize =
        diesel::delete(user_tokens::table.filter(user_tokens::token.eq(token))).execute(conn)?;

    debug!(deleted, "Token delete executed");

    Ok(deleted > 0)
}
