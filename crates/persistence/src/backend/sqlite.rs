// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` connection setup.
//!
//! Opening a connection applies the connection PRAGMAs, runs the embedded
//! migrations and checks that cascading deletes will actually fire.

use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, warn};

use crate::error::PersistenceError;

/// Schema migrations, embedded at compile time.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Milliseconds a writer waits on a locked database before failing.
const BUSY_TIMEOUT_MS: u32 = 5_000;

/// Journal mode requested for a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalMode {
    /// Whatever `SQLite` picks (`memory` for in-memory databases).
    Default,
    /// Write-ahead logging, for file databases.
    Wal,
}

#[derive(QueryableByName)]
struct ForeignKeysPragma {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

#[derive(QueryableByName)]
struct JournalModePragma {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}

/// Opens a connection and brings it to the current schema.
///
/// # Errors
///
/// Returns an error if the connection cannot be established, a PRAGMA
/// fails, a migration fails, or foreign keys end up disabled.
pub fn open_connection(
    database_url: &str,
    journal_mode: JournalMode,
) -> Result<SqliteConnection, PersistenceError> {
    info!(database_url, ?journal_mode, "Opening SQLite database");

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)?;

    apply_pragmas(&mut conn, journal_mode)?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;
    info!(applied = applied.len(), "Migrations up to date");

    verify_foreign_key_enforcement(&mut conn)?;

    Ok(conn)
}

fn apply_pragmas(
    conn: &mut SqliteConnection,
    journal_mode: JournalMode,
) -> Result<(), PersistenceError> {
    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;
    diesel::sql_query(format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS}"))
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;

    if journal_mode == JournalMode::Wal {
        let mode: String = diesel::sql_query("PRAGMA journal_mode = WAL")
            .get_result::<JournalModePragma>(conn)
            .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?
            .journal_mode;
        if mode.eq_ignore_ascii_case("wal") {
            debug!("WAL journal mode enabled");
        } else {
            warn!(mode, "SQLite refused WAL journal mode");
        }
    }

    Ok(())
}

/// Verifies that foreign key enforcement is enabled.
///
/// # Errors
///
/// Returns an error if foreign key enforcement is not enabled.
pub fn verify_foreign_key_enforcement(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let enabled: bool = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<ForeignKeysPragma>(conn)?
        .foreign_keys
        != 0;

    if !enabled {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }

    Ok(())
}
