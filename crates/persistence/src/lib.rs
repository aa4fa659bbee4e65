// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the campus events backend.
//!
//! This crate stores users, events, registrations, attendance, feedback and
//! authentication tokens in `SQLite` via Diesel.
//!
//! ## Layout
//!
//! - `queries`: read-only lookups and report aggregations
//! - `mutations`: inserts, upserts and deletes
//! - `backend::sqlite`: connection setup, migrations and PRAGMA handling
//! - `repository`: the `Repository` trait the API layer is written against
//!
//! ## Testing
//!
//! `Persistence::new_in_memory()` gives each caller its own shared-cache
//! in-memory database, so tests never see each other's rows. In-memory
//! databases also hash passwords at the minimum bcrypt cost.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use campus_events_domain::Role;
use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use backend::sqlite::JournalMode;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod repository;

#[cfg(test)]
mod tests;

pub use data_models::{
    AttendanceData, EventData, EventPopularityData, FeedbackData, NewEvent, RegistrationData,
    StudentParticipationData, StudentRegistrationData, TokenData, UserData,
};
pub use error::PersistenceError;
pub use repository::Repository;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// bcrypt cost for in-memory databases. 4 is the lowest cost bcrypt accepts.
const IN_MEMORY_PASSWORD_COST: u32 = 4;

/// `SQLite`-backed implementation of [`Repository`].
pub struct Persistence {
    conn: SqliteConnection,
    password_cost: u32,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_test_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection =
            backend::sqlite::open_connection(&shared_memory_url, JournalMode::Default)?;

        Ok(Self {
            conn,
            password_cost: IN_MEMORY_PASSWORD_COST,
        })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// The file is created if missing and migrated to the current schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let conn: SqliteConnection = backend::sqlite::open_connection(path_str, JournalMode::Wal)?;

        Ok(Self {
            conn,
            password_cost: bcrypt::DEFAULT_COST,
        })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }
}

impl Repository for Persistence {
    fn create_user(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<i64, PersistenceError> {
        mutations::users::create_user(
            &mut self.conn,
            name,
            email,
            password,
            role,
            self.password_cost,
        )
    }

    fn get_user_by_id(&mut self, user_id: i64) -> Result<Option<UserData>, PersistenceError> {
        queries::users::get_user_by_id(&mut self.conn, user_id)
    }

    fn get_user_by_email(&mut self, email: &str) -> Result<Option<UserData>, PersistenceError> {
        queries::users::get_user_by_email(&mut self.conn, email)
    }

    fn verify_credentials(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserData>, PersistenceError> {
        queries::users::verify_credentials(&mut self.conn, email, password)
    }

    fn delete_user(&mut self, user_id: i64) -> Result<(), PersistenceError> {
        mutations::users::delete_user(&mut self.conn, user_id)
    }

    fn create_event(&mut self, event: &NewEvent) -> Result<i64, PersistenceError> {
        mutations::events::create_event(&mut self.conn, event)
    }

    fn get_event(&mut self, event_id: i64) -> Result<Option<EventData>, PersistenceError> {
        queries::events::get_event(&mut self.conn, event_id)
    }

    fn list_events(&mut self) -> Result<Vec<EventData>, PersistenceError> {
        queries::events::list_events(&mut self.conn)
    }

    fn delete_event(&mut self, event_id: i64) -> Result<(), PersistenceError> {
        mutations::events::delete_event(&mut self.conn, event_id)
    }

    fn get_or_create_registration(
        &mut self,
        event_id: i64,
        student_id: i64,
    ) -> Result<RegistrationData, PersistenceError> {
        mutations::registrations::get_or_create_registration(&mut self.conn, event_id, student_id)
    }

    fn get_registration(
        &mut self,
        registration_id: i64,
    ) -> Result<Option<RegistrationData>, PersistenceError> {
        queries::registrations::get_registration(&mut self.conn, registration_id)
    }

    fn list_registrations_for_student(
        &mut self,
        student_id: i64,
    ) -> Result<Vec<StudentRegistrationData>, PersistenceError> {
        queries::registrations::list_registrations_for_student(&mut self.conn, student_id)
    }

    fn upsert_attendance(
        &mut self,
        registration_id: i64,
        present: bool,
    ) -> Result<AttendanceData, PersistenceError> {
        mutations::attendance::upsert_attendance(&mut self.conn, registration_id, present)
    }

    fn get_attendance_for_registration(
        &mut self,
        registration_id: i64,
    ) -> Result<Option<AttendanceData>, PersistenceError> {
        queries::attendance::get_attendance_for_registration(&mut self.conn, registration_id)
    }

    fn upsert_feedback(
        &mut self,
        registration_id: i64,
        rating: i32,
        comment: Option<&str>,
    ) -> Result<FeedbackData, PersistenceError> {
        mutations::feedback::upsert_feedback(&mut self.conn, registration_id, rating, comment)
    }

    fn get_feedback_for_registration(
        &mut self,
        registration_id: i64,
    ) -> Result<Option<FeedbackData>, PersistenceError> {
        queries::feedback::get_feedback_for_registration(&mut self.conn, registration_id)
    }

    fn issue_or_rotate_token(
        &mut self,
        user_id: i64,
        token: &str,
    ) -> Result<TokenData, PersistenceError> {
        mutations::tokens::issue_or_rotate_token(&mut self.conn, user_id, token)
    }

    fn get_user_by_token(&mut self, token: &str) -> Result<Option<UserData>, PersistenceError> {
        queries::tokens::get_user_by_token(&mut self.conn, token)
    }

    fn delete_token(&mut self, token: &str) -> Result<bool, PersistenceError> {
        mutations::tokens::delete_token(&mut self.conn, token)
    }

    fn event_popularity(&mut self) -> Result<Vec<EventPopularityData>, PersistenceError> {
        queries::reports::event_popularity(&mut self.conn)
    }

    fn student_participation(&mut self) -> Result<Vec<StudentParticipationData>, PersistenceError> {
        queries::reports::student_participation(&mut self.conn)
    }
}
