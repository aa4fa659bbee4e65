// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The storage interface consumed by the API layer.
//!
//! Handlers are written against this trait rather than a concrete
//! connection so the storage engine can be swapped or faked.

use campus_events_domain::Role;

use crate::data_models::{
    AttendanceData, EventData, EventPopularityData, FeedbackData, NewEvent, RegistrationData,
    StudentParticipationData, StudentRegistrationData, TokenData, UserData,
};
use crate::error::PersistenceError;

/// Storage operations for users, events, registrations, attendance,
/// feedback and tokens.
///
/// Lookups return `Ok(None)` for missing rows. Deletes return
/// `PersistenceError::NotFound` when nothing was deleted.
pub trait Repository {
    // ========================================================================
    // Users
    // ========================================================================

    /// Creates a user, hashing `password`. Returns the new user ID.
    ///
    /// # Errors
    ///
    /// Returns `UniqueViolation` if the email is already taken.
    fn create_user(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<i64, PersistenceError>;

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    fn get_user_by_id(&mut self, user_id: i64) -> Result<Option<UserData>, PersistenceError>;

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    fn get_user_by_email(&mut self, email: &str) -> Result<Option<UserData>, PersistenceError>;

    /// Returns the user matching both email and password.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    fn verify_credentials(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserData>, PersistenceError>;

    /// # Errors
    ///
    /// Returns `NotFound` if the user does not exist.
    fn delete_user(&mut self, user_id: i64) -> Result<(), PersistenceError>;

    // ========================================================================
    // Events
    // ========================================================================

    /// # Errors
    ///
    /// Returns an error if the creator does not exist or the insert fails.
    fn create_event(&mut self, event: &NewEvent) -> Result<i64, PersistenceError>;

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    fn get_event(&mut self, event_id: i64) -> Result<Option<EventData>, PersistenceError>;

    /// Lists all events in ID order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    fn list_events(&mut self) -> Result<Vec<EventData>, PersistenceError>;

    /// # Errors
    ///
    /// Returns `NotFound` if the event does not exist.
    fn delete_event(&mut self, event_id: i64) -> Result<(), PersistenceError>;

    // ========================================================================
    // Registrations
    // ========================================================================

    /// Returns the registration for the pair, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the event or student does not exist.
    fn get_or_create_registration(
        &mut self,
        event_id: i64,
        student_id: i64,
    ) -> Result<RegistrationData, PersistenceError>;

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    fn get_registration(
        &mut self,
        registration_id: i64,
    ) -> Result<Option<RegistrationData>, PersistenceError>;

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    fn list_registrations_for_student(
        &mut self,
        student_id: i64,
    ) -> Result<Vec<StudentRegistrationData>, PersistenceError>;

    // ========================================================================
    // Attendance & Feedback
    // ========================================================================

    /// # Errors
    ///
    /// Returns an error if the registration does not exist.
    fn upsert_attendance(
        &mut self,
        registration_id: i64,
        present: bool,
    ) -> Result<AttendanceData, PersistenceError>;

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    fn get_attendance_for_registration(
        &mut self,
        registration_id: i64,
    ) -> Result<Option<AttendanceData>, PersistenceError>;

    /// # Errors
    ///
    /// Returns an error if the registration does not exist.
    fn upsert_feedback(
        &mut self,
        registration_id: i64,
        rating: i32,
        comment: Option<&str>,
    ) -> Result<FeedbackData, PersistenceError>;

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    fn get_feedback_for_registration(
        &mut self,
        registration_id: i64,
    ) -> Result<Option<FeedbackData>, PersistenceError>;

    // ========================================================================
    // Tokens
    // ========================================================================

    /// # Errors
    ///
    /// Returns an error if the user does not exist.
    fn issue_or_rotate_token(
        &mut self,
        user_id: i64,
        token: &str,
    ) -> Result<TokenData, PersistenceError>;

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    fn get_user_by_token(&mut self, token: &str) -> Result<Option<UserData>, PersistenceError>;

    /// Returns `false` if the token did not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    fn delete_token(&mut self, token: &str) -> Result<bool, PersistenceError>;

    // ========================================================================
    // Reports
    // ========================================================================

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    fn event_popularity(&mut self) -> Result<Vec<EventPopularityData>, PersistenceError>;

    /// # Errors
    ///
    /// Returns an error if the database query fails.
    fn student_participation(&mut self) -> Result<Vec<StudentParticipationData>, PersistenceError>;
}
