// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Every other persistence test also exercises connection setup, migrations
//! and foreign key enforcement through `Persistence::new_in_memory()`.

use campus_events_domain::Role;
use diesel::RunQueryDsl;
use diesel::sql_types::Text;

use crate::{Persistence, PersistenceError, Repository};

#[derive(diesel::QueryableByName)]
struct JournalModeRow {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_key_enforcement_is_enabled() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1 = Persistence::new_in_memory().unwrap();
    let mut db2 = Persistence::new_in_memory().unwrap();

    db1.create_user("Alice", "alice@campus.test", "pw", Role::Student)
        .unwrap();

    assert!(db1.get_user_by_email("alice@campus.test").unwrap().is_some());
    assert!(
        db2.get_user_by_email("alice@campus.test").unwrap().is_none(),
        "db2 should not see rows written to db1"
    );
}

#[test]
fn test_migrations_applied_on_initialization() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    // If migrations didn't run, none of these tables would exist
    assert!(persistence.list_events().is_ok());
    assert!(persistence.event_popularity().is_ok());
    assert!(persistence.student_participation().is_ok());
}

#[test]
fn test_file_database_is_created_and_reopened() {
    let path = std::env::temp_dir().join(format!(
        "campus_events_init_test_{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let mut persistence = Persistence::new_with_file(&path).unwrap();
        persistence
            .create_user("Alice", "alice@campus.test", "pw", Role::Student)
            .unwrap();
    }

    let mut reopened = Persistence::new_with_file(&path).unwrap();
    let user = reopened
        .verify_credentials("alice@campus.test", "pw")
        .unwrap();
    assert!(user.is_some());

    drop(reopened);
    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(path.with_extension("db-wal"));
    let _ = std::fs::remove_file(path.with_extension("db-shm"));
}

#[test]
fn test_in_memory_database_hashes_at_lowest_cost() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence
        .create_user("Alice", "alice@campus.test", "pw", Role::Student)
        .unwrap();

    let user = persistence
        .get_user_by_email("alice@campus.test")
        .unwrap()
        .unwrap();

    assert!(user.password_hash.starts_with("$2b$04$"));
    assert!(bcrypt::verify("pw", &user.password_hash).unwrap());
}

#[test]
fn test_file_database_uses_wal_journal() {
    let path = std::env::temp_dir().join(format!(
        "campus_events_wal_test_{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let mut persistence = Persistence::new_with_file(&path).unwrap();
    let row: JournalModeRow = diesel::sql_query("PRAGMA journal_mode")
        .get_result(&mut persistence.conn)
        .unwrap();
    assert_eq!(row.journal_mode.to_lowercase(), "wal");
    assert!(persistence.verify_foreign_key_enforcement().is_ok());

    drop(persistence);
    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(path.with_extension("db-wal"));
    let _ = std::fs::remove_file(path.with_extension("db-shm"));
}
