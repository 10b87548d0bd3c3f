#![allow(dead_code)]

use chrono::NaiveDate;
use habitual::db::Database;
use tempfile::TempDir;

/// Create a temporary database for testing.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, db)
}

/// Create a user and a habit, returning (user_id, habit_id).
pub fn setup_habit(db: &Database, habit_name: &str) -> (i64, i64) {
    let user_id = db.ensure_user("tester").unwrap();
    let habit = db.insert_habit(user_id, habit_name, None).unwrap();
    (user_id, habit.id)
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}
