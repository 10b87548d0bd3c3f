use anyhow::Result;
use rusqlite::Connection;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS users (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS habits (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id   INTEGER NOT NULL,
            name      TEXT NOT NULL,
            category  TEXT
        );
        CREATE UNIQUE INDEX IF NOT EXISTS idx_habits_user_name ON habits(user_id, name);

        CREATE TABLE IF NOT EXISTS habit_logs (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            habit_id  INTEGER NOT NULL,
            user_id   INTEGER NOT NULL,
            date      TEXT NOT NULL,
            value     INTEGER NOT NULL,
            note      TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_logs_habit_user_date ON habit_logs(habit_id, user_id, date);",
    )?;
    Ok(())
}
