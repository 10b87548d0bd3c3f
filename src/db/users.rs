use anyhow::Result;
use rusqlite::params;

use super::Database;

impl Database {
    /// Look up a user id by name, creating the user on first use.
    pub fn ensure_user(&self, name: &str) -> Result<i64> {
        self.conn.execute(
            "INSERT OR IGNORE INTO users (name) VALUES (?1)",
            params![name],
        )?;
        let id = self.conn.query_row(
            "SELECT id FROM users WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )?;
        Ok(id)
    }
}
