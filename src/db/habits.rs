use anyhow::Result;
use rusqlite::{OptionalExtension, params};

use crate::models::habit::{Habit, HabitWithCount};

use super::Database;

impl Database {
    /// Create a habit. Fails if the user already has one with the same name.
    pub fn insert_habit(&self, user_id: i64, name: &str, category: Option<&str>) -> Result<Habit> {
        if self.get_habit_by_name(user_id, name)?.is_some() {
            anyhow::bail!("habit '{}' already exists", name);
        }
        self.conn.execute(
            "INSERT INTO habits (user_id, name, category) VALUES (?1, ?2, ?3)",
            params![user_id, name, category],
        )?;
        let id = self.conn.last_insert_rowid();
        Ok(Habit {
            id,
            name: name.to_string(),
            category: category.map(String::from),
        })
    }

    pub fn get_habit(&self, user_id: i64, id: i64) -> Result<Option<Habit>> {
        let habit = self
            .conn
            .query_row(
                "SELECT id, name, category FROM habits WHERE id = ?1 AND user_id = ?2",
                params![id, user_id],
                |row| {
                    Ok(Habit {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        category: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(habit)
    }

    pub fn get_habit_by_name(&self, user_id: i64, name: &str) -> Result<Option<Habit>> {
        let habit = self
            .conn
            .query_row(
                "SELECT id, name, category FROM habits WHERE user_id = ?1 AND name = ?2",
                params![user_id, name],
                |row| {
                    Ok(Habit {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        category: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(habit)
    }

    /// All habits for a user with their log counts, ordered by id.
    pub fn list_habits(&self, user_id: i64) -> Result<Vec<HabitWithCount>> {
        let mut stmt = self.conn.prepare(
            "SELECT h.id, h.name, h.category, COUNT(hl.id)
             FROM habits AS h
             LEFT JOIN habit_logs AS hl ON h.id = hl.habit_id
             WHERE h.user_id = ?1
             GROUP BY h.id, h.name, h.category
             ORDER BY h.id",
        )?;
        let rows = stmt.query_map(params![user_id], |row| {
            Ok(HabitWithCount {
                id: row.get(0)?,
                name: row.get(1)?,
                category: row.get(2)?,
                log_count: row.get(3)?,
            })
        })?;

        let mut habits = Vec::new();
        for row in rows {
            habits.push(row?);
        }
        Ok(habits)
    }

    /// Resolve a habit from a CLI argument, which may be a numeric id or a
    /// name.
    pub fn find_habit(&self, user_id: i64, key: &str) -> Result<Habit> {
        let habit = if let Ok(id) = key.parse::<i64>() {
            self.get_habit(user_id, id)?
        } else {
            self.get_habit_by_name(user_id, key)?
        };
        habit.ok_or_else(|| anyhow::anyhow!("habit not found: {}", key))
    }

    /// Delete a habit and all of its logs. Returns false if the habit
    /// did not exist.
    pub fn remove_habit(&mut self, user_id: i64, id: i64) -> Result<bool> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "DELETE FROM habit_logs WHERE habit_id = ?1 AND user_id = ?2",
            params![id, user_id],
        )?;
        let count = tx.execute(
            "DELETE FROM habits WHERE id = ?1 AND user_id = ?2",
            params![id, user_id],
        )?;
        tx.commit()?;
        Ok(count > 0)
    }
}
