use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::params;
use std::collections::BTreeMap;

use crate::core::stats::LogStore;
use crate::models::log::HabitLog;

use super::Database;

struct LogRow {
    id: i64,
    habit_id: i64,
    user_id: i64,
    date: String,
    value: i64,
    note: Option<String>,
}

// Dates are stored as YYYY-MM-DD text, so lexicographic range
// comparisons in SQL match calendar order.
fn row_to_log(r: LogRow) -> Result<HabitLog> {
    let date: NaiveDate = r.date.parse()?;
    Ok(HabitLog {
        id: r.id,
        habit_id: r.habit_id,
        user_id: r.user_id,
        date,
        value: r.value,
        note: r.note,
    })
}

impl Database {
    pub fn insert_log(
        &self,
        habit_id: i64,
        user_id: i64,
        date: NaiveDate,
        value: i64,
        note: Option<&str>,
    ) -> Result<HabitLog> {
        self.conn.execute(
            "INSERT INTO habit_logs (habit_id, user_id, date, value, note)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![habit_id, user_id, date.to_string(), value, note],
        )?;
        Ok(HabitLog {
            id: self.conn.last_insert_rowid(),
            habit_id,
            user_id,
            date,
            value,
            note: note.map(String::from),
        })
    }

    pub fn list_logs(
        &self,
        habit_id: i64,
        user_id: i64,
        limit: Option<u32>,
    ) -> Result<Vec<HabitLog>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, habit_id, user_id, date, value, note
             FROM habit_logs WHERE habit_id = ?1 AND user_id = ?2
             ORDER BY date DESC, id DESC LIMIT ?3",
        )?;
        let limit = limit.map(|l| l as i64).unwrap_or(-1);
        let rows = stmt.query_map(params![habit_id, user_id, limit], |row| {
            Ok(LogRow {
                id: row.get(0)?,
                habit_id: row.get(1)?,
                user_id: row.get(2)?,
                date: row.get(3)?,
                value: row.get(4)?,
                note: row.get(5)?,
            })
        })?;

        let mut logs = Vec::new();
        for row in rows {
            logs.push(row_to_log(row?)?);
        }
        Ok(logs)
    }

    /// Delete one log entry. Returns false if no such entry existed.
    pub fn remove_log(&self, user_id: i64, id: i64) -> Result<bool> {
        let count = self.conn.execute(
            "DELETE FROM habit_logs WHERE id = ?1 AND user_id = ?2",
            params![id, user_id],
        )?;
        Ok(count > 0)
    }

    /// Per-day summed totals over a habit's full history, for the logs view.
    pub fn summed_by_date(&self, habit_id: i64, user_id: i64) -> Result<Vec<(NaiveDate, i64)>> {
        let mut stmt = self.conn.prepare(
            "SELECT date, SUM(value) FROM habit_logs
             WHERE habit_id = ?1 AND user_id = ?2
             GROUP BY date ORDER BY date",
        )?;
        let rows = stmt.query_map(params![habit_id, user_id], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut totals = Vec::new();
        for row in rows {
            let (date, sum) = row?;
            totals.push((date.parse::<NaiveDate>()?, sum));
        }
        Ok(totals)
    }
}

impl LogStore for Database {
    fn earliest_date(&self, habit_id: i64, user_id: i64) -> Result<Option<NaiveDate>> {
        let min: Option<String> = self.conn.query_row(
            "SELECT MIN(date) FROM habit_logs WHERE habit_id = ?1 AND user_id = ?2",
            params![habit_id, user_id],
            |row| row.get(0),
        )?;
        match min {
            Some(s) => Ok(Some(s.parse()?)),
            None => Ok(None),
        }
    }

    fn summed_values_by_date(
        &self,
        habit_id: i64,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, i64>> {
        let mut stmt = self.conn.prepare(
            "SELECT date, SUM(value) FROM habit_logs
             WHERE habit_id = ?1 AND user_id = ?2 AND date >= ?3 AND date <= ?4
             GROUP BY date",
        )?;
        let rows = stmt.query_map(
            params![habit_id, user_id, start.to_string(), end.to_string()],
            |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)),
        )?;

        let mut sums = BTreeMap::new();
        for row in rows {
            let (date, sum) = row?;
            sums.insert(date.parse::<NaiveDate>()?, sum);
        }
        Ok(sums)
    }
}
