use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One dated, quantified record (minutes) against a habit.
///
/// Several entries may share a date; per-day totals are computed by summing
/// at query time, never by merging rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitLog {
    pub id: i64,
    pub habit_id: i64,
    pub user_id: i64,
    pub date: NaiveDate,
    pub value: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
