use anyhow::Result;
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Read access to the log store. `Database` implements this; tests use an
/// in-memory fake.
pub trait LogStore {
    /// Earliest log date for a (habit, user) pair, or None if no logs exist.
    fn earliest_date(&self, habit_id: i64, user_id: i64) -> Result<Option<NaiveDate>>;

    /// Per-date summed log values restricted to the inclusive range
    /// `[start, end]`. Dates with no logs are absent from the map.
    fn summed_values_by_date(
        &self,
        habit_id: i64,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, i64>>;
}

/// Summed minutes for one calendar day of the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyAggregation {
    pub date: NaiveDate,
    pub total_minutes: i64,
}

#[derive(Debug, Serialize)]
pub struct WeeklyStats {
    pub habit_id: i64,
    pub habit_name: String,
    /// One entry per day of the window, zero-filled, ascending by date.
    pub daily: Vec<DailyAggregation>,
    pub total_week: i64,
    pub avg_per_day: f64,
}

/// Outcome of a stats computation. Insufficient history is a normal result
/// the caller branches on, not an error.
#[derive(Debug)]
pub enum StatsOutcome {
    Report(WeeklyStats),
    InsufficientData,
}

/// Inclusive ascending sequence of dates from `start` to `end`; empty when
/// `start > end`.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        current += Duration::days(1);
    }
    dates
}

/// Whether enough history exists to report a `required_days` window ending
/// at `today`. True iff the earliest log is at least `required_days - 1`
/// days in the past, so a habit first logged exactly `required_days - 1`
/// days ago qualifies on the window's last day.
///
/// This checks history span only, not logging density: one entry
/// `required_days - 1` days ago and nothing since still passes.
pub fn is_sufficient(first_log_date: NaiveDate, required_days: u32, today: NaiveDate) -> bool {
    today - first_log_date >= Duration::days(required_days as i64 - 1)
}

/// Reconcile sparse per-date sums against the full window ending at
/// `end_date`, zero-filling days with no logs. Output always has exactly
/// `required_days` entries in ascending date order; dates in `sums` outside
/// the window are ignored.
pub fn build_daily(
    sums: &BTreeMap<NaiveDate, i64>,
    required_days: u32,
    end_date: NaiveDate,
) -> Vec<DailyAggregation> {
    let start_date = end_date - Duration::days(required_days as i64 - 1);
    date_range(start_date, end_date)
        .into_iter()
        .map(|date| DailyAggregation {
            date,
            total_minutes: sums.get(&date).copied().unwrap_or(0),
        })
        .collect()
}

/// Roll a dense daily series up into a report. The window length is taken
/// from the series itself, so this works for any window size. An empty
/// series compiles to zero totals rather than a NaN average.
pub fn compile(habit_id: i64, habit_name: &str, daily: Vec<DailyAggregation>) -> WeeklyStats {
    let total_week: i64 = daily.iter().map(|d| d.total_minutes).sum();
    let avg_per_day = if daily.is_empty() {
        0.0
    } else {
        (total_week as f64 / daily.len() as f64 * 100.0).round() / 100.0
    };
    WeeklyStats {
        habit_id,
        habit_name: habit_name.to_string(),
        daily,
        total_week,
        avg_per_day,
    }
}

/// Compute weekly stats for a (habit, user) pair over the `required_days`
/// window ending at `end_date`.
///
/// Issues at most two store queries (earliest date, then one grouped sum for
/// the whole window). The two may observe different snapshots under
/// concurrent writes; that staleness is accepted. Store errors propagate
/// unchanged; no partial report is ever produced.
pub fn compute_weekly_stats(
    store: &impl LogStore,
    habit_id: i64,
    user_id: i64,
    habit_name: &str,
    required_days: u32,
    end_date: NaiveDate,
) -> Result<StatsOutcome> {
    if required_days == 0 {
        anyhow::bail!("required_days must be at least 1");
    }

    let Some(first_log_date) = store.earliest_date(habit_id, user_id)? else {
        return Ok(StatsOutcome::InsufficientData);
    };
    if !is_sufficient(first_log_date, required_days, end_date) {
        return Ok(StatsOutcome::InsufficientData);
    }

    let start_date = end_date - Duration::days(required_days as i64 - 1);
    let sums = store.summed_values_by_date(habit_id, user_id, start_date, end_date)?;
    let daily = build_daily(&sums, required_days, end_date);

    Ok(StatsOutcome::Report(compile(habit_id, habit_name, daily)))
}
