use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde_json::json;

use habitual::core::stats::{self, StatsOutcome};
use habitual::output;
use habitual::output::human;

pub fn run(
    habit: &str,
    days: u32,
    date: Option<NaiveDate>,
    user: Option<&str>,
    human_flag: bool,
) -> Result<()> {
    let (db, user_id) = super::open_for_user(user)?;
    let found = db.find_habit(user_id, habit)?;
    let end_date = date.unwrap_or_else(|| Local::now().date_naive());

    let outcome =
        stats::compute_weekly_stats(&db, found.id, user_id, &found.name, days, end_date)?;

    match outcome {
        StatsOutcome::Report(report) => {
            if human_flag {
                println!("{}", human::format_weekly_stats(&report));
            } else {
                let out = output::success("stats", serde_json::to_value(&report)?);
                println!("{}", serde_json::to_string(&out)?);
            }
        }
        StatsOutcome::InsufficientData => {
            // A normal outcome, not a failure: report it on stdout, exit 0.
            if human_flag {
                println!("Not enough data to generate stats. Please log data.");
            } else {
                let out = output::success(
                    "stats",
                    json!({
                        "habit_id": found.id,
                        "habit_name": found.name,
                        "insufficient_data": true
                    }),
                );
                println!("{}", serde_json::to_string(&out)?);
            }
        }
    }
    Ok(())
}
