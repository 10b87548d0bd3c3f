use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde_json::json;

use habitual::output;
use habitual::output::human;

pub fn run(
    habit: &str,
    minutes: i64,
    note: Option<&str>,
    date: Option<NaiveDate>,
    user: Option<&str>,
    human_flag: bool,
) -> Result<()> {
    if minutes <= 0 {
        anyhow::bail!("minutes must be positive, got {}", minutes);
    }

    let (db, user_id) = super::open_for_user(user)?;
    let found = db.find_habit(user_id, habit)?;
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let log = db.insert_log(found.id, user_id, date, minutes, note)?;

    if human_flag {
        println!("Logged: {} | {}", found.name, human::format_log(&log));
    } else {
        let out = output::success(
            "log",
            json!({
                "entry": {
                    "id": log.id,
                    "habit_id": log.habit_id,
                    "date": log.date,
                    "value": log.value,
                    "note": log.note
                }
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_list(
    habit: &str,
    last: Option<u32>,
    user: Option<&str>,
    human_flag: bool,
) -> Result<()> {
    let (db, user_id) = super::open_for_user(user)?;
    let found = db.find_habit(user_id, habit)?;
    let logs = db.list_logs(found.id, user_id, last)?;
    let totals = db.summed_by_date(found.id, user_id)?;

    if human_flag {
        if logs.is_empty() {
            println!("No logs for '{}'", found.name);
        } else {
            println!("Logs: {}\n", found.name);
            for log in &logs {
                println!("  {}", human::format_log(log));
            }
            println!("\nPer-day totals:");
            for (date, sum) in &totals {
                println!("  {} | {} min", date, sum);
            }
        }
    } else {
        let daily: Vec<_> = totals
            .iter()
            .map(|(date, sum)| json!({ "date": date, "total": sum }))
            .collect();
        let out = output::success(
            "logs",
            json!({
                "habit": { "id": found.id, "name": found.name },
                "entries": logs,
                "daily_totals": daily
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_remove(id: i64, user: Option<&str>, human_flag: bool) -> Result<()> {
    let (db, user_id) = super::open_for_user(user)?;
    if !db.remove_log(user_id, id)? {
        anyhow::bail!("log entry not found: {}", id);
    }

    if human_flag {
        println!("Removed log entry {}", id);
    } else {
        let out = output::success("unlog", json!({ "removed": id }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
