use colored::Colorize;
use comfy_table::Table;

use crate::core::stats::WeeklyStats;
use crate::models::HabitLog;
use crate::models::habit::HabitWithCount;

/// Pretty-print a single log entry.
pub fn format_log(log: &HabitLog) -> String {
    let mut line = format!("{} | #{} | {} min", log.date, log.id, log.value);
    if let Some(ref note) = log.note {
        line.push_str(&format!("  # {}", note));
    }
    line
}

/// Render the habit list as a table.
pub fn format_habit_table(habits: &[HabitWithCount]) -> String {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Category", "Logs"]);
    for h in habits {
        table.add_row(vec![
            h.id.to_string(),
            h.name.clone(),
            h.category.clone().unwrap_or_default(),
            h.log_count.to_string(),
        ]);
    }
    table.to_string()
}

/// Pretty-print the weekly stats view with a per-day minutes bar.
pub fn format_weekly_stats(stats: &WeeklyStats) -> String {
    let mut out = format!("Weekly stats: {}\n\n", stats.habit_name.bold());
    for day in &stats.daily {
        let bar_len = (day.total_minutes / 10).clamp(0, 40) as usize;
        let bar = if day.total_minutes > 0 {
            "▇".repeat(bar_len.max(1)).green().to_string()
        } else {
            "·".dimmed().to_string()
        };
        out.push_str(&format!(
            "  {} | {:>4} min {}\n",
            day.date, day.total_minutes, bar
        ));
    }
    out.push_str(&format!(
        "\n  Total: {} min | Avg/day: {:.2} min\n",
        stats.total_week, stats.avg_per_day
    ));
    out
}
