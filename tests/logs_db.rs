mod common;

use common::{d, setup_db, setup_habit};
use habitual::core::stats::{self, LogStore, StatsOutcome};

#[test]
fn test_earliest_date_none_without_logs() {
    let (_dir, db) = setup_db();
    let (user_id, habit_id) = setup_habit(&db, "reading");

    assert_eq!(db.earliest_date(habit_id, user_id).unwrap(), None);
}

#[test]
fn test_earliest_date_is_minimum() {
    let (_dir, db) = setup_db();
    let (user_id, habit_id) = setup_habit(&db, "reading");

    db.insert_log(habit_id, user_id, d(2026, 3, 8), 10, None)
        .unwrap();
    db.insert_log(habit_id, user_id, d(2026, 3, 2), 20, None)
        .unwrap();
    db.insert_log(habit_id, user_id, d(2026, 3, 5), 15, None)
        .unwrap();

    assert_eq!(
        db.earliest_date(habit_id, user_id).unwrap(),
        Some(d(2026, 3, 2))
    );
}

#[test]
fn test_earliest_date_scoped_to_pair() {
    let (_dir, db) = setup_db();
    let (user_id, habit_id) = setup_habit(&db, "reading");
    let other = db.insert_habit(user_id, "running", None).unwrap();

    db.insert_log(other.id, user_id, d(2026, 3, 1), 10, None)
        .unwrap();

    assert_eq!(db.earliest_date(habit_id, user_id).unwrap(), None);
}

#[test]
fn test_summed_values_by_date_sums_and_restricts_range() {
    let (_dir, db) = setup_db();
    let (user_id, habit_id) = setup_habit(&db, "reading");

    // Two entries on the same day sum to one value.
    db.insert_log(habit_id, user_id, d(2026, 3, 8), 10, None)
        .unwrap();
    db.insert_log(habit_id, user_id, d(2026, 3, 8), 25, Some("evening"))
        .unwrap();
    // Inside the range on another day.
    db.insert_log(habit_id, user_id, d(2026, 3, 10), 5, None)
        .unwrap();
    // Outside the range on both sides.
    db.insert_log(habit_id, user_id, d(2026, 3, 3), 99, None)
        .unwrap();
    db.insert_log(habit_id, user_id, d(2026, 3, 11), 99, None)
        .unwrap();

    let sums = db
        .summed_values_by_date(habit_id, user_id, d(2026, 3, 4), d(2026, 3, 10))
        .unwrap();

    assert_eq!(sums.len(), 2);
    assert_eq!(sums[&d(2026, 3, 8)], 35);
    assert_eq!(sums[&d(2026, 3, 10)], 5);
}

#[test]
fn test_summed_values_empty_range_days_absent() {
    let (_dir, db) = setup_db();
    let (user_id, habit_id) = setup_habit(&db, "reading");

    let sums = db
        .summed_values_by_date(habit_id, user_id, d(2026, 3, 4), d(2026, 3, 10))
        .unwrap();
    assert!(sums.is_empty());
}

#[test]
fn test_remove_log() {
    let (_dir, db) = setup_db();
    let (user_id, habit_id) = setup_habit(&db, "reading");

    let log = db
        .insert_log(habit_id, user_id, d(2026, 3, 8), 10, None)
        .unwrap();
    assert!(db.remove_log(user_id, log.id).unwrap());
    assert!(!db.remove_log(user_id, log.id).unwrap());
    assert!(db.list_logs(habit_id, user_id, None).unwrap().is_empty());
}

#[test]
fn test_list_logs_recent_first_with_limit() {
    let (_dir, db) = setup_db();
    let (user_id, habit_id) = setup_habit(&db, "reading");

    for day in 1..=5 {
        db.insert_log(habit_id, user_id, d(2026, 3, day), 10, None)
            .unwrap();
    }

    let logs = db.list_logs(habit_id, user_id, Some(2)).unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].date, d(2026, 3, 5));
    assert_eq!(logs[1].date, d(2026, 3, 4));
}

/// The engine run against the real SQLite store, end to end.
#[test]
fn test_engine_against_sqlite_store() {
    let (_dir, db) = setup_db();
    let (user_id, habit_id) = setup_habit(&db, "reading");

    let end = d(2026, 3, 10);
    db.insert_log(habit_id, user_id, d(2026, 3, 4), 30, None)
        .unwrap();

    let outcome =
        stats::compute_weekly_stats(&db, habit_id, user_id, "reading", 7, end).unwrap();
    match outcome {
        StatsOutcome::Report(r) => {
            assert_eq!(r.daily.len(), 7);
            assert_eq!(r.total_week, 30);
            assert_eq!(r.avg_per_day, 4.29);
        }
        StatsOutcome::InsufficientData => panic!("expected a report"),
    }
}
