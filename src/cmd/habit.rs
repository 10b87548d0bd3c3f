use anyhow::Result;
use serde_json::json;

use habitual::output;
use habitual::output::human;

pub fn run_add(
    name: &str,
    category: Option<&str>,
    user: Option<&str>,
    human_flag: bool,
) -> Result<()> {
    let (db, user_id) = super::open_for_user(user)?;
    let habit = db.insert_habit(user_id, name, category)?;

    if human_flag {
        println!("Added habit '{}' (id {})", habit.name, habit.id);
    } else {
        let out = output::success("add", json!({ "habit": habit }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_list(user: Option<&str>, human_flag: bool) -> Result<()> {
    let (db, user_id) = super::open_for_user(user)?;
    let habits = db.list_habits(user_id)?;

    if human_flag {
        if habits.is_empty() {
            println!("No habits yet. Add one with: habitual add <name>");
        } else {
            println!("{}", human::format_habit_table(&habits));
        }
    } else {
        let out = output::success(
            "list",
            json!({ "habits": habits, "total": habits.len() }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_remove(habit: &str, user: Option<&str>, human_flag: bool) -> Result<()> {
    let (mut db, user_id) = super::open_for_user(user)?;
    let found = db.find_habit(user_id, habit)?;
    db.remove_habit(user_id, found.id)?;

    if human_flag {
        println!("Removed habit '{}' and its logs", found.name);
    } else {
        let out = output::success("remove", json!({ "removed": found.id }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
