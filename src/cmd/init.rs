use anyhow::Result;
use std::io::{self, Write};

use habitual::db::Database;
use habitual::models::config::Config;

pub fn run(skip: bool) -> Result<()> {
    let mut config = Config::load().unwrap_or_default();

    if !skip {
        println!("Habitual — Initial Setup\n");

        let user = prompt_string("User name (empty for 'default')")?;
        if !user.is_empty() {
            config.user = user;
        }

        config.save()?;

        let db = Database::open(&Config::db_path())?;
        db.ensure_user(&config.user)?;

        println!("\nSetup complete. Data stored in {:?}", Config::data_dir());
    } else {
        config.save()?;
        let db = Database::open(&Config::db_path())?;
        db.ensure_user(&config.user)?;
        println!("Config initialized with defaults at {:?}", Config::path());
    }

    Ok(())
}

fn prompt_string(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}
