pub mod config;
pub mod habit;
pub mod init;
pub mod log;
pub mod stats;

use anyhow::Result;
use habitual::db::Database;
use habitual::models::config::Config;

/// Open the database and resolve the active user id, honoring a `--user`
/// override.
pub fn open_for_user(user_flag: Option<&str>) -> Result<(Database, i64)> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let name = user_flag.unwrap_or(&config.user);
    let user_id = db.ensure_user(name)?;
    Ok((db, user_id))
}
