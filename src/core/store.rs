use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::fs;
use std::path::Path;

/// Open the configured database and bootstrap it, as every command does
/// before reading or writing.
pub fn open(cfg: &Config) -> AppResult<DbPool> {
    if let Some(parent) = Path::new(&cfg.database).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut pool = DbPool::new(&cfg.database)?;

    if init_db(&mut pool, &cfg.images_path())? {
        success("Database initialized with some sample data.");
    }

    Ok(pool)
}
