use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::seed::seed_image_paths;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::fs;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped with `--test`)
///  - the SQLite database and its tables
///  - the sample players and results, when the database file is new
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.images.as_deref(), cli.test)?;

    println!("⚙️  Initializing slvm…");
    println!("🗄️  Database : {}", cfg.database);
    println!("🖼️  Images   : {}", cfg.images_path().display());

    if let Some(parent) = Path::new(&cfg.database).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut pool = DbPool::new(&cfg.database)?;

    if pool.created {
        info(format!(
            "New database: {} portraits will be read from {}",
            seed_image_paths(&cfg.images_path()).len(),
            cfg.images_path().display()
        ));
    }

    if init_db(&mut pool, &cfg.images_path())? {
        success("Database initialized with some sample data.");
    } else {
        info("Database already exists; tables checked, no sample data added.");
    }

    println!("🎉 slvm initialization completed!");
    Ok(())
}
