use crate::db::log::ttlog;
use crate::db::pool::{DbPool, IN_MEMORY};
use crate::db::seed;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use rusqlite::{Connection, Result};
use std::fs;
use std::path::Path;

/// Internal audit table written by [`ttlog`].
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn ensure_players_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS players (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            name             TEXT NOT NULL,
            handicap_initial REAL NOT NULL,
            handicap_current REAL NOT NULL,
            handicap_playing INTEGER NOT NULL,
            image            BLOB
        );
        "#,
    )
}

fn ensure_results_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS results (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            day     TEXT NOT NULL,
            player1 TEXT NOT NULL,
            score1  INTEGER NOT NULL,
            player2 TEXT NOT NULL,
            score2  INTEGER NOT NULL,
            player3 TEXT,
            score3  INTEGER,
            player4 TEXT,
            score4  INTEGER
        );

        CREATE INDEX IF NOT EXISTS idx_results_day ON results(day);
        "#,
    )
}

/// Create every table that is missing. Safe to run on each start.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    ensure_players_table(conn)?;
    ensure_results_table(conn)?;
    Ok(())
}

fn is_empty(conn: &Connection, table: &str) -> Result<bool> {
    let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })?;
    Ok(count == 0)
}

/// Bootstrap the store.
///
/// Tables are always ensured. Sample data is inserted only when the
/// connector reports a freshly created file and both tables are still
/// empty, so running this twice never duplicates seed rows.
///
/// If bootstrapping a freshly created file fails (a missing portrait, for
/// instance) the file is removed again, so the next run still sees a new
/// store and seeds it.
///
/// Returns `true` when the seed rows were written.
pub fn init_db(pool: &mut DbPool, images_dir: &Path) -> AppResult<bool> {
    match bootstrap(pool, images_dir) {
        Err(e) if pool.created => {
            discard_new_store(pool);
            Err(e)
        }
        other => other,
    }
}

fn bootstrap(pool: &mut DbPool, images_dir: &Path) -> AppResult<bool> {
    ensure_schema(&pool.conn)?;

    if !pool.created {
        return Ok(false);
    }

    if !is_empty(&pool.conn, "players")? || !is_empty(&pool.conn, "results")? {
        return Ok(false);
    }

    seed::seed(pool, images_dir)?;

    if let Err(e) = ttlog(&pool.conn, "init", &pool.path, "Database created and seeded") {
        warning(format!("Failed to write internal log: {}", e));
    }

    Ok(true)
}

/// Close the connection and delete the file it created.
///
/// The pool is left on an in-memory connection.
fn discard_new_store(pool: &mut DbPool) {
    if pool.path == IN_MEMORY {
        return;
    }

    let Ok(placeholder) = Connection::open_in_memory() else {
        return;
    };
    drop(std::mem::replace(&mut pool.conn, placeholder));

    if let Err(e) = fs::remove_file(&pool.path) {
        warning(format!(
            "Failed to remove incomplete database {}: {}",
            pool.path, e
        ));
    }
}
