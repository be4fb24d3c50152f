//! SQLite connection wrapper (one connection per process).

use rusqlite::{Connection, Result};
use std::path::Path;

pub const IN_MEMORY: &str = ":memory:";

pub struct DbPool {
    pub conn: Connection,
    /// True when the database file did not exist before this connection
    /// opened (and thereby created) it.
    pub created: bool,
    pub path: String,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let created = path == IN_MEMORY || !Path::new(path).exists();
        let conn = Connection::open(Path::new(path))?;
        Ok(Self {
            conn,
            created,
            path: path.to_string(),
        })
    }

    pub fn in_memory() -> Result<Self> {
        Self::new(IN_MEMORY)
    }
}
