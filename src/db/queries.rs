use crate::errors::{AppError, AppResult};
use crate::models::player::Player;
use crate::models::result::MatchResult;
use rusqlite::{Connection, params, params_from_iter};

pub fn insert_player(conn: &Connection, p: &Player) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO players (name, handicap_initial, handicap_current, handicap_playing, image)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            p.name,
            p.handicap_initial,
            p.handicap_current,
            p.handicap_playing,
            p.image,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Insert a result row and return the id assigned by SQLite.
/// Any id already set on `row` is ignored.
pub fn insert_result(conn: &Connection, row: &MatchResult) -> AppResult<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO results
            (day, player1, score1, player2, score2, player3, score3, player4, score4)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
    )?;
    stmt.execute(params_from_iter(row.to_params()))?;
    Ok(conn.last_insert_rowid())
}

/// Overwrite every field of an existing result (all fields except id).
pub fn update_result(conn: &Connection, row: &MatchResult) -> AppResult<()> {
    let id = row
        .id
        .ok_or_else(|| AppError::InvalidRow("cannot update a row without id".into()))?;

    let mut values = row.to_params();
    values.push(crate::models::value::Value::Integer(id));

    let mut stmt = conn.prepare_cached(
        "UPDATE results
         SET day = ?1,
             player1 = ?2, score1 = ?3,
             player2 = ?4, score2 = ?5,
             player3 = ?6, score3 = ?7,
             player4 = ?8, score4 = ?9
         WHERE id = ?10",
    )?;
    let changed = stmt.execute(params_from_iter(values))?;

    if changed == 0 {
        return Err(AppError::StaleRow(id));
    }
    Ok(())
}

pub fn delete_result(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM results WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::StaleRow(id));
    }
    Ok(())
}

pub fn count_rows(conn: &Connection, table: &str) -> rusqlite::Result<i64> {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
}
