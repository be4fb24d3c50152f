use crate::db::pool::DbPool;
use crate::db::queries::count_rows;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::{display_day, parse_day};
use rusqlite::OptionalExtension;
use std::fs;

/// Print file size, row counts and the season range; days use `date_format`.
pub fn print_db_info(pool: &DbPool, date_format: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(&pool.path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, pool.path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ROW COUNTS
    //
    for table in ["players", "results", "log"] {
        let count = count_rows(&pool.conn, table)?;
        println!("{}• {}:{} {}{}{}", CYAN, table, RESET, GREEN, count, RESET);
    }

    //
    // 3) SEASON RANGE
    //
    let range: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row("SELECT MIN(day), MAX(day) FROM results", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?;

    let (first, last) = range.unwrap_or((None, None));
    let placeholder = format!("{GREY}--{RESET}");
    // unparseable day text is shown as stored
    let shown = |day: Option<String>| match day {
        Some(raw) => parse_day(&raw)
            .map(|d| display_day(&d, date_format))
            .unwrap_or(raw),
        None => placeholder.clone(),
    };

    println!("{}• Matches played:{}", CYAN, RESET);
    println!("    from: {}", shown(first));
    println!("    to:   {}", shown(last));

    println!();
    Ok(())
}
