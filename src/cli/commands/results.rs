use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::materialize::{Snapshot, load};
use crate::core::store;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::schema::TableKind;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_optional;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Results = cmd {
        let pool = store::open(cfg)?;
        show(&pool, cfg);
    }
    Ok(())
}

/// Materialize the results table and print it (empty state when absent).
pub fn show(pool: &DbPool, cfg: &Config) -> Option<Snapshot> {
    let Some(snapshot) = load(&pool.conn, TableKind::Results) else {
        header("Results");
        info("No data.");
        return None;
    };
    print_results(&snapshot, cfg);
    Some(snapshot)
}

pub fn print_results(snapshot: &Snapshot, cfg: &Config) {
    header("Results");

    if snapshot.is_empty() {
        info("No results recorded yet.");
        return;
    }

    let mut columns = vec![Column::right("#")];
    columns.extend(snapshot.columns().iter().map(|c| {
        if c.name.starts_with("score") || c.name == "id" {
            Column::right(c.label)
        } else {
            Column::left(c.label)
        }
    }));

    let mut table = Table::new(columns, cfg.separator());
    for row in snapshot.rows() {
        let mut cells = vec![row.index.to_string()];
        cells.extend(
            row.cells
                .iter()
                .map(|v| colorize_optional(&v.display(&cfg.date_format))),
        );
        table.add_row(cells);
    }

    print!("{}", table.render());
}
