use super::csv::write_csv;
use super::fs_utils::ensure_writable;
use super::json::write_json;
use super::model::{PlayerExport, ResultExport};
use super::{ExportFormat, notify_export_success};
use crate::core::materialize::try_load;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::schema::TableKind;
use serde::Serialize;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export one table; returns the number of rows written.
    pub fn export(
        pool: &DbPool,
        table: TableKind,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let snapshot = try_load(&pool.conn, table)?;

        let count = match table {
            TableKind::Results => {
                let rows: Vec<ResultExport> =
                    snapshot.results()?.iter().map(ResultExport::from).collect();
                write_rows(path, format, &rows)?
            }
            TableKind::Players => {
                let rows: Vec<PlayerExport> =
                    snapshot.players()?.iter().map(PlayerExport::from).collect();
                write_rows(path, format, &rows)?
            }
        };

        ttlog(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("{} {} rows as {}", count, table.table_name(), format.as_str()),
        )?;

        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(count)
    }
}

fn write_rows<T: Serialize>(path: &Path, format: ExportFormat, rows: &[T]) -> AppResult<usize> {
    match format {
        ExportFormat::Csv => write_csv(path, rows)?,
        ExportFormat::Json => write_json(path, rows)?,
    }
    Ok(rows.len())
}
