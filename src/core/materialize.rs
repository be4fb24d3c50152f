//! Read materializer: loads a whole table into an ordered, typed snapshot.

use crate::errors::{AppError, AppResult};
use crate::models::player::Player;
use crate::models::result::MatchResult;
use crate::models::schema::{ColumnDef, ID_COLUMN, TableKind};
use crate::models::value::Value;
use crate::ui::messages::warning;
use rusqlite::Connection;

/// One materialized row. `index` is its position in the snapshot and the
/// only handle a changeset may use to address it.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotRow {
    pub index: usize,
    pub cells: Vec<Value>,
}

/// A table as displayed during one interaction cycle.
///
/// Rows are ordered by id; cells follow the declared column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    kind: TableKind,
    rows: Vec<SnapshotRow>,
}

impl Snapshot {
    pub fn from_rows(kind: TableKind, rows: Vec<Vec<Value>>) -> Self {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(index, cells)| SnapshotRow { index, cells })
            .collect();
        Self { kind, rows }
    }

    pub fn empty(kind: TableKind) -> Self {
        Self {
            kind,
            rows: Vec::new(),
        }
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn columns(&self) -> &'static [ColumnDef] {
        self.kind.columns()
    }

    pub fn rows(&self) -> &[SnapshotRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> AppResult<&SnapshotRow> {
        self.rows.get(index).ok_or(AppError::RowIndexOutOfRange {
            index,
            len: self.rows.len(),
        })
    }

    /// Map a display index to the persisted primary key.
    pub fn resolve_id(&self, index: usize) -> AppResult<i64> {
        match self.row(index)?.cells.get(ID_COLUMN) {
            Some(Value::Integer(id)) => Ok(*id),
            other => Err(AppError::Other(format!(
                "row {index} has no usable id ({other:?})"
            ))),
        }
    }

    pub fn ids(&self) -> AppResult<Vec<i64>> {
        (0..self.rows.len()).map(|i| self.resolve_id(i)).collect()
    }

    pub fn results(&self) -> AppResult<Vec<MatchResult>> {
        self.expect_kind(TableKind::Results)?;
        self.rows
            .iter()
            .map(|r| MatchResult::from_cells(&r.cells))
            .collect()
    }

    pub fn players(&self) -> AppResult<Vec<Player>> {
        self.expect_kind(TableKind::Players)?;
        self.rows
            .iter()
            .map(|r| Player::from_cells(&r.cells))
            .collect()
    }

    fn expect_kind(&self, kind: TableKind) -> AppResult<()> {
        if self.kind != kind {
            return Err(AppError::Other(format!(
                "snapshot holds {}, not {}",
                self.kind.table_name(),
                kind.table_name()
            )));
        }
        Ok(())
    }
}

/// Select every row of `kind` and convert it to typed cells.
pub fn try_load(conn: &Connection, kind: TableKind) -> AppResult<Snapshot> {
    let cols = kind.columns();
    let names: Vec<&str> = cols.iter().map(|c| c.name).collect();
    let sql = format!(
        "SELECT {} FROM {} ORDER BY id ASC",
        names.join(", "),
        kind.table_name()
    );

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query([])?;

    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        let mut cells = Vec::with_capacity(cols.len());
        for (i, col) in cols.iter().enumerate() {
            cells.push(Value::from_sql(col, row.get_ref(i)?)?);
        }
        out.push(cells);
    }

    Ok(Snapshot::from_rows(kind, out))
}

/// Like [`try_load`], but a failed select (missing table, unreadable row)
/// yields `None` so callers can show an empty state instead of aborting.
pub fn load(conn: &Connection, kind: TableKind) -> Option<Snapshot> {
    match try_load(conn, kind) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warning(format!("No {} data available: {}", kind.table_name(), e));
            None
        }
    }
}
