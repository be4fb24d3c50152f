//! Edit reconciler: turns a changeset plus the snapshot it was staged
//! against into update/insert/delete statements, committed as one unit.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_result, insert_result, update_result};
use crate::core::materialize::Snapshot;
use crate::errors::{AppError, AppResult};
use crate::models::changeset::{Changeset, RowPatch};
use crate::models::result::MatchResult;
use crate::models::schema::{ColumnDef, ID_COLUMN, TableKind};
use crate::models::value::Value;
use std::collections::BTreeSet;

/// What a commit did. The snapshot itself is never touched; reload it to
/// see the new state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitSummary {
    pub updated: usize,
    pub inserted: Vec<i64>,
    pub deleted: usize,
}

impl CommitSummary {
    pub fn is_noop(&self) -> bool {
        self.updated == 0 && self.inserted.is_empty() && self.deleted == 0
    }
}

/// Write `patch` over `cells`. The id column cannot be patched.
pub fn overlay(kind: TableKind, cells: &mut [Value], patch: &RowPatch) -> AppResult<()> {
    for (key, raw) in patch {
        let (pos, col) = kind.column(key)?;
        if pos == ID_COLUMN {
            return Err(AppError::ReadOnlyColumn(col.name.to_string()));
        }
        cells[pos] = Value::from_json(col, raw)?;
    }
    Ok(())
}

/// Complete a sparse row against the full column set: every column the
/// patch does not mention is null.
pub fn complete_record(kind: TableKind, patch: &RowPatch) -> AppResult<Vec<Value>> {
    let columns: &[ColumnDef] = kind.columns();
    let mut cells = vec![Value::Null; columns.len()];
    overlay(kind, &mut cells, patch)?;
    Ok(cells)
}

/// Snapshot row at `index` with `patch` applied on top (patch wins).
pub fn merge_edit(snapshot: &Snapshot, index: usize, patch: &RowPatch) -> AppResult<MatchResult> {
    let mut cells = snapshot.row(index)?.cells.clone();
    overlay(snapshot.kind(), &mut cells, patch)?;
    MatchResult::from_cells(&cells)
}

pub struct ReconcileLogic;

impl ReconcileLogic {
    /// Resolve and validate every staged edit without touching storage.
    ///
    /// Returns (rows to update, rows to insert, ids to delete).
    pub fn stage(
        snapshot: &Snapshot,
        changeset: &Changeset,
    ) -> AppResult<(Vec<MatchResult>, Vec<MatchResult>, Vec<i64>)> {
        if snapshot.kind() != TableKind::Results {
            return Err(AppError::InvalidChangeset(format!(
                "the {} table is read-only",
                snapshot.kind().table_name()
            )));
        }

        let updates = changeset
            .edited
            .iter()
            .map(|(index, patch)| merge_edit(snapshot, *index, patch))
            .collect::<AppResult<Vec<_>>>()?;

        let inserts = changeset
            .added
            .iter()
            .map(|patch| complete_record(TableKind::Results, patch))
            .map(|cells| cells.and_then(|c| MatchResult::from_cells(&c)))
            .collect::<AppResult<Vec<_>>>()?;

        // A row listed twice is deleted once.
        let indices: BTreeSet<usize> = changeset.deleted.iter().copied().collect();
        let deletes = indices
            .into_iter()
            .map(|index| snapshot.resolve_id(index))
            .collect::<AppResult<Vec<_>>>()?;

        Ok((updates, inserts, deletes))
    }

    /// Apply `changeset` (edits, then additions, then deletions) inside a
    /// single transaction.
    ///
    /// Either every statement commits or none does. Indices are resolved
    /// against `snapshot`; ids that vanished from storage since it was
    /// loaded abort the commit with [`AppError::StaleRow`].
    pub fn apply(
        pool: &mut DbPool,
        snapshot: &Snapshot,
        changeset: &Changeset,
    ) -> AppResult<CommitSummary> {
        let (updates, inserts, deletes) = Self::stage(snapshot, changeset)?;

        let tx = pool.conn.transaction()?;
        let mut summary = CommitSummary::default();

        for row in &updates {
            update_result(&tx, row)?;
            summary.updated += 1;
        }

        for row in &inserts {
            summary.inserted.push(insert_result(&tx, row)?);
        }

        for id in &deletes {
            delete_result(&tx, *id)?;
            summary.deleted += 1;
        }

        if !changeset.is_empty() {
            ttlog(&tx, "commit", "results", &changeset.describe())?;
        }

        tx.commit()?;
        Ok(summary)
    }
}
