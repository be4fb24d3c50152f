use crate::cli::commands::results;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::materialize::{Snapshot, load};
use crate::core::reconcile::ReconcileLogic;
use crate::core::store;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::changeset::Changeset;
use crate::models::schema::TableKind;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Commit { changeset } = cmd {
        let changeset = Changeset::read_from(changeset)?;
        let mut pool = store::open(cfg)?;
        let snapshot = current_results(&pool);
        commit_and_show(&mut pool, &snapshot, &changeset, cfg)?;
    }
    Ok(())
}

/// Results snapshot the user is editing against; absent data counts as empty.
pub fn current_results(pool: &DbPool) -> Snapshot {
    load(&pool.conn, TableKind::Results).unwrap_or_else(|| Snapshot::empty(TableKind::Results))
}

/// Reconcile `changeset` against `snapshot`, then reload and print the table.
pub fn commit_and_show(
    pool: &mut DbPool,
    snapshot: &Snapshot,
    changeset: &Changeset,
    cfg: &Config,
) -> AppResult<()> {
    let summary = ReconcileLogic::apply(pool, snapshot, changeset)?;

    if summary.is_noop() {
        info("Nothing to commit.");
    } else {
        success(format!(
            "Changes committed: {} updated, {} added, {} deleted.",
            summary.updated,
            summary.inserted.len(),
            summary.deleted
        ));
    }

    results::show(pool, cfg);
    Ok(())
}
