use crate::cli::commands::commit::{commit_and_show, current_results};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store;
use crate::errors::AppResult;
use crate::models::changeset::{Changeset, parse_assignments};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { row, set } = cmd {
        let patch = parse_assignments(set)?;
        let changeset = Changeset::default().with_edit(*row, patch);

        let mut pool = store::open(cfg)?;
        let snapshot = current_results(&pool);
        commit_and_show(&mut pool, &snapshot, &changeset, cfg)?;
    }
    Ok(())
}
