use crate::cli::commands::commit::{commit_and_show, current_results};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store;
use crate::errors::{AppError, AppResult};
use crate::models::changeset::{Changeset, RowPatch, parse_cli_value};
use crate::models::result::MatchResult;

/// Build the added-row patch from `--day` and `--player NAME:SCORE` flags.
pub fn build_row(day: &str, players: &[String]) -> AppResult<RowPatch> {
    if players.len() > MatchResult::MAX_SLOTS {
        return Err(AppError::InvalidRow(format!(
            "at most {} players per match",
            MatchResult::MAX_SLOTS
        )));
    }

    let mut row = RowPatch::new();
    row.insert("day".into(), serde_json::Value::String(day.to_string()));

    for (i, entry) in players.iter().enumerate() {
        let (name, score) = entry.rsplit_once(':').ok_or_else(|| {
            AppError::InvalidChangeset(format!("expected NAME:SCORE, got '{entry}'"))
        })?;
        let n = i + 1;
        row.insert(
            format!("player{n}"),
            serde_json::Value::String(name.trim().to_string()),
        );
        row.insert(format!("score{n}"), parse_cli_value(score));
    }

    Ok(row)
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { day, players } = cmd {
        let changeset = Changeset::default().with_added(build_row(day, players)?);

        let mut pool = store::open(cfg)?;
        let snapshot = current_results(&pool);
        commit_and_show(&mut pool, &snapshot, &changeset, cfg)?;
    }
    Ok(())
}
