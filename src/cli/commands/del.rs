use crate::cli::commands::commit::{commit_and_show, current_results};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store;
use crate::errors::AppResult;
use crate::models::changeset::Changeset;
use crate::ui::messages::{info, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { rows, yes } = cmd {
        let listed: Vec<String> = rows.iter().map(|r| format!("#{r}")).collect();
        let prompt = format!(
            "Delete result rows {}? This action is irreversible.",
            listed.join(", ")
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let changeset = Changeset::default().with_deleted(rows.iter().copied());

        let mut pool = store::open(cfg)?;
        let snapshot = current_results(&pool);
        commit_and_show(&mut pool, &snapshot, &changeset, cfg)?;
    }
    Ok(())
}
