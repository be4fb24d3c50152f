use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::materialize::load;
use crate::core::store;
use crate::errors::AppResult;
use crate::models::player::Player;
use crate::models::schema::TableKind;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{RESET, color_for_handicap, colorize_optional};
use crate::utils::formatting::format_bytes;
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};
use crate::utils::{format_handicap, format_playing_handicap};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Players { dump_images } = cmd {
        let pool = store::open(cfg)?;

        let Some(snapshot) = load(&pool.conn, TableKind::Players) else {
            info("No players to show.");
            return Ok(());
        };
        let players = snapshot.players()?;

        print_players(&players, cfg);

        if let Some(dir) = dump_images {
            let dir = expand_tilde(dir);
            fs::create_dir_all(&dir)?;

            let mut written = 0;
            for p in players.iter().filter(|p| p.has_image()) {
                if let Some(bytes) = &p.image {
                    fs::write(dir.join(p.image_file_name()), bytes)?;
                    written += 1;
                }
            }
            success(format!("{} portraits written to {}", written, dir.display()));
        }
    }
    Ok(())
}

fn colored_handicap(value: f64) -> String {
    format!("{}{}{}", color_for_handicap(value), format_handicap(value), RESET)
}

pub fn print_players(players: &[Player], cfg: &Config) {
    header("Players");

    if players.is_empty() {
        info("No players registered.");
        return;
    }

    let mut table = Table::new(
        vec![
            Column::right("id"),
            Column::left("name"),
            Column::right("initial"),
            Column::right("current"),
            Column::right("playing"),
            Column::left("portrait"),
        ],
        cfg.separator(),
    );

    for p in players {
        table.add_row(vec![
            p.id.to_string(),
            p.name.clone(),
            colored_handicap(p.handicap_initial),
            colored_handicap(p.handicap_current),
            format_playing_handicap(p.handicap_playing),
            colorize_optional(
                &p.image
                    .as_ref()
                    .map(|b| format!("{} ({})", p.image_extension(), format_bytes(b.len())))
                    .unwrap_or_default(),
            ),
        ]);
    }

    print!("{}", table.render());
}
