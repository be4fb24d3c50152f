//! Sample data written into a freshly created database.

use crate::db::queries::{insert_player, insert_result};
use crate::db::pool::DbPool;
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::player::Player;
use crate::models::result::{MatchResult, Slot};
use crate::utils::date;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub struct SeedPlayer {
    pub name: &'static str,
    pub handicap_initial: f64,
    pub handicap_current: f64,
    pub handicap_playing: i64,
    /// Portrait file name inside the images directory.
    pub image: &'static str,
}

pub const SEED_PLAYERS: [SeedPlayer; 4] = [
    SeedPlayer {
        name: "Aina",
        handicap_initial: 18.4,
        handicap_current: 17.2,
        handicap_playing: 19,
        image: "aina.png",
    },
    SeedPlayer {
        name: "Pep",
        handicap_initial: 24.0,
        handicap_current: 22.5,
        handicap_playing: 25,
        image: "pep.png",
    },
    SeedPlayer {
        name: "Marta",
        handicap_initial: 9.8,
        handicap_current: 10.1,
        handicap_playing: 11,
        image: "marta.png",
    },
    SeedPlayer {
        name: "Jordi",
        handicap_initial: -1.2,
        handicap_current: -0.8,
        handicap_playing: -1,
        image: "jordi.png",
    },
];

/// (day, [(player, score)]) of the opening match.
pub const SEED_RESULTS: [(&str, [(&str, i64); 2]); 1] = [("2025-03-15", [("Aina", 2), ("Pep", 0)])];

/// Paths of every portrait the seed needs.
pub fn seed_image_paths(images_dir: &Path) -> Vec<PathBuf> {
    SEED_PLAYERS
        .iter()
        .map(|p| images_dir.join(p.image))
        .collect()
}

fn read_image(path: PathBuf) -> AppResult<Vec<u8>> {
    fs::read(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AppError::MissingImage(path),
        _ => AppError::Io(e),
    })
}

pub fn seed_players(images_dir: &Path) -> AppResult<Vec<Player>> {
    SEED_PLAYERS
        .iter()
        .map(|sp| {
            Ok(Player {
                id: 0,
                name: sp.name.to_string(),
                handicap_initial: sp.handicap_initial,
                handicap_current: sp.handicap_current,
                handicap_playing: sp.handicap_playing,
                image: Some(read_image(images_dir.join(sp.image))?),
            })
        })
        .collect()
}

pub fn seed_results() -> AppResult<Vec<MatchResult>> {
    SEED_RESULTS
        .iter()
        .map(|(day, slots)| {
            let day = date::parse_day(day).ok_or_else(|| AppError::InvalidDate(day.to_string()))?;
            let slots = slots
                .iter()
                .map(|(player, score)| Slot {
                    player: player.to_string(),
                    score: *score,
                })
                .collect();
            MatchResult::new(day, slots)
        })
        .collect()
}

/// Insert the sample players and results in one transaction.
///
/// All portraits are read before anything is written; a missing file
/// aborts with [`AppError::MissingImage`] and leaves the tables empty.
pub fn seed(pool: &mut DbPool, images_dir: &Path) -> AppResult<()> {
    let players = seed_players(images_dir)?;
    let results = seed_results()?;

    let tx = pool.conn.transaction()?;
    for p in &players {
        insert_player(&tx, p)?;
    }
    for r in &results {
        insert_result(&tx, r)?;
    }
    ttlog(
        &tx,
        "seed",
        "players,results",
        &format!("Seeded {} players and {} results", players.len(), results.len()),
    )?;
    tx.commit()?;

    Ok(())
}
