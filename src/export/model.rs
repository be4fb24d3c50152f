use crate::models::player::Player;
use crate::models::result::MatchResult;
use crate::utils::formatting::format_bytes;
use serde::Serialize;

/// Flat result row for CSV / JSON: one pair of columns per slot.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ResultExport {
    pub id: i64,
    pub day: String,
    pub player1: String,
    pub score1: i64,
    pub player2: String,
    pub score2: i64,
    pub player3: Option<String>,
    pub score3: Option<i64>,
    pub player4: Option<String>,
    pub score4: Option<i64>,
}

impl From<&MatchResult> for ResultExport {
    fn from(r: &MatchResult) -> Self {
        let player = |n: usize| r.slot(n).map(|s| s.player.clone());
        let score = |n: usize| r.slot(n).map(|s| s.score);

        Self {
            id: r.id.unwrap_or_default(),
            day: r.day_str(),
            player1: player(1).unwrap_or_default(),
            score1: score(1).unwrap_or_default(),
            player2: player(2).unwrap_or_default(),
            score2: score(2).unwrap_or_default(),
            player3: player(3),
            score3: score(3),
            player4: player(4),
            score4: score(4),
        }
    }
}

/// Player row for CSV / JSON; the portrait is summarized, never embedded.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PlayerExport {
    pub id: i64,
    pub name: String,
    pub handicap_initial: f64,
    pub handicap_current: f64,
    pub handicap_playing: i64,
    pub image: String,
}

impl From<&Player> for PlayerExport {
    fn from(p: &Player) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            handicap_initial: p.handicap_initial,
            handicap_current: p.handicap_current,
            handicap_playing: p.handicap_playing,
            image: p
                .image
                .as_ref()
                .map(|b| format_bytes(b.len()))
                .unwrap_or_default(),
        }
    }
}
