//! Column layout of the persisted tables.
//!
//! The order of each column list is the declared SQL order; snapshots and
//! exports keep it.

use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
    Date,
    Blob,
}

#[derive(Debug)]
pub struct ColumnDef {
    /// SQL column name.
    pub name: &'static str,
    /// Header shown in tables and accepted as a changeset key.
    pub label: &'static str,
    /// Short changeset key (`p1`, `s2`, ...).
    pub short: &'static str,
    pub ty: ColumnType,
    pub nullable: bool,
}

const fn col(
    name: &'static str,
    label: &'static str,
    short: &'static str,
    ty: ColumnType,
    nullable: bool,
) -> ColumnDef {
    ColumnDef {
        name,
        label,
        short,
        ty,
        nullable,
    }
}

pub const PLAYER_COLUMNS: [ColumnDef; 6] = [
    col("id", "id", "id", ColumnType::Integer, false),
    col("name", "name", "name", ColumnType::Text, false),
    col("handicap_initial", "initial", "hi", ColumnType::Real, false),
    col("handicap_current", "current", "hc", ColumnType::Real, false),
    col("handicap_playing", "playing", "hp", ColumnType::Integer, false),
    col("image", "image", "img", ColumnType::Blob, true),
];

pub const RESULT_COLUMNS: [ColumnDef; 10] = [
    col("id", "id", "id", ColumnType::Integer, false),
    col("day", "day", "day", ColumnType::Date, false),
    col("player1", "player 1", "p1", ColumnType::Text, false),
    col("score1", "score 1", "s1", ColumnType::Integer, false),
    col("player2", "player 2", "p2", ColumnType::Text, false),
    col("score2", "score 2", "s2", ColumnType::Integer, false),
    col("player3", "player 3", "p3", ColumnType::Text, true),
    col("score3", "score 3", "s3", ColumnType::Integer, true),
    col("player4", "player 4", "p4", ColumnType::Text, true),
    col("score4", "score 4", "s4", ColumnType::Integer, true),
];

/// Position of the primary key in both tables.
pub const ID_COLUMN: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Players,
    Results,
}

impl TableKind {
    pub fn table_name(&self) -> &'static str {
        match self {
            TableKind::Players => "players",
            TableKind::Results => "results",
        }
    }

    pub fn columns(&self) -> &'static [ColumnDef] {
        match self {
            TableKind::Players => &PLAYER_COLUMNS,
            TableKind::Results => &RESULT_COLUMNS,
        }
    }

    pub fn from_name(name: &str) -> AppResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "players" => Ok(TableKind::Players),
            "results" => Ok(TableKind::Results),
            other => Err(AppError::UnknownTable(other.to_string())),
        }
    }

    /// Resolve a changeset key (SQL name, label or short key) to its column.
    pub fn column(&self, key: &str) -> AppResult<(usize, &'static ColumnDef)> {
        let wanted = key.trim().to_ascii_lowercase();
        self.columns()
            .iter()
            .enumerate()
            .find(|(_, c)| c.name == wanted || c.label == wanted || c.short == wanted)
            .ok_or_else(|| AppError::UnknownColumn(key.to_string()))
    }
}
