use crate::errors::{AppError, AppResult};
use crate::models::schema::RESULT_COLUMNS;
use crate::models::value::Value;
use crate::utils::date;
use chrono::NaiveDate;
use serde::Serialize;

/// One participant of a match: who played and how many points they took.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub player: String,
    pub score: i64,
}

/// A row of the `results` table.
///
/// Slots are stored contiguously: `slots[0]` and `slots[1]` always exist,
/// a third or fourth player only follows a filled slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub id: Option<i64>,        // ⇔ results.id (None until inserted)
    pub day: NaiveDate,         // ⇔ results.day (TEXT "YYYY-MM-DD")
    pub slots: Vec<Slot>,       // ⇔ results.playerN / results.scoreN
}

impl MatchResult {
    pub const MIN_SLOTS: usize = 2;
    pub const MAX_SLOTS: usize = 4;

    pub fn new(day: NaiveDate, slots: Vec<Slot>) -> AppResult<Self> {
        let row = Self {
            id: None,
            day,
            slots,
        };
        row.validate()?;
        Ok(row)
    }

    /// Build a typed row from cells laid out like [`RESULT_COLUMNS`],
    /// checking the slot invariants on the way.
    pub fn from_cells(cells: &[Value]) -> AppResult<Self> {
        if cells.len() != RESULT_COLUMNS.len() {
            return Err(AppError::InvalidRow(format!(
                "expected {} cells, got {}",
                RESULT_COLUMNS.len(),
                cells.len()
            )));
        }

        let id = match &cells[0] {
            Value::Null => None,
            Value::Integer(i) => Some(*i),
            other => return Err(AppError::InvalidRow(format!("bad id {other:?}"))),
        };

        let day = match &cells[1] {
            Value::Date(d) => *d,
            Value::Text(s) => date::parse_day(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            Value::Null => return Err(AppError::InvalidRow("the day is required".into())),
            other => return Err(AppError::InvalidRow(format!("bad day {other:?}"))),
        };

        let mut slots = Vec::with_capacity(Self::MAX_SLOTS);
        let mut first_gap: Option<usize> = None;

        for n in 1..=Self::MAX_SLOTS {
            let player = &cells[2 * n];
            let score = &cells[2 * n + 1];

            let slot = match (player, score) {
                (Value::Null, Value::Null) => None,
                (Value::Text(name), Value::Integer(points)) if !name.trim().is_empty() => {
                    Some(Slot {
                        player: name.trim().to_string(),
                        score: *points,
                    })
                }
                (Value::Null, _) | (_, Value::Null) => {
                    return Err(AppError::InvalidRow(format!(
                        "slot {n} needs both a player and a score"
                    )));
                }
                _ => {
                    return Err(AppError::InvalidRow(format!(
                        "slot {n} has an invalid player or score"
                    )));
                }
            };

            match slot {
                Some(s) => {
                    if let Some(gap) = first_gap {
                        return Err(AppError::InvalidRow(format!(
                            "slot {n} is filled but slot {gap} is empty"
                        )));
                    }
                    slots.push(s);
                }
                None => {
                    first_gap.get_or_insert(n);
                }
            }
        }

        let row = Self { id, day, slots };
        row.validate()?;
        Ok(row)
    }

    fn validate(&self) -> AppResult<()> {
        if self.slots.len() < Self::MIN_SLOTS {
            return Err(AppError::InvalidRow(
                "slots 1 and 2 must name a player and a score".into(),
            ));
        }
        if self.slots.len() > Self::MAX_SLOTS {
            return Err(AppError::InvalidRow(format!(
                "at most {} players per match",
                Self::MAX_SLOTS
            )));
        }
        Ok(())
    }

    /// Cells in [`RESULT_COLUMNS`] order, empty slots as nulls.
    pub fn to_cells(&self) -> Vec<Value> {
        let mut cells = Vec::with_capacity(RESULT_COLUMNS.len());
        cells.push(self.id.map(Value::Integer).unwrap_or(Value::Null));
        cells.extend(self.to_params());
        cells
    }

    /// Bind values for `day, player1, score1, ..., player4, score4`.
    pub fn to_params(&self) -> Vec<Value> {
        let mut params = Vec::with_capacity(RESULT_COLUMNS.len() - 1);
        params.push(Value::Date(self.day));
        for n in 0..Self::MAX_SLOTS {
            match self.slots.get(n) {
                Some(slot) => {
                    params.push(Value::Text(slot.player.clone()));
                    params.push(Value::Integer(slot.score));
                }
                None => {
                    params.push(Value::Null);
                    params.push(Value::Null);
                }
            }
        }
        params
    }

    pub fn day_str(&self) -> String {
        date::to_db_str(&self.day)
    }

    pub fn slot(&self, n: usize) -> Option<&Slot> {
        self.slots.get(n.checked_sub(1)?)
    }
}
