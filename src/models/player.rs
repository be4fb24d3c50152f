use crate::errors::{AppError, AppResult};
use crate::models::value::Value;
use serde::Serialize;

/// A league member as stored in the `players` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub handicap_initial: f64,
    pub handicap_current: f64,
    pub handicap_playing: i64,
    #[serde(skip)]
    pub image: Option<Vec<u8>>,
}

impl Player {
    /// Build a player from cells laid out like `PLAYER_COLUMNS`.
    pub fn from_cells(cells: &[Value]) -> AppResult<Self> {
        let [id, name, initial, current, playing, image] = cells else {
            return Err(AppError::Other(format!(
                "player row has {} cells",
                cells.len()
            )));
        };

        Ok(Self {
            id: as_int("id", id)?,
            name: match name {
                Value::Text(s) => s.clone(),
                other => return Err(AppError::invalid_field("name", format!("{other:?}"))),
            },
            handicap_initial: as_real("handicap_initial", initial)?,
            handicap_current: as_real("handicap_current", current)?,
            handicap_playing: as_int("handicap_playing", playing)?,
            image: match image {
                Value::Blob(b) => Some(b.clone()),
                _ => None,
            },
        })
    }

    pub fn has_image(&self) -> bool {
        self.image.as_ref().is_some_and(|b| !b.is_empty())
    }

    /// File extension guessed from the image magic bytes.
    pub fn image_extension(&self) -> &'static str {
        match self.image.as_deref() {
            Some([0x89, b'P', b'N', b'G', ..]) => "png",
            Some([0xFF, 0xD8, 0xFF, ..]) => "jpg",
            Some([b'G', b'I', b'F', b'8', ..]) => "gif",
            _ => "bin",
        }
    }

    /// File name used when dumping portraits: `<id>_<name>.<ext>`.
    pub fn image_file_name(&self) -> String {
        let slug: String = self
            .name
            .chars()
            .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
            .collect();
        format!("{}_{}.{}", self.id, slug, self.image_extension())
    }
}

fn as_int(column: &str, v: &Value) -> AppResult<i64> {
    match v {
        Value::Integer(i) => Ok(*i),
        other => Err(AppError::invalid_field(column, format!("{other:?}"))),
    }
}

fn as_real(column: &str, v: &Value) -> AppResult<f64> {
    match v {
        Value::Real(f) => Ok(*f),
        Value::Integer(i) => Ok(*i as f64),
        other => Err(AppError::invalid_field(column, format!("{other:?}"))),
    }
}
