//! Typed cell values shared by snapshots, changesets and SQL parameters.

use crate::errors::{AppError, AppResult};
use crate::models::schema::{ColumnDef, ColumnType};
use crate::utils::date;
use chrono::NaiveDate;
use rusqlite::types::{Null, ToSql, ToSqlOutput, ValueRef};

// 2^63 is not representable as i64, so the upper bound is exclusive.
const I64_MIN_F: f64 = i64::MIN as f64;
const I64_MAX_F: f64 = i64::MAX as f64;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Date(NaiveDate),
    Blob(Vec<u8>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Convert a raw SQLite cell into the column's declared type.
    pub fn from_sql(col: &ColumnDef, raw: ValueRef<'_>) -> AppResult<Self> {
        let value = match raw {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) if col.ty == ColumnType::Real => Value::Real(i as f64),
            ValueRef::Integer(i) => Value::Integer(i),
            ValueRef::Real(f) => Value::Real(f),
            ValueRef::Text(bytes) => {
                let text = std::str::from_utf8(bytes)
                    .map_err(|e| AppError::invalid_field(col.name, e.to_string()))?;
                if col.ty == ColumnType::Date {
                    Value::Date(
                        date::parse_day(text)
                            .ok_or_else(|| AppError::InvalidDate(text.to_string()))?,
                    )
                } else {
                    Value::Text(text.to_string())
                }
            }
            ValueRef::Blob(bytes) => Value::Blob(bytes.to_vec()),
        };
        Ok(value)
    }

    /// Convert a user-supplied JSON field into the column's declared type.
    ///
    /// Empty strings count as null, so clearing a cell in the grid or
    /// passing `player3=` on the command line empties the slot.
    pub fn from_json(col: &ColumnDef, raw: &serde_json::Value) -> AppResult<Self> {
        use serde_json::Value as Json;

        if let Json::String(s) = raw
            && s.trim().is_empty()
        {
            return Ok(Value::Null);
        }

        let value = match (col.ty, raw) {
            (_, Json::Null) => Value::Null,

            (ColumnType::Integer, Json::Number(n)) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && (I64_MIN_F..I64_MAX_F).contains(&f) => {
                        Value::Integer(f as i64)
                    }
                    _ => return Err(AppError::invalid_field(col.name, "expected an integer")),
                },
            },
            (ColumnType::Integer, Json::String(s)) => Value::Integer(
                s.trim()
                    .parse()
                    .map_err(|_| AppError::invalid_field(col.name, format!("'{s}' is not an integer")))?,
            ),

            (ColumnType::Real, Json::Number(n)) => Value::Real(
                n.as_f64()
                    .ok_or_else(|| AppError::invalid_field(col.name, "expected a number"))?,
            ),
            (ColumnType::Real, Json::String(s)) => Value::Real(
                s.trim()
                    .parse()
                    .map_err(|_| AppError::invalid_field(col.name, format!("'{s}' is not a number")))?,
            ),

            (ColumnType::Text, Json::String(s)) => Value::Text(s.trim().to_string()),
            (ColumnType::Text, Json::Number(n)) => Value::Text(n.to_string()),

            (ColumnType::Date, Json::String(s)) => Value::Date(
                date::parse_day(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            ),

            (ColumnType::Blob, _) => {
                return Err(AppError::invalid_field(
                    col.name,
                    "binary columns cannot be edited",
                ));
            }

            (_, other) => {
                return Err(AppError::invalid_field(
                    col.name,
                    format!("unexpected value {other}"),
                ));
            }
        };

        Ok(value)
    }

    /// Plain-text rendering for tables and CSV.
    pub fn display(&self, date_format: &str) -> String {
        match self {
            Value::Null => String::new(),
            Value::Integer(i) => i.to_string(),
            Value::Real(f) => format!("{f:.1}"),
            Value::Text(s) => s.clone(),
            Value::Date(d) => date::display_day(d, date_format),
            Value::Blob(b) => format!("<{} bytes>", b.len()),
        }
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::from(Null),
            Value::Integer(i) => ToSqlOutput::from(*i),
            Value::Real(f) => ToSqlOutput::from(*f),
            Value::Text(s) => ToSqlOutput::from(s.as_str()),
            Value::Date(d) => ToSqlOutput::from(date::to_db_str(d)),
            Value::Blob(b) => ToSqlOutput::from(b.as_slice()),
        })
    }
}
