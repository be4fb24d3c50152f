//! Pending edits to the results table, as produced by the editing grid.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;

/// Partial row: column key → new value. Keys may be SQL names, labels or
/// short keys (`score2`, `score 2`, `s2`).
pub type RowPatch = BTreeMap<String, serde_json::Value>;

/// A batch of staged edits.
///
/// Every row index refers to the snapshot that was on screen when the
/// edits were staged, never to persisted ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Changeset {
    #[serde(alias = "edited_rows")]
    pub edited: BTreeMap<usize, RowPatch>,
    #[serde(alias = "added_rows")]
    pub added: Vec<RowPatch>,
    #[serde(alias = "deleted_rows")]
    pub deleted: Vec<usize>,
}

impl Changeset {
    pub fn from_json_str(s: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read a changeset from a file path, or from stdin when `source` is `-`.
    pub fn read_from(source: &str) -> AppResult<Self> {
        let mut raw = String::new();
        if source == "-" {
            std::io::stdin().read_to_string(&mut raw)?;
        } else {
            raw = std::fs::read_to_string(source).map_err(|e| {
                AppError::InvalidChangeset(format!("cannot read '{source}': {e}"))
            })?;
        }
        Self::from_json_str(&raw)
    }

    pub fn is_empty(&self) -> bool {
        self.edited.is_empty() && self.added.is_empty() && self.deleted.is_empty()
    }

    pub fn with_edit(mut self, index: usize, patch: RowPatch) -> Self {
        self.edited.entry(index).or_default().extend(patch);
        self
    }

    pub fn with_added(mut self, row: RowPatch) -> Self {
        self.added.push(row);
        self
    }

    pub fn with_deleted(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.deleted.extend(indices);
        self
    }

    /// Human summary, also written to the audit log.
    pub fn describe(&self) -> String {
        format!(
            "{} edited, {} added, {} deleted",
            self.edited.len(),
            self.added.len(),
            self.deleted.len()
        )
    }
}

/// Parse a command-line cell value: `null` or an empty string clear the
/// cell, integers and decimals become numbers, anything else is text.
pub fn parse_cli_value(raw: &str) -> serde_json::Value {
    let trimmed = raw.trim();

    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
        return serde_json::Value::Null;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return serde_json::Value::from(i);
    }
    if let Ok(f) = trimmed.parse::<f64>()
        && let Some(n) = serde_json::Number::from_f64(f)
    {
        return serde_json::Value::Number(n);
    }
    serde_json::Value::String(trimmed.to_string())
}

/// Parse `FIELD=VALUE` pairs into a row patch.
pub fn parse_assignments(pairs: &[String]) -> AppResult<RowPatch> {
    let mut patch = RowPatch::new();
    for pair in pairs {
        let (field, value) = pair.split_once('=').ok_or_else(|| {
            AppError::InvalidChangeset(format!("expected FIELD=VALUE, got '{pair}'"))
        })?;
        patch.insert(field.trim().to_string(), parse_cli_value(value));
    }
    Ok(patch)
}
