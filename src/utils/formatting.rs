//! Formatting utilities used for CLI and export outputs.

/// Golf convention: a handicap below scratch is written with a leading `+`.
pub fn format_handicap(value: f64) -> String {
    if value < 0.0 {
        format!("+{:.1}", value.abs())
    } else {
        format!("{:.1}", value)
    }
}

pub fn format_playing_handicap(value: i64) -> String {
    if value < 0 {
        format!("+{}", value.abs())
    } else {
        value.to_string()
    }
}

pub fn format_bytes(len: usize) -> String {
    if len >= 1024 * 1024 {
        format!("{:.1} MB", len as f64 / (1024.0 * 1024.0))
    } else if len >= 1024 {
        format!("{:.1} KB", len as f64 / 1024.0)
    } else {
        format!("{} B", len)
    }
}
