//! Display helpers for dates, times and long text.

use chrono::NaiveTime;

use crate::folder_path::parse_broadcast_date;

pub const INVALID_DATE_LABEL: &str = "無効な日付";
pub const INVALID_TIME_LABEL: &str = "無効な時間";

/// `2025-06-05` → `2025年06月05日`.
pub fn format_date_jp(value: &str) -> String {
    match parse_broadcast_date(value) {
        Ok(date) => date.format("%Y年%m月%d日").to_string(),
        Err(_) => INVALID_DATE_LABEL.to_string(),
    }
}

/// Normalises a time to `HH:MM`. Seconds are accepted and dropped.
pub fn format_time(value: &str) -> String {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_else(|_| INVALID_TIME_LABEL.to_string())
}

/// Cuts `text` to `max_chars` characters and appends `...` when shortened.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}
