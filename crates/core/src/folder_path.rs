//! # Slot folder paths
//!
//! Every booking slot maps to a folder path of the form
//!
//! ```text
//! <YYYYMMDD>/<HHMM>_client<clientId>[_program<programId>]
//! ```
//!
//! Uploaded files are associated with a booking through this path rather than
//! a foreign key, so the format must stay stable across versions. The path is
//! a pure function of its inputs; identical slots always share one folder.
//!
//! Derivation never fails. Inputs that cannot be parsed produce a path with
//! the [`FALLBACK_PREFIX`] and a random token, which callers must treat as
//! "correlation unavailable".

use chrono::{DateTime, NaiveDate, NaiveTime};
use tracing::warn;
use uuid::Uuid;

use crate::errors::{SlotError, SlotResult};

pub const FALLBACK_PREFIX: &str = "error_";

/// Derives the folder path for a slot.
///
/// `broadcast_date` is an ISO date (`2025-06-05`, an RFC 3339 timestamp is
/// also accepted) and `start_time` is 24-hour `HH:MM`. An empty
/// `program_id` is treated like `None`.
///
/// # Example
///
/// ```
/// use adslot_core::folder_path::derive_folder_path;
///
/// assert_eq!(
///     derive_folder_path("2025-06-05", "07:30", "123", Some("45")),
///     "20250605/0730_client123_program45"
/// );
/// ```
pub fn derive_folder_path(
    broadcast_date: &str,
    start_time: &str,
    client_id: &str,
    program_id: Option<&str>,
) -> String {
    let parsed = parse_broadcast_date(broadcast_date)
        .and_then(|date| parse_start_time(start_time).map(|time| (date, time)));

    match parsed {
        Ok((date, time)) => folder_path_for(date, time, client_id, program_id),
        Err(err) => {
            warn!(
                broadcast_date,
                start_time,
                client_id,
                error = %err,
                "Folder path derivation failed, using fallback path"
            );
            fallback_path()
        }
    }
}

/// Folder path from already-parsed slot attributes.
pub fn folder_path_for(
    date: NaiveDate,
    time: NaiveTime,
    client_id: &str,
    program_id: Option<&str>,
) -> String {
    let mut path = format!("{}_client{}", folder_prefix(date, time), client_id);
    if let Some(program_id) = program_id.filter(|id| !id.is_empty()) {
        path.push_str("_program");
        path.push_str(program_id);
    }
    path
}

/// `YYYYMMDD/HHMM`, shared by every folder of one date and start time.
pub fn folder_prefix(date: NaiveDate, time: NaiveTime) -> String {
    format!("{}/{}", date.format("%Y%m%d"), time.format("%H%M"))
}

pub fn is_fallback(path: &str) -> bool {
    path.starts_with(FALLBACK_PREFIX)
}

/// True when `path` is a real correlation key that files can be looked up by.
pub fn is_correlatable(path: &str) -> bool {
    !is_fallback(path) && SlotFolder::parse(path).is_some()
}

fn fallback_path() -> String {
    format!("{}{}", FALLBACK_PREFIX, Uuid::new_v4().simple())
}

pub fn parse_broadcast_date(value: &str) -> SlotResult<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| SlotError::Validation(format!("Unparseable broadcast date: {}", value)))
}

pub fn parse_start_time(value: &str) -> SlotResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| SlotError::Validation(format!("Unparseable start time: {}", value)))
}

/// Parses the `YYYYMMDD` and `HHMM` segments used in folder URLs.
pub fn parse_folder_segments(date: &str, time: &str) -> SlotResult<(NaiveDate, NaiveTime)> {
    let invalid = || SlotError::Validation(format!("Invalid slot folder: {}/{}", date, time));

    let date = fixed_digits(date, &[4, 2, 2])
        .and_then(|parts| NaiveDate::from_ymd_opt(parts[0] as i32, parts[1], parts[2]))
        .ok_or_else(invalid)?;
    let time = fixed_digits(time, &[2, 2])
        .and_then(|parts| NaiveTime::from_hms_opt(parts[0], parts[1], 0))
        .ok_or_else(invalid)?;

    Ok((date, time))
}

fn fixed_digits(value: &str, widths: &[usize]) -> Option<Vec<u32>> {
    if value.len() != widths.iter().sum::<usize>() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut offset = 0;
    widths
        .iter()
        .map(|width| {
            let part = value[offset..offset + width].parse().ok();
            offset += width;
            part
        })
        .collect()
}

/// Components of a well-formed folder path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotFolder {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub client_id: String,
    pub program_id: Option<String>,
}

impl SlotFolder {
    pub fn parse(path: &str) -> Option<Self> {
        let (date, rest) = path.split_once('/')?;
        if rest.len() < 4 || !rest.is_char_boundary(4) {
            return None;
        }
        let (time, rest) = rest.split_at(4);
        let (date, time) = parse_folder_segments(date, time).ok()?;

        let ids = rest.strip_prefix("_client")?;
        let (client_id, program_id) = match ids.split_once("_program") {
            Some((client, program)) if !program.is_empty() => (client, Some(program.to_string())),
            Some(_) => return None,
            None => (ids, None),
        };
        if client_id.is_empty() {
            return None;
        }

        Some(Self {
            date,
            time,
            client_id: client_id.to_string(),
            program_id,
        })
    }

    pub fn path(&self) -> String {
        folder_path_for(self.date, self.time, &self.client_id, self.program_id.as_deref())
    }

    pub fn prefix(&self) -> String {
        folder_prefix(self.date, self.time)
    }
}
