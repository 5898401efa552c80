//! Input checks for booking and client forms.
//!
//! Referential checks (does the client exist?) need a repository and are
//! done by the API layer; everything that can be decided from the request
//! alone lives here.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::{
    errors::{SlotError, SlotResult},
    models::{
        booking::{BookingStatus, CreateBookingRequest, UpdateBookingRequest},
        client::CreateClientRequest,
    },
};

/// Longest booking accepted: one full broadcast day.
pub const MAX_DURATION_MINUTES: u32 = 1440;

/// Longest client or program id; matches the `VARCHAR(64)` columns.
pub const MAX_ID_LENGTH: usize = 64;

static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date pattern"));
static TIME_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("valid time pattern"));
// `_` and `/` are folder-path separators and must never appear inside an id.
static ID_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]{1,64}$").expect("valid id pattern"));

/// `YYYY-MM-DD` naming a real calendar date.
pub fn validate_broadcast_date(value: &str) -> SlotResult<NaiveDate> {
    if !DATE_SHAPE.is_match(value) {
        return Err(SlotError::Validation(format!(
            "Invalid date format (expected YYYY-MM-DD): {}",
            value
        )));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| SlotError::Validation(format!("Invalid calendar date: {}", value)))
}

/// `HH:MM`, 24-hour.
pub fn validate_start_time(value: &str) -> SlotResult<NaiveTime> {
    if !TIME_SHAPE.is_match(value) {
        return Err(SlotError::Validation(format!(
            "Invalid time format (expected HH:MM): {}",
            value
        )));
    }
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| SlotError::Validation(format!("Invalid time of day: {}", value)))
}

pub fn validate_duration(minutes: u32) -> SlotResult<u32> {
    if minutes < 1 {
        return Err(SlotError::Validation(
            "Duration must be at least 1 minute".to_string(),
        ));
    }
    if minutes > MAX_DURATION_MINUTES {
        return Err(SlotError::Validation(format!(
            "Duration must be at most {} minutes",
            MAX_DURATION_MINUTES
        )));
    }
    Ok(minutes)
}

/// Client and program ids: ASCII letters, digits and `-`, at most
/// [`MAX_ID_LENGTH`] characters.
pub fn validate_id(field: &str, value: &str) -> SlotResult<()> {
    if value.trim().is_empty() {
        return Err(SlotError::Validation(format!("{} must not be empty", field)));
    }
    if !ID_SHAPE.is_match(value) {
        return Err(SlotError::Validation(format!(
            "{} may only contain letters, digits and '-' (max {} characters): {}",
            field, MAX_ID_LENGTH, value
        )));
    }
    Ok(())
}

/// Parsed date and time of a validated booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedSlot {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

pub fn validate_create_booking(request: &CreateBookingRequest) -> SlotResult<ValidatedSlot> {
    validate_id("clientId", &request.client_id)?;
    if let Some(program_id) = &request.program_id {
        validate_id("programId", program_id)?;
    }
    validate_duration(request.duration_minutes)?;

    Ok(ValidatedSlot {
        date: validate_broadcast_date(&request.broadcast_date)?,
        time: validate_start_time(&request.start_time)?,
    })
}

/// Checks only the fields present in the update.
pub fn validate_update_booking(request: &UpdateBookingRequest) -> SlotResult<()> {
    if let Some(client_id) = &request.client_id {
        validate_id("clientId", client_id)?;
    }
    // An empty program id detaches the program.
    if let Some(program_id) = request.program_id.as_deref().filter(|id| !id.is_empty()) {
        validate_id("programId", program_id)?;
    }
    if let Some(minutes) = request.duration_minutes {
        validate_duration(minutes)?;
    }
    if let Some(date) = &request.broadcast_date {
        validate_broadcast_date(date)?;
    }
    if let Some(time) = &request.start_time {
        validate_start_time(time)?;
    }
    Ok(())
}

pub fn check_status_transition(from: BookingStatus, to: BookingStatus) -> SlotResult<()> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(SlotError::InvalidTransition { from, to })
    }
}

pub fn validate_client(request: &CreateClientRequest) -> SlotResult<()> {
    if request.client_name.trim().is_empty() {
        return Err(SlotError::Validation("clientName must not be empty".to_string()));
    }
    if let Some(client_id) = &request.client_id {
        validate_id("clientId", client_id)?;
    }
    Ok(())
}
