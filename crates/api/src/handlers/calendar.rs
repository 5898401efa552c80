use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use chrono::NaiveDate;
use tracing::debug;
use adslot_core::{
    availability::{month_calendar, programs_on_date},
    errors::SlotError,
    format::format_date_jp,
    models::{
        booking::BookingStatus,
        calendar::{DayTimetable, MonthCalendar, TimetableSlot},
        program::BroadcastDay,
    },
};
use adslot_db::queries;

use super::booking_responses;
use crate::{middleware::error_handling::AppError, ApiState};

pub async fn get_month(
    State(state): State<Arc<ApiState>>,
    path: Result<Path<(i32, u32)>, PathRejection>,
) -> Result<Json<MonthCalendar>, AppError> {
    let Path((year, month)) = path?;
    let programs = state.programs.list().await?;

    let calendar = month_calendar(year, month, &programs)?;
    debug!(
        year,
        month,
        eligible = calendar.days().filter(|day| day.has_eligible_programs).count(),
        "Built month calendar"
    );

    Ok(Json(calendar))
}

/// Programs airing on one day, each with the bookings placed in it.
pub async fn get_day(
    State(state): State<Arc<ApiState>>,
    path: Result<Path<(i32, u32, u32)>, PathRejection>,
) -> Result<Json<DayTimetable>, AppError> {
    let Path((year, month, day)) = path?;
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        SlotError::Validation(format!("Invalid date: {}-{}-{}", year, month, day))
    })?;

    let programs = state.programs.list().await?;
    let bookings = queries::bookings_on_date(state.bookings.as_ref(), date).await?;
    let bookings = booking_responses(&state, bookings).await?;

    let slots = programs_on_date(date, &programs)
        .into_iter()
        .map(|program| {
            let bookings: Vec<_> = bookings
                .iter()
                .filter(|b| b.booking.program_id.as_deref() == Some(program.program_id.as_str()))
                .cloned()
                .collect();
            TimetableSlot {
                program_id: program.program_id.clone(),
                program_name: program.program_name.clone(),
                start_time: program.start_time.clone(),
                end_time: program.end_time.clone(),
                is_booked: bookings
                    .iter()
                    .any(|b| b.booking.status != BookingStatus::Cancelled),
                bookings,
            }
        })
        .collect();

    Ok(Json(DayTimetable {
        date,
        date_label: format_date_jp(&date.to_string()),
        weekday: BroadcastDay::from_date(date),
        slots,
    }))
}
