//! # Broadcast availability
//!
//! Decides which calendar days have at least one program on air. A day is
//! eligible when any program's broadcast days contain the weekday token of
//! that date; nothing else (bookings, holidays) is taken into account.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{SlotError, SlotResult},
    models::{
        calendar::{CalendarDay, MonthCalendar},
        program::{BroadcastDay, Program},
    },
};

/// Returns true when at least one program airs on the weekday of `date`.
pub fn has_broadcast_on_date(date: NaiveDate, programs: &[Program]) -> bool {
    let day = BroadcastDay::from_date(date);
    programs.iter().any(|program| program.airs_on(day))
}

/// Builds the Sunday-first grid for one month.
///
/// Eligibility only depends on the weekday, so it is computed at most once
/// per token within a call.
///
/// # Errors
///
/// * `SlotError::Validation` - month outside 1..=12 or a year chrono cannot represent
pub fn month_calendar(year: i32, month: u32, programs: &[Program]) -> SlotResult<MonthCalendar> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| SlotError::Validation(format!("Invalid year/month: {}/{}", year, month)))?;

    let mut eligible: [Option<bool>; 7] = [None; 7];
    let mut cells: Vec<Option<CalendarDay>> = vec![None; BroadcastDay::from_date(first).index()];

    for date in first.iter_days().take_while(|date| date.month() == month) {
        let day = BroadcastDay::from_date(date);
        let has_eligible_programs = *eligible[day.index()]
            .get_or_insert_with(|| programs.iter().any(|program| program.airs_on(day)));

        cells.push(Some(CalendarDay {
            day_of_month: date.day(),
            iso_date: date,
            has_eligible_programs,
        }));
    }

    Ok(MonthCalendar {
        year,
        month,
        weekdays: BroadcastDay::ALL.to_vec(),
        cells,
    })
}

/// Programs airing on the weekday of `date`, ordered by start time.
pub fn programs_on_date(date: NaiveDate, programs: &[Program]) -> Vec<&Program> {
    let day = BroadcastDay::from_date(date);
    let mut todays: Vec<&Program> = programs.iter().filter(|program| program.airs_on(day)).collect();
    todays.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    todays
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleDirection {
    /// Starting today, going forward.
    Upcoming,
    /// Starting yesterday, going back.
    Past,
}

/// The next (or previous) `count` dates on which `program` airs.
pub fn broadcast_dates(
    program: &Program,
    today: NaiveDate,
    count: usize,
    direction: ScheduleDirection,
) -> Vec<NaiveDate> {
    // Without broadcast days the walk below would never find a match.
    if program.broadcast_days.is_empty() || count == 0 {
        return Vec::new();
    }

    type Step = fn(&NaiveDate) -> Option<NaiveDate>;
    let (start, step) = match direction {
        ScheduleDirection::Upcoming => (Some(today), next_day as Step),
        ScheduleDirection::Past => (today.pred_opt(), previous_day as Step),
    };

    std::iter::successors(start, step)
        .filter(|date| program.airs_on(BroadcastDay::from_date(*date)))
        .take(count)
        .collect()
}

fn next_day(date: &NaiveDate) -> Option<NaiveDate> {
    date.succ_opt()
}

fn previous_day(date: &NaiveDate) -> Option<NaiveDate> {
    date.pred_opt()
}
