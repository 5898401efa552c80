use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::booking::BookingResponse;
use super::program::BroadcastDay;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub day_of_month: u32,
    pub iso_date: NaiveDate,
    pub has_eligible_programs: bool,
}

/// Sunday-first month grid. `None` cells pad the week before the 1st.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    pub weekdays: Vec<BroadcastDay>,
    pub cells: Vec<Option<CalendarDay>>,
}

impl MonthCalendar {
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.cells.iter().flatten()
    }

    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|cell| cell.is_none()).count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableSlot {
    pub program_id: String,
    pub program_name: String,
    pub start_time: String,
    pub end_time: String,
    pub is_booked: bool,
    pub bookings: Vec<BookingResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTimetable {
    pub date: NaiveDate,
    pub date_label: String,
    pub weekday: BroadcastDay,
    pub slots: Vec<TimetableSlot>,
}
