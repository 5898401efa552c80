use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::format::format_date_jp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Tentative,
    Broadcasted,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Tentative => "tentative",
            BookingStatus::Broadcasted => "broadcasted",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn label_ja(self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "確定",
            BookingStatus::Tentative => "仮予約",
            BookingStatus::Broadcasted => "放送済み",
            BookingStatus::Cancelled => "キャンセル",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Broadcasted | BookingStatus::Cancelled)
    }

    /// tentative → confirmed → broadcasted, cancelled from tentative or
    /// confirmed. Keeping the current status is always allowed.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        use BookingStatus::*;

        if self == next {
            return true;
        }
        matches!(
            (self, next),
            (Tentative, Confirmed) | (Confirmed, Broadcasted) | (Tentative, Cancelled) | (Confirmed, Cancelled)
        )
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = crate::errors::SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed" => Ok(BookingStatus::Confirmed),
            "tentative" => Ok(BookingStatus::Tentative),
            "broadcasted" => Ok(BookingStatus::Broadcasted),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(crate::errors::SlotError::Validation(format!(
                "Unknown booking status: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub broadcast_date: NaiveDate,
    /// `HH:MM`, 24-hour.
    pub start_time: String,
    pub duration_minutes: u32,
    pub client_id: String,
    pub program_id: Option<String>,
    pub campaign_name: Option<String>,
    pub status: BookingStatus,
    pub memo: Option<String>,
    pub folder_path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub broadcast_date: String,
    pub start_time: String,
    pub duration_minutes: u32,
    pub client_id: String,
    pub program_id: Option<String>,
    pub campaign_name: Option<String>,
    #[serde(default = "default_status")]
    pub status: BookingStatus,
    pub memo: Option<String>,
}

fn default_status() -> BookingStatus {
    BookingStatus::Confirmed
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    pub broadcast_date: Option<String>,
    pub start_time: Option<String>,
    pub duration_minutes: Option<u32>,
    pub client_id: Option<String>,
    pub program_id: Option<String>,
    pub campaign_name: Option<String>,
    pub status: Option<BookingStatus>,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    #[serde(flatten)]
    pub booking: Booking,
    pub broadcast_date_label: String,
    pub status_label: String,
    pub client_name: Option<String>,
    pub program_name: Option<String>,
}

impl BookingResponse {
    pub fn new(booking: Booking, client_name: Option<String>, program_name: Option<String>) -> Self {
        Self {
            broadcast_date_label: format_date_jp(&booking.broadcast_date.to_string()),
            status_label: booking.status.label_ja().to_string(),
            booking,
            client_name,
            program_name,
        }
    }
}
