use std::convert::TryFrom;

use chrono::{DateTime, NaiveDate, Utc};
use eyre::{eyre, Report};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use adslot_core::models::{booking::Booking, file::UploadedFile};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub broadcast_date: NaiveDate,
    pub start_time: String,
    pub duration_minutes: i32,
    pub client_id: String,
    pub program_id: Option<String>,
    pub campaign_name: Option<String>,
    pub status: String,
    pub memo: Option<String>,
    pub folder_path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<DbBooking> for Booking {
    type Error = Report;

    fn try_from(row: DbBooking) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse()
            .map_err(|err| eyre!("Booking {} has a bad status: {}", row.id, err))?;
        let duration_minutes = u32::try_from(row.duration_minutes)
            .map_err(|_| eyre!("Booking {} has a negative duration", row.id))?;

        Ok(Booking {
            id: row.id,
            broadcast_date: row.broadcast_date,
            start_time: row.start_time,
            duration_minutes,
            client_id: row.client_id,
            program_id: row.program_id,
            campaign_name: row.campaign_name,
            status,
            memo: row.memo,
            folder_path: row.folder_path,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUploadedFile {
    pub file_id: Uuid,
    pub booking_id: Option<Uuid>,
    pub file_name: String,
    pub file_type: String,
    pub folder_path: String,
    pub size_bytes: i64,
    pub uploaded_at: DateTime<Utc>,
    pub text_content: Option<String>,
}

impl From<DbUploadedFile> for UploadedFile {
    fn from(row: DbUploadedFile) -> Self {
        UploadedFile {
            file_id: row.file_id,
            booking_id: row.booking_id,
            file_name: row.file_name,
            file_type: row.file_type,
            folder_path: row.folder_path,
            size_bytes: u64::try_from(row.size_bytes).unwrap_or_default(),
            uploaded_at: row.uploaded_at,
            text_content: row.text_content,
        }
    }
}
