use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::booking::BookingResponse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub file_id: Uuid,
    pub booking_id: Option<Uuid>,
    pub file_name: String,
    pub file_type: String,
    /// Slot folder the file belongs to, see [`crate::folder_path`].
    pub folder_path: String,
    #[serde(default)]
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
    #[serde(default)]
    pub text_content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterFileRequest {
    pub booking_id: Option<Uuid>,
    pub file_name: String,
    pub file_type: String,
    /// Required when no booking is given; otherwise taken from the booking.
    pub folder_path: Option<String>,
    #[serde(default)]
    pub size_bytes: u64,
    pub text_content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentFolder {
    /// `YYYYMMDD`
    pub date: String,
    /// `HHMM`
    pub time: String,
    pub date_label: String,
    pub client_id: String,
    pub client_name: String,
    pub program_id: String,
    pub program_name: String,
    pub folder_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotFolderResponse {
    pub date: String,
    pub time: String,
    pub date_label: String,
    pub time_label: String,
    pub files: Vec<UploadedFile>,
    pub bookings: Vec<BookingResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderPathResponse {
    pub folder_path: String,
    pub correlatable: bool,
}
