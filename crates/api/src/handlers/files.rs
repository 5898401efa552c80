use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use adslot_core::{
    errors::SlotError,
    folder_path::{folder_prefix, parse_folder_segments, SlotFolder},
    format::format_date_jp,
    models::file::{RecentFolder, RegisterFileRequest, SlotFolderResponse, UploadedFile},
};
use adslot_db::{
    queries,
    seed::{demo_rng, recent_folders},
};

use super::booking_responses;
use crate::{middleware::error_handling::AppError, ApiState};

/// Recently used slot folders. Generated from the configured seed, so the
/// listing is stable for a given day.
pub async fn recent(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<RecentFolder>>, AppError> {
    let programs = state.programs.list().await?;
    let clients = state.clients.list().await?;

    let mut rng = demo_rng(state.demo_seed);
    Ok(Json(recent_folders(state.today(), &programs, &clients, &mut rng)))
}

/// Files and bookings sharing one date and start time.
pub async fn slot_folder(
    State(state): State<Arc<ApiState>>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<SlotFolderResponse>, AppError> {
    let Path((date, time)) = path?;
    let (slot_date, slot_time) = parse_folder_segments(&date, &time)?;
    let prefix = folder_prefix(slot_date, slot_time);

    let files = queries::files_in_folder(state.files.as_ref(), &prefix).await?;
    let bookings = queries::bookings_in_folder(state.bookings.as_ref(), &prefix).await?;

    Ok(Json(SlotFolderResponse {
        date,
        time,
        date_label: format_date_jp(&slot_date.to_string()),
        time_label: slot_time.format("%H:%M").to_string(),
        files,
        bookings: booking_responses(&state, bookings).await?,
    }))
}

/// Registers metadata for an uploaded file. The folder comes from the booking
/// when one is given, otherwise it must be a well-formed slot folder.
pub async fn register_file(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<RegisterFileRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UploadedFile>), AppError> {
    let Json(payload) = payload?;
    if payload.file_name.trim().is_empty() {
        return Err(SlotError::Validation("fileName must not be empty".to_string()).into());
    }

    let folder_path = match (payload.booking_id, payload.folder_path) {
        (Some(booking_id), _) => {
            state
                .bookings
                .find_by_id(&booking_id.to_string())
                .await?
                .ok_or_else(|| {
                    SlotError::NotFound(format!("Booking with ID {} not found", booking_id))
                })?
                .folder_path
        }
        (None, Some(path)) => match SlotFolder::parse(&path) {
            Some(folder) => folder.path(),
            None => {
                return Err(SlotError::Validation(format!("Not a slot folder: {}", path)).into());
            }
        },
        (None, None) => {
            return Err(
                SlotError::Validation("bookingId or folderPath is required".to_string()).into(),
            );
        }
    };

    let file = UploadedFile {
        file_id: Uuid::new_v4(),
        booking_id: payload.booking_id,
        file_name: payload.file_name,
        file_type: payload.file_type,
        folder_path,
        size_bytes: payload.size_bytes,
        uploaded_at: Utc::now(),
        text_content: payload.text_content,
    };
    let file = state.files.create(file).await?;
    info!(id = %file.file_id, folder = %file.folder_path, "File registered");

    Ok((StatusCode::CREATED, Json(file)))
}
