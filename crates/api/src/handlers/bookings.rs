use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use adslot_core::{
    errors::{SlotError, SlotResult},
    folder_path::{derive_folder_path, folder_path_for, is_correlatable},
    models::{
        booking::{Booking, BookingResponse, CreateBookingRequest, UpdateBookingRequest},
        file::{FolderPathResponse, UploadedFile},
    },
    validation::{
        check_status_transition, validate_broadcast_date, validate_create_booking,
        validate_id, validate_start_time, validate_update_booking,
    },
};
use adslot_db::queries;

use super::{booking_response, booking_responses};
use crate::{middleware::error_handling::AppError, ApiState};

#[derive(Debug, Deserialize)]
pub struct BookingListQuery {
    /// `YYYY-MM-DD`
    pub date: Option<String>,
}

pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
    query: Result<Query<BookingListQuery>, QueryRejection>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let Query(query) = query?;

    let bookings = match query.date.as_deref() {
        Some(date) => {
            let date = validate_broadcast_date(date)?;
            queries::bookings_on_date(state.bookings.as_ref(), date).await?
        }
        None => {
            let mut bookings = state.bookings.list().await?;
            bookings.sort_by(|a, b| {
                a.broadcast_date
                    .cmp(&b.broadcast_date)
                    .then_with(|| a.start_time.cmp(&b.start_time))
            });
            bookings
        }
    };

    Ok(Json(booking_responses(&state, bookings).await?))
}

pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    let Json(payload) = payload?;
    let slot = validate_create_booking(&payload)?;

    let program_id = payload.program_id.filter(|id| !id.is_empty());
    ensure_client(&state, &payload.client_id).await?;
    if let Some(program_id) = &program_id {
        ensure_program(&state, program_id).await?;
    }

    let now = Utc::now();
    let booking = Booking {
        id: Uuid::new_v4(),
        broadcast_date: slot.date,
        start_time: slot.time.format("%H:%M").to_string(),
        duration_minutes: payload.duration_minutes,
        folder_path: folder_path_for(slot.date, slot.time, &payload.client_id, program_id.as_deref()),
        client_id: payload.client_id,
        program_id,
        campaign_name: payload.campaign_name,
        status: payload.status,
        memo: payload.memo,
        created_at: now,
        updated_at: now,
    };

    let booking = state.bookings.create(booking).await?;
    info!(id = %booking.id, folder = %booking.folder_path, "Booking created");

    Ok((StatusCode::CREATED, Json(booking_response(&state, booking).await?)))
}

pub async fn get_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = find_booking(&state, &id).await?;
    Ok(Json(booking_response(&state, booking).await?))
}

/// Applies the present fields, checks the status move and re-derives the
/// folder path from the resulting slot.
pub async fn update_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateBookingRequest>, JsonRejection>,
) -> Result<Json<BookingResponse>, AppError> {
    let Json(payload) = payload?;
    validate_update_booking(&payload)?;

    let mut booking = find_booking(&state, &id).await?;

    if let Some(status) = payload.status {
        check_status_transition(booking.status, status)?;
        booking.status = status;
    }
    if let Some(client_id) = payload.client_id {
        ensure_client(&state, &client_id).await?;
        booking.client_id = client_id;
    }
    // An empty program id detaches the booking from its program.
    if let Some(program_id) = payload.program_id {
        if program_id.is_empty() {
            booking.program_id = None;
        } else {
            ensure_program(&state, &program_id).await?;
            booking.program_id = Some(program_id);
        }
    }
    if let Some(date) = payload.broadcast_date {
        booking.broadcast_date = validate_broadcast_date(&date)?;
    }
    if let Some(time) = payload.start_time {
        booking.start_time = validate_start_time(&time)?.format("%H:%M").to_string();
    }
    if let Some(minutes) = payload.duration_minutes {
        booking.duration_minutes = minutes;
    }
    if payload.campaign_name.is_some() {
        booking.campaign_name = payload.campaign_name;
    }
    if payload.memo.is_some() {
        booking.memo = payload.memo;
    }

    booking.folder_path = derive_folder_path(
        &booking.broadcast_date.to_string(),
        &booking.start_time,
        &booking.client_id,
        booking.program_id.as_deref(),
    );
    booking.updated_at = Utc::now();

    let booking = state.bookings.update(booking).await?;
    info!(id = %booking.id, status = %booking.status, "Booking updated");

    Ok(Json(booking_response(&state, booking).await?))
}

pub async fn booking_files(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<UploadedFile>>, AppError> {
    let booking = find_booking(&state, &id).await?;
    let files =
        queries::files_for_booking(state.files.as_ref(), booking.id, &booking.folder_path).await?;
    Ok(Json(files))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderPathQuery {
    pub broadcast_date: String,
    pub start_time: String,
    pub client_id: String,
    pub program_id: Option<String>,
}

/// Never fails on bad dates or times; those come back as a fallback path
/// marked not correlatable. Malformed ids are rejected.
pub async fn folder_path(
    query: Result<Query<FolderPathQuery>, QueryRejection>,
) -> Result<Json<FolderPathResponse>, AppError> {
    let Query(query) = query?;
    validate_id("clientId", &query.client_id)?;
    if let Some(program_id) = &query.program_id {
        validate_id("programId", program_id)?;
    }

    let folder_path = derive_folder_path(
        &query.broadcast_date,
        &query.start_time,
        &query.client_id,
        query.program_id.as_deref(),
    );
    Ok(Json(FolderPathResponse {
        correlatable: is_correlatable(&folder_path),
        folder_path,
    }))
}

async fn find_booking(state: &ApiState, id: &str) -> SlotResult<Booking> {
    state
        .bookings
        .find_by_id(id)
        .await?
        .ok_or_else(|| SlotError::NotFound(format!("Booking with ID {} not found", id)))
}

async fn ensure_client(state: &ApiState, client_id: &str) -> SlotResult<()> {
    match state.clients.find_by_id(client_id).await? {
        Some(_) => Ok(()),
        None => Err(SlotError::Validation(format!("Unknown client: {}", client_id))),
    }
}

async fn ensure_program(state: &ApiState, program_id: &str) -> SlotResult<()> {
    match state.programs.find_by_id(program_id).await? {
        Some(_) => Ok(()),
        None => Err(SlotError::Validation(format!("Unknown program: {}", program_id))),
    }
}
