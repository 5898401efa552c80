use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use tracing::{info, warn};
use adslot_core::{
    availability::{broadcast_dates, ScheduleDirection},
    errors::{SlotError, SlotResult},
    models::{
        booking::BookingResponse,
        program::{Program, ProgramDetailResponse, ProgramNotesResponse, ProgramScheduleResponse},
    },
    notes::parse_program_notes,
};
use adslot_db::queries;

use super::{booking_responses, SearchQuery};
use crate::{middleware::error_handling::AppError, ApiState};

const SCHEDULE_DATES: usize = 8;

pub async fn list_programs(
    State(state): State<Arc<ApiState>>,
    Query(search): Query<SearchQuery>,
) -> Result<Json<Vec<Program>>, AppError> {
    let mut programs: Vec<Program> = state
        .programs
        .list()
        .await?
        .into_iter()
        .filter(|program| search.matches(&program.program_name))
        .collect();
    programs.sort_by(|a, b| a.program_name.cmp(&b.program_name));

    Ok(Json(programs))
}

/// Program with the profiles of its navigators, in the program's order.
pub async fn get_program(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<ProgramDetailResponse>, AppError> {
    let program = find_program(&state, &id).await?;
    let navigators = state.navigators.list().await?;

    let navigator_profiles = program
        .navigators
        .iter()
        .filter_map(|name| navigators.iter().find(|n| &n.name == name).cloned())
        .collect();

    Ok(Json(ProgramDetailResponse {
        schedule_label: program.schedule_label(),
        program,
        navigator_profiles,
    }))
}

pub async fn get_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<ProgramScheduleResponse>, AppError> {
    let program = find_program(&state, &id).await?;
    let today = state.today();

    Ok(Json(ProgramScheduleResponse {
        upcoming: broadcast_dates(&program, today, SCHEDULE_DATES, ScheduleDirection::Upcoming),
        past: broadcast_dates(&program, today, SCHEDULE_DATES, ScheduleDirection::Past),
        program_id: program.program_id,
    }))
}

pub async fn program_bookings(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let program = find_program(&state, &id).await?;
    let bookings = queries::bookings_for_program(state.bookings.as_ref(), &program.program_id).await?;
    Ok(Json(booking_responses(&state, bookings).await?))
}

/// Imports a program notes text file. Each `#` heading names a program; the
/// lines under it replace that program's info.
pub async fn import_notes(
    State(state): State<Arc<ApiState>>,
    body: String,
) -> Result<Json<ProgramNotesResponse>, AppError> {
    let notes = parse_program_notes(&body);
    if notes.is_empty() {
        return Err(SlotError::Validation("No program headings found".to_string()).into());
    }

    let programs = state.programs.list().await?;
    let mut updated = Vec::new();
    let mut unmatched = Vec::new();

    for note in &notes {
        let Some(program) = programs
            .iter()
            .find(|p| p.program_name.eq_ignore_ascii_case(&note.program_name))
        else {
            warn!(name = %note.program_name, "Program notes for unknown program");
            unmatched.push(note.program_name.clone());
            continue;
        };

        let mut program = program.clone();
        program.program_info = Some(note.info.clone()).filter(|info| !info.is_empty());
        program.last_updated = Some(Utc::now());
        let program = state.programs.update(program).await?;
        updated.push(program.program_id);
    }

    info!(updated = updated.len(), unmatched = unmatched.len(), "Program notes imported");
    Ok(Json(ProgramNotesResponse {
        parsed: notes.len(),
        updated,
        unmatched,
    }))
}

async fn find_program(state: &ApiState, id: &str) -> SlotResult<Program> {
    state
        .programs
        .find_by_id(id)
        .await?
        .ok_or_else(|| SlotError::NotFound(format!("Program with ID {} not found", id)))
}
