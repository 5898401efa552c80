use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use adslot_core::{
    errors::SlotError,
    models::program::{Navigator, NavigatorDetailResponse},
};

use super::SearchQuery;
use crate::{middleware::error_handling::AppError, ApiState};

/// Navigators ordered by name reading. `?q=` matches the name or its reading.
pub async fn list_navigators(
    State(state): State<Arc<ApiState>>,
    Query(search): Query<SearchQuery>,
) -> Result<Json<Vec<Navigator>>, AppError> {
    let mut navigators: Vec<Navigator> = state
        .navigators
        .list()
        .await?
        .into_iter()
        .filter(|n| search.matches(&n.name) || search.matches(&n.name_reading))
        .collect();
    navigators.sort_by(|a, b| a.name_reading.cmp(&b.name_reading));

    Ok(Json(navigators))
}

pub async fn get_navigator(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<NavigatorDetailResponse>, AppError> {
    let navigator = state
        .navigators
        .find_by_id(&id)
        .await?
        .ok_or_else(|| SlotError::NotFound(format!("Navigator with ID {} not found", id)))?;

    let mut hosted_programs: Vec<_> = state
        .programs
        .list()
        .await?
        .into_iter()
        .filter(|program| program.is_hosted_by(&navigator.name))
        .collect();
    hosted_programs.sort_by(|a, b| a.start_time.cmp(&b.start_time));

    Ok(Json(NavigatorDetailResponse {
        navigator,
        hosted_programs,
    }))
}
