use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tracing::info;
use adslot_core::{
    errors::SlotError,
    models::{
        booking::BookingResponse,
        client::{Agency, Client, CreateClientRequest, DEFAULT_INITIAL_RANKING},
    },
    validation::validate_client,
};
use adslot_db::queries;

use super::{booking_responses, SearchQuery};
use crate::{middleware::error_handling::AppError, ApiState};

/// Clients ordered by initial ranking, optionally filtered by name.
pub async fn list_clients(
    State(state): State<Arc<ApiState>>,
    Query(search): Query<SearchQuery>,
) -> Result<Json<Vec<Client>>, AppError> {
    let mut clients: Vec<Client> = state
        .clients
        .list()
        .await?
        .into_iter()
        .filter(|client| search.matches(&client.client_name))
        .collect();
    clients.sort_by_key(|client| client.initial_ranking);

    Ok(Json(clients))
}

pub async fn get_client(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<Client>, AppError> {
    let client = state
        .clients
        .find_by_id(&id)
        .await?
        .ok_or_else(|| SlotError::NotFound(format!("Client with ID {} not found", id)))?;
    Ok(Json(client))
}

/// Without an explicit id the client gets the next free numeric id.
pub async fn create_client(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<CreateClientRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Client>), AppError> {
    let Json(payload) = payload?;
    validate_client(&payload)?;

    let client_id = match payload.client_id {
        Some(id) => id,
        None => next_numeric_id(state.clients.list().await?.iter().map(|c| c.client_id.as_str())),
    };

    let client = Client {
        client_id,
        client_name: payload.client_name.trim().to_string(),
        initial_ranking: payload.initial_ranking.unwrap_or(DEFAULT_INITIAL_RANKING),
        memo: payload.memo,
        last_updated: Some(Utc::now()),
    };
    let client = state.clients.create(client).await?;
    info!(id = %client.client_id, "Client created");

    Ok((StatusCode::CREATED, Json(client)))
}

pub async fn client_bookings(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    if state.clients.find_by_id(&id).await?.is_none() {
        return Err(SlotError::NotFound(format!("Client with ID {} not found", id)).into());
    }

    let bookings = queries::bookings_for_client(state.bookings.as_ref(), &id).await?;
    Ok(Json(booking_responses(&state, bookings).await?))
}

pub async fn list_agencies(
    State(state): State<Arc<ApiState>>,
    Query(search): Query<SearchQuery>,
) -> Result<Json<Vec<Agency>>, AppError> {
    let mut agencies: Vec<Agency> = state
        .agencies
        .list()
        .await?
        .into_iter()
        .filter(|agency| search.matches(&agency.agency_name))
        .collect();
    agencies.sort_by_key(|agency| agency.initial_ranking);

    Ok(Json(agencies))
}

pub async fn get_agency(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<Agency>, AppError> {
    let agency = state
        .agencies
        .find_by_id(&id)
        .await?
        .ok_or_else(|| SlotError::NotFound(format!("Agency with ID {} not found", id)))?;
    Ok(Json(agency))
}

fn next_numeric_id<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    let max = ids.filter_map(|id| id.parse::<u64>().ok()).max().unwrap_or(0);
    (max + 1).to_string()
}

#[cfg(test)]
mod tests {
    use super::next_numeric_id;

    #[test]
    fn next_id_skips_non_numeric() {
        assert_eq!(next_numeric_id(["121", "abc", "127"].into_iter()), "128");
        assert_eq!(next_numeric_id(std::iter::empty()), "1");
    }
}
