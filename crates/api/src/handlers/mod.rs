/// Month grid and day timetable
pub mod calendar;
/// Booking CRUD and folder path derivation
pub mod bookings;
/// Clients and agencies
pub mod clients;
/// Programs and program notes import
pub mod programs;
/// Navigator profiles
pub mod navigators;
/// Slot folders and uploaded file metadata
pub mod files;

use std::collections::HashMap;

use serde::Deserialize;
use adslot_core::{
    errors::SlotResult,
    models::booking::{Booking, BookingResponse},
};

use crate::ApiState;

/// `?q=` filter shared by the reference data listings.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

impl SearchQuery {
    /// Case-insensitive substring match; an empty query matches everything.
    pub fn matches(&self, value: &str) -> bool {
        match self.q.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(q) => value.to_lowercase().contains(&q.to_lowercase()),
        }
    }
}

/// Attaches client and program names to bookings.
pub(crate) async fn booking_responses(
    state: &ApiState,
    bookings: Vec<Booking>,
) -> SlotResult<Vec<BookingResponse>> {
    if bookings.is_empty() {
        return Ok(Vec::new());
    }

    let clients: HashMap<String, String> = state
        .clients
        .list()
        .await?
        .into_iter()
        .map(|client| (client.client_id, client.client_name))
        .collect();
    let programs: HashMap<String, String> = state
        .programs
        .list()
        .await?
        .into_iter()
        .map(|program| (program.program_id, program.program_name))
        .collect();

    Ok(bookings
        .into_iter()
        .map(|booking| {
            let client_name = clients.get(&booking.client_id).cloned();
            let program_name = booking
                .program_id
                .as_ref()
                .and_then(|id| programs.get(id))
                .cloned();
            BookingResponse::new(booking, client_name, program_name)
        })
        .collect())
}

pub(crate) async fn booking_response(state: &ApiState, booking: Booking) -> SlotResult<BookingResponse> {
    let client_name = state
        .clients
        .find_by_id(&booking.client_id)
        .await?
        .map(|client| client.client_name);
    let program_name = match &booking.program_id {
        Some(id) => state.programs.find_by_id(id).await?.map(|program| program.program_name),
        None => None,
    };
    Ok(BookingResponse::new(booking, client_name, program_name))
}
