#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use chrono::NaiveDate;
use serde_json::{json, Value};
use adslot_api::{app, ApiState};
use adslot_db::fixture::Fixtures;

pub const DEMO_SEED: u64 = 42;

/// Monday 2025-06-02.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

/// Embedded fixtures, no bookings, pinned to [`today`].
pub fn fixture_state() -> ApiState {
    ApiState::in_memory(Fixtures::embedded().unwrap(), DEMO_SEED).with_today(today())
}

pub fn server_with(state: ApiState) -> TestServer {
    TestServer::new(app(Arc::new(state))).unwrap()
}

pub fn server() -> TestServer {
    server_with(fixture_state())
}

pub fn booking_request(date: &str, time: &str, client_id: &str, program_id: Option<&str>) -> Value {
    json!({
        "broadcastDate": date,
        "startTime": time,
        "durationMinutes": 15,
        "clientId": client_id,
        "programId": program_id,
        "campaignName": "夏の新商品プロモーション",
    })
}

/// Creates a booking and returns its JSON.
pub async fn create_booking(
    server: &TestServer,
    date: &str,
    time: &str,
    client_id: &str,
    program_id: Option<&str>,
) -> Value {
    let response = server
        .post("/api/bookings")
        .json(&booking_request(date, time, client_id, program_id))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}
