mod test_utils;

use std::sync::Arc;

use axum::http::StatusCode;
use mockall::predicate;
use pretty_assertions::assert_eq;
use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::{json, Value};
use uuid::Uuid;
use adslot_core::{
    errors::SlotError,
    models::booking::{Booking, BookingStatus},
};
use adslot_db::mock::repositories::{MockBookingRepo, MockFileRepo};
use test_utils::{booking_request, fixture_state, server_with};

#[tokio::test]
async fn test_repository_failure_is_internal_error() {
    let mut bookings = MockBookingRepo::new();
    bookings
        .expect_list()
        .times(1)
        .returning(|| Err(SlotError::Database(eyre::eyre!("connection refused"))));

    let server = server_with(fixture_state().with_bookings(Arc::new(bookings)));
    let response = server.get("/api/bookings").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>()["error"],
        "Database error: connection refused"
    );
}

#[tokio::test]
async fn test_create_passes_derived_booking_to_repository() {
    let mut bookings = MockBookingRepo::new();
    bookings
        .expect_create()
        .withf(|booking| {
            booking.folder_path == "20250605/0730_client123_program41"
                && booking.start_time == "07:30"
                && booking.created_at == booking.updated_at
        })
        .times(1)
        .returning(Ok);

    let server = server_with(fixture_state().with_bookings(Arc::new(bookings)));
    server
        .post("/api/bookings")
        .json(&booking_request("2025-06-05", "07:30", "123", Some("41")))
        .await
        .assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_repository_conflict_is_surfaced() {
    let mut bookings = MockBookingRepo::new();
    bookings
        .expect_create()
        .returning(|booking| Err(SlotError::Conflict(format!("Booking {} already exists", booking.id))));

    let server = server_with(fixture_state().with_bookings(Arc::new(bookings)));
    server
        .post("/api/bookings")
        .json(&booking_request("2025-06-05", "07:30", "123", None))
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_booking_lookup_uses_path_id() {
    let mut bookings = MockBookingRepo::new();
    bookings
        .expect_find_by_id()
        .with(predicate::eq("abc"))
        .times(1)
        .returning(|_| Ok(None));

    let server = server_with(fixture_state().with_bookings(Arc::new(bookings)));
    server.get("/api/bookings/abc").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_file_repository_failure() {
    let mut files = MockFileRepo::new();
    files
        .expect_list()
        .returning(|| Err(SlotError::Database(eyre::eyre!("timeout"))));

    let server = server_with(fixture_state().with_files(Arc::new(files)));
    server
        .get("/api/files/20250605/0730")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_update_checks_transition_before_writing() {
    let mut bookings = MockBookingRepo::new();
    let existing = {
        let mut booking = fixture_booking();
        booking.status = BookingStatus::Broadcasted;
        booking
    };
    let id = existing.id.to_string();
    bookings
        .expect_find_by_id()
        .with(predicate::eq(id.clone()))
        .times(1)
        .returning(move |_| Ok(Some(existing.clone())));
    bookings.expect_update().never();

    let server = server_with(fixture_state().with_bookings(Arc::new(bookings)));
    server
        .put(&format!("/api/bookings/{}", id))
        .json(&json!({ "status": "tentative" }))
        .await
        .assert_status(StatusCode::CONFLICT);
}

fn fixture_booking() -> Booking {
    let created_at = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
    Booking {
        id: Uuid::new_v4(),
        broadcast_date: NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
        start_time: "07:30".to_string(),
        duration_minutes: 15,
        client_id: "123".to_string(),
        program_id: Some("41".to_string()),
        campaign_name: None,
        status: BookingStatus::Confirmed,
        memo: None,
        folder_path: "20250605/0730_client123_program41".to_string(),
        created_at,
        updated_at: created_at,
    }
}
