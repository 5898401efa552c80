use pretty_assertions::assert_eq;
use rstest::rstest;
use adslot_core::{
    errors::SlotError,
    models::{
        booking::{BookingStatus, CreateBookingRequest, UpdateBookingRequest},
        client::CreateClientRequest,
    },
    folder_path::derive_folder_path,
    validation::{
        check_status_transition, validate_broadcast_date, validate_client,
        validate_create_booking, validate_duration, validate_id, validate_start_time,
        validate_update_booking, MAX_DURATION_MINUTES,
    },
};

fn booking_request() -> CreateBookingRequest {
    CreateBookingRequest {
        broadcast_date: "2025-06-05".to_string(),
        start_time: "07:30".to_string(),
        duration_minutes: 15,
        client_id: "123".to_string(),
        program_id: Some("45".to_string()),
        campaign_name: None,
        status: BookingStatus::Tentative,
        memo: None,
    }
}

#[test]
fn test_valid_booking_request() {
    let slot = validate_create_booking(&booking_request()).expect("request should be valid");

    assert_eq!(slot.date.to_string(), "2025-06-05");
    assert_eq!(slot.time.format("%H:%M").to_string(), "07:30");
}

#[rstest]
#[case("2025/06/05")]
#[case("2025-6-5")]
#[case("2025-02-29")]
#[case("20250605")]
fn test_invalid_broadcast_date(#[case] date: &str) {
    assert!(matches!(validate_broadcast_date(date), Err(SlotError::Validation(_))));
}

#[rstest]
#[case("２０２５-06-05")]
#[case("2025-06-05\n")]
#[case(" 2025-06-05")]
fn test_broadcast_date_rejects_non_ascii_and_padding(#[case] date: &str) {
    assert!(matches!(validate_broadcast_date(date), Err(SlotError::Validation(_))));
}

#[rstest]
#[case("7:30")]
#[case("07:30:00")]
#[case("24:00")]
#[case("07:60")]
fn test_invalid_start_time(#[case] time: &str) {
    assert!(matches!(validate_start_time(time), Err(SlotError::Validation(_))));
}

#[test]
fn test_booking_request_field_errors() {
    let mut request = booking_request();
    request.duration_minutes = 0;
    assert!(matches!(validate_create_booking(&request), Err(SlotError::Validation(_))));

    let mut request = booking_request();
    request.client_id = "  ".to_string();
    assert!(matches!(validate_create_booking(&request), Err(SlotError::Validation(_))));

    let mut request = booking_request();
    request.program_id = Some(String::new());
    assert!(matches!(validate_create_booking(&request), Err(SlotError::Validation(_))));
}

#[test]
fn test_update_only_checks_present_fields() {
    assert!(validate_update_booking(&UpdateBookingRequest::default()).is_ok());

    let update = UpdateBookingRequest {
        start_time: Some("7:30".to_string()),
        ..Default::default()
    };
    assert!(validate_update_booking(&update).is_err());
}

#[test]
fn test_status_transition_check() {
    assert!(check_status_transition(BookingStatus::Tentative, BookingStatus::Confirmed).is_ok());

    match check_status_transition(BookingStatus::Broadcasted, BookingStatus::Tentative) {
        Err(SlotError::InvalidTransition { from, to }) => {
            assert_eq!(from, BookingStatus::Broadcasted);
            assert_eq!(to, BookingStatus::Tentative);
        }
        other => panic!("expected invalid transition, got {:?}", other),
    }
}

#[test]
fn test_client_validation() {
    let request = CreateClientRequest {
        client_id: None,
        client_name: "山田商店".to_string(),
        initial_ranking: None,
        memo: None,
    };
    assert!(validate_client(&request).is_ok());

    let blank = CreateClientRequest {
        client_name: " ".to_string(),
        ..request
    };
    assert!(validate_client(&blank).is_err());
}

#[rstest]
#[case(1, true)]
#[case(MAX_DURATION_MINUTES, true)]
#[case(0, false)]
#[case(MAX_DURATION_MINUTES + 1, false)]
#[case(3_000_000_000, false)]
fn test_duration_bounds(#[case] minutes: u32, #[case] valid: bool) {
    assert_eq!(validate_duration(minutes).is_ok(), valid);
}

#[rstest]
#[case("123", true)]
#[case("abc-42", true)]
#[case("1_program2", false)]
#[case("7_program", false)]
#[case("a/b", false)]
#[case("山田", false)]
#[case("", false)]
fn test_id_shape(#[case] id: &str, #[case] valid: bool) {
    assert_eq!(validate_id("clientId", id).is_ok(), valid);
}

#[test]
fn test_id_length_limit() {
    assert!(validate_id("programId", &"9".repeat(64)).is_ok());
    assert!(validate_id("programId", &"9".repeat(65)).is_err());
}

#[test]
fn test_separator_ids_cannot_collide_with_program_segment() {
    // With `_` allowed, these two slots would share one folder.
    assert_eq!(
        derive_folder_path("2025-06-05", "07:30", "1_program2", None),
        derive_folder_path("2025-06-05", "07:30", "1", Some("2"))
    );

    let request = CreateClientRequest {
        client_id: Some("1_program2".to_string()),
        client_name: "衝突商事".to_string(),
        initial_ranking: None,
        memo: None,
    };
    assert!(matches!(validate_client(&request), Err(SlotError::Validation(_))));

    let mut booking = booking_request();
    booking.client_id = "1_program2".to_string();
    booking.program_id = None;
    assert!(matches!(validate_create_booking(&booking), Err(SlotError::Validation(_))));

    let mut booking = booking_request();
    booking.program_id = Some("45/46".to_string());
    assert!(matches!(validate_create_booking(&booking), Err(SlotError::Validation(_))));
}

#[test]
fn test_update_checks_program_id_shape_but_allows_detaching() {
    let detach = UpdateBookingRequest {
        program_id: Some(String::new()),
        ..Default::default()
    };
    assert!(validate_update_booking(&detach).is_ok());

    let bad = UpdateBookingRequest {
        program_id: Some("4_5".to_string()),
        ..Default::default()
    };
    assert!(matches!(validate_update_booking(&bad), Err(SlotError::Validation(_))));

    let too_long = UpdateBookingRequest {
        duration_minutes: Some(MAX_DURATION_MINUTES + 1),
        ..Default::default()
    };
    assert!(validate_update_booking(&too_long).is_err());
}
