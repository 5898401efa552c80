use chrono::{DateTime, NaiveDate, Utc};
use pretty_assertions::assert_eq;
use uuid::Uuid;
use adslot_core::models::{
    booking::{Booking, BookingStatus},
    file::UploadedFile,
};
use adslot_db::{fixture::FixtureRepository, queries};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn booking(day: NaiveDate, time: &str, client: &str, program: Option<&str>) -> Booking {
    let now = Utc::now();
    let folder = format!(
        "{}/{}_client{}{}",
        day.format("%Y%m%d"),
        time.replace(':', ""),
        client,
        program.map(|p| format!("_program{}", p)).unwrap_or_default()
    );
    Booking {
        id: Uuid::new_v4(),
        broadcast_date: day,
        start_time: time.to_string(),
        duration_minutes: 15,
        client_id: client.to_string(),
        program_id: program.map(str::to_string),
        campaign_name: None,
        status: BookingStatus::Confirmed,
        memo: None,
        folder_path: folder,
        created_at: now,
        updated_at: now,
    }
}

fn file(folder: &str, booking_id: Option<Uuid>, uploaded_at: &str) -> UploadedFile {
    UploadedFile {
        file_id: Uuid::new_v4(),
        booking_id,
        file_name: "memo.txt".to_string(),
        file_type: "text/plain".to_string(),
        folder_path: folder.to_string(),
        size_bytes: 10,
        uploaded_at: uploaded_at.parse::<DateTime<Utc>>().unwrap(),
        text_content: None,
    }
}

fn sample() -> Vec<Booking> {
    vec![
        booking(date(2025, 6, 5), "16:00", "121", Some("45")),
        booking(date(2025, 6, 5), "07:30", "123", Some("41")),
        booking(date(2025, 6, 6), "07:30", "123", None),
        booking(date(2025, 6, 4), "13:00", "121", Some("43")),
        booking(date(2025, 6, 5), "07:30", "124", Some("41")),
    ]
}

#[tokio::test]
async fn test_bookings_on_date_sorted_by_start_time() {
    let repo = FixtureRepository::new(sample());

    let times: Vec<String> = queries::bookings_on_date(&repo, date(2025, 6, 5))
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.start_time)
        .collect();
    assert_eq!(times, vec!["07:30", "07:30", "16:00"]);

    assert!(queries::bookings_on_date(&repo, date(2025, 6, 1)).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_bookings_for_client_newest_first() {
    let repo = FixtureRepository::new(sample());

    let dates: Vec<NaiveDate> = queries::bookings_for_client(&repo, "121")
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.broadcast_date)
        .collect();
    assert_eq!(dates, vec![date(2025, 6, 5), date(2025, 6, 4)]);
}

#[tokio::test]
async fn test_bookings_for_program() {
    let repo = FixtureRepository::new(sample());

    let clients: Vec<String> = queries::bookings_for_program(&repo, "41")
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.client_id)
        .collect();
    assert_eq!(clients.len(), 2);
    assert!(clients.contains(&"123".to_string()));
    assert!(clients.contains(&"124".to_string()));
}

#[tokio::test]
async fn test_bookings_in_folder_matches_prefix_only() {
    let repo = FixtureRepository::new(sample());

    let folders: Vec<String> = queries::bookings_in_folder(&repo, "20250605/0730")
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.folder_path)
        .collect();
    assert_eq!(
        folders,
        vec!["20250605/0730_client123_program41", "20250605/0730_client124_program41"]
    );

    // A shorter time prefix must not match other start times.
    assert!(queries::bookings_in_folder(&repo, "20250605/07").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_files_in_folder_newest_first() {
    let repo = FixtureRepository::new(vec![
        file("20250605/0730_client121_program41", None, "2025-05-20T10:00:00Z"),
        file("20250605/0730_client121_program41", None, "2025-05-21T10:00:00Z"),
        file("20250607/0800_client123_program46", None, "2025-05-28T10:00:00Z"),
    ]);

    let files = queries::files_in_folder(&repo, "20250605/0730").await.unwrap();
    assert_eq!(files.len(), 2);
    assert!(files[0].uploaded_at > files[1].uploaded_at);
}

#[tokio::test]
async fn test_files_for_booking_by_id_or_folder() {
    let linked = Uuid::new_v4();
    let repo = FixtureRepository::new(vec![
        file("20250605/0730_client121_program41", None, "2025-05-20T10:00:00Z"),
        file("somewhere/else", Some(linked), "2025-05-22T10:00:00Z"),
        file("20250605/0730_client121", None, "2025-05-23T10:00:00Z"),
        file("error_abc", None, "2025-05-24T10:00:00Z"),
    ]);

    let files = queries::files_for_booking(&repo, linked, "20250605/0730_client121_program41")
        .await
        .unwrap();
    assert_eq!(files.len(), 2);

    // A fallback path never correlates by folder.
    let files = queries::files_for_booking(&repo, Uuid::new_v4(), "error_abc").await.unwrap();
    assert!(files.is_empty());
}
