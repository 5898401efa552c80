mod test_utils;

use axum::http::StatusCode;
use chrono::NaiveDate;
use fake::{faker::company::en::CompanyName, Fake};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use adslot_core::models::program::{NavigatorDetailResponse, ProgramScheduleResponse};
use test_utils::{create_booking, server};

fn ids(values: &[Value], key: &str) -> Vec<String> {
    values
        .iter()
        .map(|v| v[key].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_clients_sorted_by_ranking() {
    let server = server();

    let clients: Vec<Value> = server.get("/api/clients").await.json();

    assert_eq!(
        ids(&clients, "clientId"),
        vec!["121", "123", "124", "122", "126", "125", "127"]
    );
    assert_eq!(clients.last().unwrap()["initialRanking"], 999);
}

#[tokio::test]
async fn test_client_search() {
    let server = server();

    let clients: Vec<Value> = server.get("/api/clients").add_query_param("q", "山田").await.json();
    assert_eq!(ids(&clients, "clientId"), vec!["123"]);

    let clients: Vec<Value> = server.get("/api/clients").add_query_param("q", "  ").await.json();
    assert_eq!(clients.len(), 7);

    let clients: Vec<Value> = server.get("/api/clients").add_query_param("q", "nobody").await.json();
    assert!(clients.is_empty());
}

#[tokio::test]
async fn test_create_client() {
    let server = server();

    let response = server
        .post("/api/clients")
        .json(&json!({ "clientName": " 海辺の食堂 ", "memo": "初回取引" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let client: Value = response.json();

    assert_eq!(client["clientId"], "128");
    assert_eq!(client["clientName"], "海辺の食堂");
    assert_eq!(client["initialRanking"], 999);

    server.get("/api/clients/128").await.assert_status_ok();
}

#[tokio::test]
async fn test_created_clients_get_sequential_ids() {
    let server = server();

    for expected in ["128", "129", "130"] {
        let name: String = CompanyName().fake();
        let client: Value = server
            .post("/api/clients")
            .json(&json!({ "clientName": name, "initialRanking": 10 }))
            .await
            .json();
        assert_eq!(client["clientId"], expected);
        assert_eq!(client["clientName"], name.trim());
    }

    let clients: Vec<Value> = server.get("/api/clients").await.json();
    // Ranking 10 sorts after the fixture rankings but before the default.
    let ids = ids(&clients, "clientId");
    assert_eq!(&ids[6..], &["128", "129", "130", "127"]);
}

#[tokio::test]
async fn test_create_client_errors() {
    let server = server();

    server
        .post("/api/clients")
        .json(&json!({ "clientId": "121", "clientName": "重複" }))
        .await
        .assert_status(StatusCode::CONFLICT);
    server
        .post("/api/clients")
        .json(&json!({ "clientName": "" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server.get("/api/clients/999").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_client_bookings_newest_first() {
    let server = server();
    create_booking(&server, "2025-06-04", "13:00", "121", Some("43")).await;
    create_booking(&server, "2025-06-06", "07:00", "121", Some("41")).await;
    create_booking(&server, "2025-06-05", "07:00", "123", Some("41")).await;

    let bookings: Vec<Value> = server.get("/api/clients/121/bookings").await.json();
    let dates: Vec<&str> = bookings.iter().map(|b| b["broadcastDate"].as_str().unwrap()).collect();
    assert_eq!(dates, vec!["2025-06-06", "2025-06-04"]);

    server.get("/api/clients/999/bookings").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_agencies() {
    let server = server();

    let agencies: Vec<Value> = server.get("/api/agencies").await.json();
    assert_eq!(ids(&agencies, "agencyId"), vec!["202", "201", "203"]);

    let agency: Value = server.get("/api/agencies/202").await.json();
    assert_eq!(agency["agencyName"], "ラジオプランニング");
    server.get("/api/agencies/200").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_programs_sorted_by_name() {
    let server = server();

    let programs: Vec<Value> = server.get("/api/programs").await.json();
    let names: Vec<&str> = programs.iter().map(|p| p["programName"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec![
            "CULTURE CLUB",
            "DAYTIME STATION",
            "DRIVE TIME",
            "GROOVIN'",
            "HOLIDAY EDITION",
            "MIDNIGHT MUSIC",
            "MORNING EDITION",
            "SAUDES",
        ]
    );

    let editions: Vec<Value> = server.get("/api/programs").add_query_param("q", "edition").await.json();
    assert_eq!(ids(&editions, "programId"), vec!["46", "41"]);
}

#[tokio::test]
async fn test_program_detail() {
    let server = server();

    let program: Value = server.get("/api/programs/45").await.json();

    assert_eq!(program["programName"], "DRIVE TIME");
    assert_eq!(program["scheduleLabel"], "月・火・水・木・金曜日 16:00～19:00");
    let hosts: Vec<&str> = program["navigatorProfiles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["name"].as_str().unwrap())
        .collect();
    assert_eq!(hosts, vec!["田中美咲", "佐藤健一"]);

    server.get("/api/programs/99").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_program_schedule() {
    let server = server();

    let schedule: ProgramScheduleResponse = server.get("/api/programs/43/schedule").await.json();

    let date = |m, d| NaiveDate::from_ymd_opt(2025, m, d).unwrap();
    assert_eq!(schedule.upcoming.len(), 8);
    assert_eq!(schedule.past.len(), 8);
    assert_eq!(&schedule.upcoming[..3], &[date(6, 2), date(6, 4), date(6, 9)]);
    assert_eq!(&schedule.past[..3], &[date(5, 28), date(5, 26), date(5, 21)]);
}

#[tokio::test]
async fn test_program_bookings() {
    let server = server();
    create_booking(&server, "2025-06-02", "07:30", "123", Some("41")).await;
    create_booking(&server, "2025-06-02", "13:00", "123", Some("43")).await;

    let bookings: Vec<Value> = server.get("/api/programs/41/bookings").await.json();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["programName"], "MORNING EDITION");
}

#[tokio::test]
async fn test_import_program_notes() {
    let server = server();

    let response = server
        .post("/api/programs/notes")
        .text("# groovin'\n洋楽中心の音楽番組\n\n# UNKNOWN SHOW\n詳細なし\n")
        .await;
    response.assert_status_ok();
    let summary: Value = response.json();

    assert_eq!(summary["parsed"], 2);
    assert_eq!(summary["updated"], json!(["43"]));
    assert_eq!(summary["unmatched"], json!(["UNKNOWN SHOW"]));

    let program: Value = server.get("/api/programs/43").await.json();
    assert_eq!(program["programInfo"], "洋楽中心の音楽番組");

    server
        .post("/api/programs/notes")
        .text("no headings")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_navigators() {
    let server = server();

    let navigators: Vec<Value> = server.get("/api/navigators").await.json();
    assert_eq!(ids(&navigators, "navigatorId"), vec!["n4", "n2", "n3", "n6", "n5", "n1"]);

    let found: Vec<Value> = server.get("/api/navigators").add_query_param("q", "やまだ").await.json();
    assert_eq!(ids(&found, "navigatorId"), vec!["n1"]);

    let detail: NavigatorDetailResponse = server.get("/api/navigators/n2").await.json();
    let hosted: Vec<&str> = detail.hosted_programs.iter().map(|p| p.program_id.as_str()).collect();
    assert_eq!(hosted, vec!["42", "45"]);

    server.get("/api/navigators/n9").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_client_rejects_malformed_ids() {
    let server = server();

    let too_long = "9".repeat(65);
    for client_id in ["1_program2", "7_program", "a/b", too_long.as_str()] {
        server
            .post("/api/clients")
            .json(&json!({ "clientId": client_id, "clientName": "不正ID商事" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    let clients: Vec<Value> = server.get("/api/clients").await.json();
    assert_eq!(clients.len(), 7);
}
