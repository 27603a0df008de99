//! API integration tests
//!
//! These run against a live server in the development environment
//! (bootstrap admin from `config/development.toml`).
//! Run with: cargo test -- --ignored --test-threads=1

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

const BASE_URL: &str = "http://localhost:5000";
const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD: &str = "admin123";

async fn login(client: &Client, path: &str, email: &str, password: &str) -> reqwest::Response {
    client
        .post(format!("{}{}", BASE_URL, path))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to send login request")
}

/// Token of the bootstrap administrator
async fn admin_token(client: &Client) -> String {
    let response = login(client, "/api/admin/login", ADMIN_EMAIL, ADMIN_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse login response");
    body["data"]["token"].as_str().expect("No token in response").to_string()
}

/// Create a faculty account with a unique e-mail and return (id, token)
async fn faculty(client: &Client, admin: &str, name: &str) -> (String, String) {
    let email = format!("{}.{}@college.edu", name.to_lowercase(), Uuid::new_v4().simple());
    let password = "faculty-pass";

    let response = client
        .post(format!("{}/api/admin/faculty", BASE_URL))
        .bearer_auth(admin)
        .json(&json!({
            "name": name,
            "email": email,
            "branch": "cse",
            "password": password
        }))
        .send()
        .await
        .expect("Failed to create faculty");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["data"]["id"].as_str().expect("No id").to_string();

    let response = login(client, "/api/auth/login", &email, password).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["token"].as_str().expect("No token").to_string();

    (id, token)
}

/// Create a classroom with a unique label and return its id
async fn classroom(client: &Client, admin: &str) -> String {
    let response = client
        .post(format!("{}/api/admin/classrooms", BASE_URL))
        .bearer_auth(admin)
        .json(&json!({
            "branch": "CSE",
            "label": format!("207-{}", Uuid::new_v4().simple()),
            "smartboards": ["SB-1"]
        }))
        .send()
        .await
        .expect("Failed to create classroom");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["data"]["id"].as_str().expect("No id").to_string()
}

async fn book(client: &Client, token: &str, classroom_id: &str, date: &str, slot: &str) -> reqwest::Response {
    client
        .post(format!("{}/api/bookings", BASE_URL))
        .bearer_auth(token)
        .json(&json!({
            "classroom_id": classroom_id,
            "date": date,
            "time_slot": slot
        }))
        .send()
        .await
        .expect("Failed to send booking request")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client.get(BASE_URL).send().await.expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["ok"], true);
    assert_eq!(body["service"], "smartboard-booking");
}

#[tokio::test]
#[ignore]
async fn test_system_status_reports_database() {
    let client = Client::new();

    let response = client
        .get(format!("{}/api/system/status", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["database"], "Connected");
}

#[tokio::test]
#[ignore]
async fn test_admin_login_invalid_credentials() {
    let client = Client::new();

    let response = login(&client, "/api/admin/login", ADMIN_EMAIL, "wrong").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert!(body.get("data").is_none());
}

#[tokio::test]
#[ignore]
async fn test_faculty_login_invalid_credentials() {
    let client = Client::new();
    let admin = admin_token(&client).await;
    let email = format!("wrongpass.{}@college.edu", Uuid::new_v4().simple());

    let response = client
        .post(format!("{}/api/admin/faculty", BASE_URL))
        .bearer_auth(&admin)
        .json(&json!({ "name": "Wrong Pass", "email": email, "branch": "CSE", "password": "secret1" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = login(&client, "/api/auth/login", &email, "not-the-password").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "AuthenticationError");
    assert!(body["data"]["token"].is_null());
}

#[tokio::test]
#[ignore]
async fn test_deactivated_faculty_cannot_login() {
    let client = Client::new();
    let admin = admin_token(&client).await;
    let email = format!("gone.{}@college.edu", Uuid::new_v4().simple());

    let response = client
        .post(format!("{}/api/admin/faculty", BASE_URL))
        .bearer_auth(&admin)
        .json(&json!({ "name": "Gone", "email": email, "branch": "ECE", "password": "secret1" }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["data"]["id"].as_str().expect("No id").to_string();

    let response = login(&client, "/api/auth/login", &email, "secret1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["token"].as_str().expect("No token").to_string();

    let response = client
        .delete(format!("{}/api/admin/faculty/{}", BASE_URL, id))
        .bearer_auth(&admin)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = login(&client, "/api/auth/login", &email, "secret1").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // A token issued before deactivation is no longer accepted
    let response = client
        .get(format!("{}/api/bookings/mine", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore]
async fn test_booking_scenario() {
    let client = Client::new();
    let admin = admin_token(&client).await;
    let room = classroom(&client, &admin).await;
    let (_, alice) = faculty(&client, &admin, "Alice").await;
    let (_, bob) = faculty(&client, &admin, "Bob").await;

    // A books the slot
    let response = book(&client, &alice, &room, "2024-03-01", "10:00-11:00").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse response");
    let booking_id = body["data"]["id"].as_str().expect("No id").to_string();
    assert_eq!(body["data"]["faculty_name"], "Alice");

    // B is refused the same slot
    let response = book(&client, &bob, &room, "2024-03-01", "10:00-11:00").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "ConflictError");

    // B may not delete A's booking
    let response = client
        .delete(format!("{}/api/bookings/{}", BASE_URL, booking_id))
        .bearer_auth(&bob)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // A deletes it and the slot is free again
    let response = client
        .delete(format!("{}/api/bookings/{}", BASE_URL, booking_id))
        .bearer_auth(&alice)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = book(&client, &bob, &room, "2024-03-01", "10:00-11:00").await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
#[ignore]
async fn test_admin_can_delete_any_booking() {
    let client = Client::new();
    let admin = admin_token(&client).await;
    let room = classroom(&client, &admin).await;
    let (_, alice) = faculty(&client, &admin, "Alice").await;

    let response = book(&client, &alice, &room, "2024-03-02", "09:00-10:00").await;
    let body: Value = response.json().await.expect("Failed to parse response");
    let booking_id = body["data"]["id"].as_str().expect("No id").to_string();

    let response = client
        .delete(format!("{}/api/admin/bookings/{}", BASE_URL, booking_id))
        .bearer_auth(&admin)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .delete(format!("{}/api/admin/bookings/{}", BASE_URL, booking_id))
        .bearer_auth(&admin)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_concurrent_bookings_for_one_slot() {
    let client = Client::new();
    let admin = admin_token(&client).await;
    let room = classroom(&client, &admin).await;
    let (_, alice) = faculty(&client, &admin, "Alice").await;

    let mut handles = Vec::new();
    for _ in 0..16 {
        let client = client.clone();
        let token = alice.clone();
        let room = room.clone();
        handles.push(tokio::spawn(async move {
            book(&client, &token, &room, "2024-03-05", "14:00-15:00").await.status()
        }));
    }

    let mut created = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.expect("Task panicked") {
            StatusCode::CREATED => created += 1,
            StatusCode::CONFLICT => conflicts += 1,
            other => panic!("Unexpected status {}", other),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(conflicts, 15);
}

#[tokio::test]
#[ignore]
async fn test_deleting_classroom_keeps_bookings() {
    let client = Client::new();
    let admin = admin_token(&client).await;
    let room = classroom(&client, &admin).await;
    let (_, alice) = faculty(&client, &admin, "Alice").await;

    let response = book(&client, &alice, &room, "2024-03-06", "11:00-12:00").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = client
        .delete(format!("{}/api/admin/classrooms/{}", BASE_URL, room))
        .bearer_auth(&admin)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .get(format!("{}/api/bookings/mine", BASE_URL))
        .bearer_auth(&alice)
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let bookings = body["data"].as_array().expect("data is not an array");
    assert!(bookings.iter().any(|b| b["classroom_id"] == room.as_str()));
}

#[tokio::test]
#[ignore]
async fn test_duplicate_smartboard_conflicts() {
    let client = Client::new();
    let admin = admin_token(&client).await;
    let room = format!("Lab-{}", Uuid::new_v4().simple());
    let payload = json!({ "number": "SB-9", "room": room, "department": "ece" });

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let response = client
            .post(format!("{}/api/admin/smartboards", BASE_URL))
            .bearer_auth(&admin)
            .json(&payload)
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), expected);
    }
}

async fn dashboard(client: &Client) -> Value {
    let response = client
        .get(format!("{}/api/dashboard/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["data"].clone()
}

#[tokio::test]
#[ignore]
async fn test_dashboard_stats_read_is_stable() {
    let client = Client::new();

    let first = dashboard(&client).await;
    let second = dashboard(&client).await;

    assert!(first["classrooms"].is_number());
    assert!(first["bookings"].is_number());
    assert!(first["facultyMembers"].is_number());
    assert_eq!(first, second);
}

#[tokio::test]
#[ignore]
async fn test_dashboard_stats_track_row_counts() {
    let client = Client::new();
    let admin = admin_token(&client).await;

    let before = dashboard(&client).await;

    let room = classroom(&client, &admin).await;
    let (_, alice) = faculty(&client, &admin, "Alice").await;
    let response = book(&client, &alice, &room, "2024-03-07", "12:00-13:00").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let after = dashboard(&client).await;

    for field in ["classrooms", "bookings", "facultyMembers"] {
        let before = before[field].as_i64().expect("count is not an integer");
        let after = after[field].as_i64().expect("count is not an integer");
        assert_eq!(after, before + 1, "{} should grow by one", field);
    }
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/api/bookings/mine", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
