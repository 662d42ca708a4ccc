//! API integration tests
//!
//! These run against a live server with a migrated database:
//! cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Create a service and return its id
async fn create_service(client: &Client, name: &str, duration_min: u32) -> String {
    let response = client
        .post(format!("{}/services", BASE_URL))
        .json(&json!({
            "name": name,
            "duration_min": duration_min,
            "price": "50.00"
        }))
        .send()
        .await
        .expect("Failed to create service");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_str().expect("No id in response").to_string()
}

/// Create a client record and return its id
async fn create_client(client: &Client, name: &str) -> String {
    let response = client
        .post(format!("{}/clients", BASE_URL))
        .json(&json!({
            "tax_id": format!("tax-{}", uuid::Uuid::new_v4()),
            "name": name
        }))
        .send()
        .await
        .expect("Failed to create client");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_str().expect("No id in response").to_string()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_client_crud() {
    let client = Client::new();
    let id = create_client(&client, "Integration Client").await;

    let response = client
        .get(format!("{}/clients/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .put(format!("{}/clients/{}", BASE_URL, id))
        .json(&json!({"phone": "555-0100"}))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["phone"], "555-0100");

    let response = client
        .delete(format!("{}/clients/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_invalid_client_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/clients", BASE_URL))
        .json(&json!({"tax_id": "", "name": ""}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_book_and_conflict() {
    let client = Client::new();
    let service_id = create_service(&client, "Conflict Check Cut", 30).await;
    let client_id = create_client(&client, "Conflict Check Client").await;

    // A weekday far in the future, so the slot is free
    let booking = json!({
        "date": "2031-06-02",
        "start": "10:00",
        "service_id": service_id,
        "client_id": client_id
    });

    let response = client
        .post(format!("{}/appointments", BASE_URL))
        .json(&booking)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "open");
    assert_eq!(body["end_time"], "10:30");

    // Same slot again must conflict
    let response = client
        .post(format!("{}/appointments", BASE_URL))
        .json(&booking)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // An overlapping (not identical) slot conflicts too
    let response = client
        .post(format!("{}/appointments", BASE_URL))
        .json(&json!({
            "date": "2031-06-02",
            "start": "10:15",
            "service_id": service_id,
            "client_id": client_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // Back-to-back is fine
    let response = client
        .post(format!("{}/appointments", BASE_URL))
        .json(&json!({
            "date": "2031-06-02",
            "start": "10:30",
            "service_id": service_id,
            "client_id": client_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
}

#[tokio::test]
#[ignore]
async fn test_concurrent_booking_single_winner() {
    let client = Client::new();
    let service_id = create_service(&client, "Race Check Cut", 30).await;
    let client_id = create_client(&client, "Race Check Client").await;

    let booking = json!({
        "date": "2031-06-11",
        "start": "15:00",
        "service_id": service_id,
        "client_id": client_id
    });

    // Fire both attempts at once; the per-date lock must let exactly one
    // of them commit, on an empty date included
    let send = |body: Value| {
        let client = client.clone();
        async move {
            client
                .post(format!("{}/appointments", BASE_URL))
                .json(&body)
                .send()
                .await
                .expect("Failed to send request")
                .status()
        }
    };
    let (a, b) = tokio::join!(send(booking.clone()), send(booking.clone()));

    let mut statuses = [a.as_u16(), b.as_u16()];
    statuses.sort_unstable();
    assert_eq!(statuses, [201, 409]);

    let response = client
        .get(format!("{}/appointments?date=2031-06-11", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore]
async fn test_booking_on_blocked_weekday_rejected() {
    let client = Client::new();
    let service_id = create_service(&client, "Sunday Check Cut", 30).await;
    let client_id = create_client(&client, "Sunday Check Client").await;

    // 2031-06-01 is a Sunday; default settings block weekday 0
    let response = client
        .post(format!("{}/appointments", BASE_URL))
        .json(&json!({
            "date": "2031-06-01",
            "start": "10:00",
            "service_id": service_id,
            "client_id": client_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_booking_outside_hours_rejected() {
    let client = Client::new();
    let service_id = create_service(&client, "Late Check Cut", 60).await;
    let client_id = create_client(&client, "Late Check Client").await;

    // Default hours end at 18:00; a 60-minute service at 17:30 runs over
    let response = client
        .post(format!("{}/appointments", BASE_URL))
        .json(&json!({
            "date": "2031-06-03",
            "start": "17:30",
            "service_id": service_id,
            "client_id": client_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_reschedule_resets_status() {
    let client = Client::new();
    let service_id = create_service(&client, "Reschedule Cut", 30).await;
    let client_id = create_client(&client, "Reschedule Client").await;

    let response = client
        .post(format!("{}/appointments", BASE_URL))
        .json(&json!({
            "date": "2031-06-04",
            "start": "09:00",
            "service_id": service_id,
            "client_id": client_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    let booked: Value = response.json().await.expect("Failed to parse response");
    let id = booked["id"].as_str().unwrap();

    // Confirm, then move; the move must land back at open
    let response = client
        .post(format!("{}/appointments/{}/status", BASE_URL, id))
        .json(&json!({"status": "confirmed"}))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/appointments/{}/reschedule", BASE_URL, id))
        .json(&json!({"date": "2031-06-04", "start": "11:00"}))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["outcome"], "accepted");
    assert_eq!(body["appointment"]["status"], "open");
    assert_eq!(body["appointment"]["start_time"], "11:00");
}

#[tokio::test]
#[ignore]
async fn test_invalid_status_transition_rejected() {
    let client = Client::new();
    let service_id = create_service(&client, "Transition Cut", 30).await;
    let client_id = create_client(&client, "Transition Client").await;

    let response = client
        .post(format!("{}/appointments", BASE_URL))
        .json(&json!({
            "date": "2031-06-05",
            "start": "09:00",
            "service_id": service_id,
            "client_id": client_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    let booked: Value = response.json().await.expect("Failed to parse response");
    let id = booked["id"].as_str().unwrap();

    // A future appointment cannot be marked done
    let response = client
        .post(format!("{}/appointments/{}/status", BASE_URL, id))
        .json(&json!({"status": "done"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);

    // Canceled is terminal for status changes
    let response = client
        .post(format!("{}/appointments/{}/status", BASE_URL, id))
        .json(&json!({"status": "canceled"}))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/appointments/{}/status", BASE_URL, id))
        .json(&json!({"status": "confirmed"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_reschedule_into_closure_needs_confirmation() {
    let client = Client::new();
    let service_id = create_service(&client, "Closure Cut", 30).await;
    let client_id = create_client(&client, "Closure Client").await;

    // Install a lunch closure, keeping the rest of the settings
    let mut settings: Value = client
        .get(format!("{}/settings", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let saved_closures = settings["daily_closures"].clone();
    settings["daily_closures"] = json!([{"start": "12:00", "end": "14:00"}]);
    let response = client
        .put(format!("{}/settings", BASE_URL))
        .json(&settings)
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/appointments", BASE_URL))
        .json(&json!({
            "date": "2031-06-10",
            "start": "09:00",
            "service_id": service_id,
            "client_id": client_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let booked: Value = response.json().await.expect("Failed to parse response");
    let id = booked["id"].as_str().unwrap();

    // Moving into the closure asks for confirmation and writes nothing
    let response = client
        .post(format!("{}/appointments/{}/reschedule", BASE_URL, id))
        .json(&json!({"date": "2031-06-10", "start": "12:30"}))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["outcome"], "needs_confirmation");

    let response = client
        .get(format!("{}/appointments/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["start_time"], "09:00");

    // The same move with the override flag goes through
    let response = client
        .post(format!("{}/appointments/{}/reschedule", BASE_URL, id))
        .json(&json!({"date": "2031-06-10", "start": "12:30", "override_closure": true}))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["outcome"], "accepted");
    assert_eq!(body["appointment"]["start_time"], "12:30");

    // Restore the previous closures
    settings["daily_closures"] = saved_closures;
    client
        .put(format!("{}/settings", BASE_URL))
        .json(&settings)
        .send()
        .await
        .expect("Failed to send request");
}

#[tokio::test]
#[ignore]
async fn test_canceled_slot_is_rebookable() {
    let client = Client::new();
    let service_id = create_service(&client, "Rebook Cut", 30).await;
    let client_id = create_client(&client, "Rebook Client").await;

    let booking = json!({
        "date": "2031-06-06",
        "start": "14:00",
        "service_id": service_id,
        "client_id": client_id
    });

    let response = client
        .post(format!("{}/appointments", BASE_URL))
        .json(&booking)
        .send()
        .await
        .expect("Failed to send request");
    let booked: Value = response.json().await.expect("Failed to parse response");
    let id = booked["id"].as_str().unwrap();

    let response = client
        .post(format!("{}/appointments/{}/status", BASE_URL, id))
        .json(&json!({"status": "canceled"}))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/appointments", BASE_URL))
        .json(&booking)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
}

#[tokio::test]
#[ignore]
async fn test_day_agenda() {
    let client = Client::new();

    let response = client
        .get(format!("{}/agenda/2031-06-02", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["date"], "2031-06-02");
    // 09:00-18:00 at 30 minutes yields 18 slots
    assert_eq!(body["slots"].as_array().unwrap().len(), 18);
    assert_eq!(body["slots"][0]["time"], "09:00");
}

#[tokio::test]
#[ignore]
async fn test_settings_roundtrip_and_validation() {
    let client = Client::new();

    let response = client
        .get(format!("{}/settings", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let mut settings: Value = response.json().await.expect("Failed to parse response");

    // Inverted hours must be rejected
    settings["work_start"] = json!("19:00");
    let response = client
        .put(format!("{}/settings", BASE_URL))
        .json(&settings)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    settings["work_start"] = json!("09:00");
    let response = client
        .put(format!("{}/settings", BASE_URL))
        .json(&settings)
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_service_delete_guard() {
    let client = Client::new();
    let service_id = create_service(&client, "Guarded Cut", 30).await;
    let client_id = create_client(&client, "Guard Client").await;

    let response = client
        .post(format!("{}/appointments", BASE_URL))
        .json(&json!({
            "date": "2031-06-09",
            "start": "09:00",
            "service_id": service_id,
            "client_id": client_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    // The service is now referenced and must not be deletable
    let response = client
        .delete(format!("{}/services/{}", BASE_URL, service_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}
