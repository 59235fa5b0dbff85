use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use booking_cell::models::{BookingError, BookingRequest};
use booking_cell::services::booking::BookingService;
use shared_utils::test_utils::{MockBackendResponses, TestConfig};

fn service_for(mock_server: &MockServer) -> BookingService {
    let mut config = TestConfig::default().to_app_config();
    config.backend_base_url = mock_server.uri();
    BookingService::new(&config)
}

fn future_date(days: i64) -> String {
    (Utc::now().date_naive() + Duration::days(days)).to_string()
}

fn booking_request(doctor_id: &str, branch: &str, date: &str, time: &str) -> BookingRequest {
    BookingRequest {
        first_name: "Amina".to_string(),
        last_name: "Hassan".to_string(),
        age: 34,
        contact: "0712345678".to_string(),
        email: "amina@example.com".to_string(),
        residence: "Kilimani".to_string(),
        reason: "Dermatology".to_string(),
        branch: branch.to_string(),
        doctor_id: doctor_id.to_string(),
        date: date.to_string(),
        time: time.to_string(),
    }
}

#[tokio::test]
async fn create_books_a_free_slot() {
    let mock_server = MockServer::start().await;
    let date = future_date(14);

    Mock::given(method("GET"))
        .and(path("/appointments"))
        .and(query_param("branch", "Westlands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(
            MockBackendResponses::appointment("7", "d1", "Westlands", &date, "09:00"),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let appointment = service_for(&mock_server)
        .create(booking_request("d1", "Westlands", &date, "09:00"))
        .await
        .expect("booking should succeed");

    assert_eq!(appointment.id, "7");
    assert_eq!(appointment.time, "09:00");
}

#[tokio::test]
async fn create_rejects_a_double_booked_slot() {
    let mock_server = MockServer::start().await;
    let date = future_date(14);

    Mock::given(method("GET"))
        .and(path("/appointments"))
        .and(query_param("branch", "Westlands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockBackendResponses::appointment("1", "d1", "Westlands", &date, "09:00"),
        ])))
        .mount(&mock_server)
        .await;

    // A rejected booking must never reach the backend.
    Mock::given(method("POST"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = service_for(&mock_server)
        .create(booking_request("d1", "Westlands", &date, "09:00"))
        .await;

    assert_matches!(result, Err(BookingError::SlotTaken));
}

#[tokio::test]
async fn create_allows_same_slot_for_another_doctor() {
    let mock_server = MockServer::start().await;
    let date = future_date(14);

    Mock::given(method("GET"))
        .and(path("/appointments"))
        .and(query_param("branch", "Westlands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockBackendResponses::appointment("1", "d1", "Westlands", &date, "09:00"),
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(
            MockBackendResponses::appointment("8", "d2", "Westlands", &date, "09:00"),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let appointment = service_for(&mock_server)
        .create(booking_request("d2", "Westlands", &date, "09:00"))
        .await
        .expect("a different doctor is free to take the slot");

    assert_eq!(appointment.id, "8");
}

#[tokio::test]
async fn create_rejects_lunch_hour_before_any_request() {
    let mock_server = MockServer::start().await;
    let date = future_date(14);

    let result = service_for(&mock_server)
        .create(booking_request("d1", "Westlands", &date, "13:00"))
        .await;

    assert_matches!(result, Err(BookingError::InvalidTime(_)));
    assert!(
        mock_server.received_requests().await.unwrap().is_empty(),
        "validation failures must not touch the backend"
    );
}

#[tokio::test]
async fn create_rejects_past_dates_before_any_request() {
    let mock_server = MockServer::start().await;
    let yesterday = (Utc::now().date_naive() - Duration::days(1)).to_string();

    let result = service_for(&mock_server)
        .create(booking_request("d1", "Westlands", &yesterday, "09:00"))
        .await;

    assert_matches!(result, Err(BookingError::InvalidDate(_)));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_may_keep_its_own_slot() {
    let mock_server = MockServer::start().await;
    let date = future_date(14);
    let existing = MockBackendResponses::appointment("1", "d1", "Westlands", &date, "09:00");

    Mock::given(method("GET"))
        .and(path("/appointments/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(existing.clone()))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/appointments"))
        .and(query_param("branch", "Westlands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([existing])))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/appointments/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            MockBackendResponses::appointment("1", "d1", "Westlands", &date, "09:00"),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let appointment = service_for(&mock_server)
        .update("1", booking_request("d1", "Westlands", &date, "09:00"))
        .await
        .expect("an appointment may keep its own slot");

    assert_eq!(appointment.id, "1");
}

#[tokio::test]
async fn update_rejects_a_slot_held_by_another_appointment() {
    let mock_server = MockServer::start().await;
    let date = future_date(14);

    Mock::given(method("GET"))
        .and(path("/appointments/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            MockBackendResponses::appointment("2", "d1", "Westlands", &date, "10:00"),
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/appointments"))
        .and(query_param("branch", "Westlands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockBackendResponses::appointment("1", "d1", "Westlands", &date, "09:00"),
            MockBackendResponses::appointment("2", "d1", "Westlands", &date, "10:00"),
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/appointments/2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = service_for(&mock_server)
        .update("2", booking_request("d1", "Westlands", &date, "09:00"))
        .await;

    assert_matches!(result, Err(BookingError::SlotTaken));
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found() {
    let mock_server = MockServer::start().await;
    let date = future_date(14);

    Mock::given(method("GET"))
        .and(path("/appointments/9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/appointments/9"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = service_for(&mock_server)
        .update("9", booking_request("d1", "Westlands", &date, "09:00"))
        .await;

    assert_matches!(result, Err(BookingError::NotFound));
}

#[tokio::test]
async fn cancel_requires_confirmation() {
    let mock_server = MockServer::start().await;

    let result = service_for(&mock_server).cancel("1", false).await;

    assert_matches!(result, Err(BookingError::ConfirmationRequired));
    assert!(
        mock_server.received_requests().await.unwrap().is_empty(),
        "an unconfirmed cancel must leave the record set untouched"
    );
}

#[tokio::test]
async fn confirmed_cancel_removes_the_appointment() {
    let mock_server = MockServer::start().await;
    let date = future_date(14);

    Mock::given(method("GET"))
        .and(path("/appointments/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            MockBackendResponses::appointment("1", "d1", "Westlands", &date, "09:00"),
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/appointments/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = service_for(&mock_server).cancel("1", true).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn cancel_of_missing_id_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/appointments/9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/appointments/9"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = service_for(&mock_server).cancel("9", true).await;

    assert_matches!(result, Err(BookingError::NotFound));
}

#[tokio::test]
async fn list_narrows_to_a_branch() {
    let mock_server = MockServer::start().await;
    let date = future_date(7);

    Mock::given(method("GET"))
        .and(path("/appointments"))
        .and(query_param("branch", "Karen"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockBackendResponses::appointment("3", "d2", "Karen", &date, "11:00"),
        ])))
        .mount(&mock_server)
        .await;

    let appointments = service_for(&mock_server)
        .list(Some("Karen"))
        .await
        .expect("list should load");

    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].branch, "Karen");
}

#[tokio::test]
async fn get_returns_the_record_for_edit_prefill() {
    let mock_server = MockServer::start().await;
    let date = future_date(7);

    Mock::given(method("GET"))
        .and(path("/appointments/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            MockBackendResponses::appointment("5", "d1", "Westlands", &date, "14:00"),
        ))
        .mount(&mock_server)
        .await;

    let appointment = service_for(&mock_server)
        .get("5")
        .await
        .expect("record should load");

    assert_eq!(appointment.id, "5");
    assert_eq!(appointment.first_name, "Amina");
    assert_eq!(appointment.time, "14:00");
}
