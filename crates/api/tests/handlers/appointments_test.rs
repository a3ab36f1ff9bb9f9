use apptsched_core::{
    errors::SchedulingError,
    models::{
        appointment::{Appointment, AppointmentCreateRequest},
        time_slot::{BookedSlot, TimeSlot},
    },
};
use axum::http::StatusCode;
use chrono::{DateTime, Duration, Utc};
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};

use crate::test_utils::{at, stored_appointment, TestContext};

fn create_request(starts_at: &str, ends_at: &str) -> AppointmentCreateRequest {
    AppointmentCreateRequest {
        trainer_id: 1,
        user_id: 1,
        starts_at: Some(at(starts_at)),
        ends_at: Some(at(ends_at)),
    }
}

#[test_log::test(tokio::test)]
async fn test_create_appointment_within_business_hours() {
    let request = create_request("2022-03-17T19:00:00Z", "2022-03-17T19:30:00Z");
    let stored = stored_appointment(1, &request);
    let returned = stored.clone();

    let mut ctx = TestContext::new();
    ctx.appointment_repo
        .expect_persist_appointment()
        .with(eq(request))
        .times(1)
        .returning(move |_| Ok(returned.clone()));
    let server = ctx.into_server();

    let response = server
        .post("/v1/appointments")
        .json(&json!({
            "user_id": 1,
            "trainer_id": 1,
            "starts_at": "2022-03-17T19:00:00Z",
            "ends_at": "2022-03-17T19:30:00Z"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Appointment>(), stored);
}

#[rstest]
#[case::missing_user_id(
    json!({"trainer_id": 1, "starts_at": "2022-03-17T19:00:00Z", "ends_at": "2022-03-17T19:30:00Z"}),
    "invalid_identifier"
)]
#[case::missing_trainer_id(
    json!({"user_id": 1, "starts_at": "2022-03-17T19:00:00Z", "ends_at": "2022-03-17T19:30:00Z"}),
    "invalid_identifier"
)]
#[case::missing_times(json!({"user_id": 1, "trainer_id": 1}), "missing_time_range")]
#[case::outside_business_hours(
    json!({"user_id": 1, "trainer_id": 1, "starts_at": "2022-03-17T08:00:00Z", "ends_at": "2022-03-17T08:30:00Z"}),
    "outside_business_hours"
)]
#[case::forty_five_minutes(
    json!({"user_id": 1, "trainer_id": 1, "starts_at": "2022-03-17T19:00:00Z", "ends_at": "2022-03-17T19:45:00Z"}),
    "invalid_duration"
)]
#[case::quarter_past(
    json!({"user_id": 1, "trainer_id": 1, "starts_at": "2022-03-17T19:15:00Z", "ends_at": "2022-03-17T19:45:00Z"}),
    "misaligned_slot"
)]
#[case::saturday(
    json!({"user_id": 1, "trainer_id": 1, "starts_at": "2022-03-19T19:00:00Z", "ends_at": "2022-03-19T19:30:00Z"}),
    "outside_business_hours"
)]
#[tokio::test]
async fn test_create_appointment_rejects_invalid_payload(
    #[case] payload: Value,
    #[case] expected_type: &str,
) {
    let mut ctx = TestContext::new();
    ctx.appointment_repo.expect_persist_appointment().never();
    let server = ctx.into_server();

    let response = server.post("/v1/appointments").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["type"], expected_type);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_create_appointment_repository_failure() {
    let mut ctx = TestContext::new();
    ctx.appointment_repo
        .expect_persist_appointment()
        .times(1)
        .returning(|_| {
            Err(SchedulingError::Repository(eyre::eyre!(
                "duplicate key value violates unique constraint"
            )))
        });
    let server = ctx.into_server();

    let response = server
        .post("/v1/appointments")
        .json(&create_request("2022-03-17T19:00:00Z", "2022-03-17T19:30:00Z"))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["type"], "repository_failure");
}

#[tokio::test]
async fn test_list_available_returns_open_slots() {
    let start = at("2022-03-17T19:00:00Z");
    let end = at("2022-03-17T20:00:00Z");

    let mut ctx = TestContext::new();
    ctx.appointment_repo
        .expect_fetch_booked_slots()
        .with(eq(1_i64), eq(start), eq(end))
        .times(1)
        .returning(move |_, _, _| Ok(Vec::new()));
    let server = ctx.into_server();

    let response = server
        .get("/v1/appointments/available")
        .add_query_param("trainer_id", 1)
        .add_query_param("starts_at", "2022-03-17T19:00:00Z")
        .add_query_param("ends_at", "2022-03-17T20:00:00Z")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Vec<TimeSlot>>(),
        vec![
            TimeSlot::new(1, start, Duration::minutes(30)),
            TimeSlot::new(1, at("2022-03-17T19:30:00Z"), Duration::minutes(30)),
        ]
    );
}

#[tokio::test]
async fn test_list_available_skips_booked_slot() {
    let start = at("2022-03-17T19:00:00Z");

    let mut ctx = TestContext::new();
    ctx.appointment_repo
        .expect_fetch_booked_slots()
        .times(1)
        .returning(move |_, _, _| {
            Ok(vec![BookedSlot {
                starts_at: start,
                ends_at: start + Duration::minutes(30),
            }])
        });
    let server = ctx.into_server();

    let response = server
        .get("/v1/appointments/available")
        .add_query_param("trainer_id", 1)
        .add_query_param("starts_at", "2022-03-17T19:00:00Z")
        .add_query_param("ends_at", "2022-03-17T20:00:00Z")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(
        body,
        json!([{
            "trainer_id": 1,
            "starts_at": "2022-03-17T19:30:00Z",
            "ends_at": "2022-03-17T20:00:00Z"
        }])
    );
}

#[tokio::test]
async fn test_list_available_requires_time_range() {
    let mut ctx = TestContext::new();
    ctx.appointment_repo.expect_fetch_booked_slots().never();
    let server = ctx.into_server();

    let response = server
        .get("/v1/appointments/available")
        .add_query_param("trainer_id", 1)
        .add_query_param("starts_at", "2022-03-17T19:00:00Z")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["type"], "missing_time_range");
}

#[tokio::test]
async fn test_list_available_rejects_malformed_time() {
    let mut ctx = TestContext::new();
    ctx.appointment_repo.expect_fetch_booked_slots().never();
    let server = ctx.into_server();

    let response = server
        .get("/v1/appointments/available")
        .add_query_param("starts_at", "yesterday")
        .add_query_param("ends_at", "2022-03-17T20:00:00Z")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_scheduled_without_window() {
    let request = create_request("2022-03-17T19:00:00Z", "2022-03-17T19:30:00Z");
    let stored = stored_appointment(5, &request);
    let returned = stored.clone();

    let mut ctx = TestContext::new();
    ctx.appointment_repo
        .expect_scheduled_appointments()
        .with(
            eq(0_i64),
            eq(None::<DateTime<Utc>>),
            eq(None::<DateTime<Utc>>),
        )
        .times(1)
        .returning(move |_, _, _| Ok(vec![returned.clone()]));
    let server = ctx.into_server();

    let response = server.get("/v1/appointments/scheduled").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Vec<Appointment>>(), vec![stored]);
}

#[tokio::test]
async fn test_list_scheduled_not_found() {
    let mut ctx = TestContext::new();
    ctx.appointment_repo
        .expect_scheduled_appointments()
        .times(1)
        .returning(|_, _, _| Err(SchedulingError::NotFound("trainer 42".to_string())));
    let server = ctx.into_server();

    let response = server
        .get("/v1/appointments/scheduled")
        .add_query_param("trainer_id", 42)
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["type"], "not_found");
}
