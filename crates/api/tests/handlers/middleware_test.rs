use apptsched_api::middleware::error_handling::AppError;
use apptsched_core::errors::SchedulingError;
use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
use rstest::rstest;
use serde_json::Value;

#[rstest]
#[case(SchedulingError::MissingTimeRange, StatusCode::BAD_REQUEST)]
#[case(SchedulingError::InvalidDuration { expected: 30, actual: 45 }, StatusCode::BAD_REQUEST)]
#[case(SchedulingError::MisalignedSlot { slot_minutes: 30 }, StatusCode::BAD_REQUEST)]
#[case(SchedulingError::OutsideBusinessHours, StatusCode::BAD_REQUEST)]
#[case(SchedulingError::InvalidIdentifier("user_id must be set".into()), StatusCode::BAD_REQUEST)]
#[case(SchedulingError::NotFound("appointment".into()), StatusCode::NOT_FOUND)]
#[case(SchedulingError::Repository(eyre::eyre!("connection reset")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: SchedulingError, #[case] status: StatusCode) {
    let error = AppError(error);
    assert_eq!(error.status(), status);
    assert_eq!(error.into_response().status(), status);
}

#[tokio::test]
async fn test_error_body_carries_message_and_type() {
    let response = AppError(SchedulingError::InvalidDuration {
        expected: 30,
        actual: 45,
    })
    .into_response();

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["type"], "invalid_duration");
    assert_eq!(
        body["error"],
        "Invalid time slot duration: expected 30 minutes, got 45"
    );
}

#[test]
fn test_scheduling_error_converts_into_app_error() {
    let error: AppError = SchedulingError::NotFound("trainer 42".into()).into();

    assert_eq!(error.status(), StatusCode::NOT_FOUND);
}
