use apptsched_api::routes::health::{HealthResponse, VersionResponse};
use apptsched_core::BusinessHours;
use axum::http::StatusCode;

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_health_reports_operating_timezone() {
    let mut ctx = TestContext::new();
    ctx.business_hours = BusinessHours {
        timezone: BusinessHours::parse_timezone("Europe/Berlin").unwrap(),
        ..BusinessHours::default()
    };
    let server = ctx.into_server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<HealthResponse>();
    assert_eq!(body.status, "ok");
    assert_eq!(body.timezone, "Europe/Berlin");
}

#[tokio::test]
async fn test_version() {
    let server = TestContext::new().into_server();

    let response = server.get("/version").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<VersionResponse>().version,
        env!("CARGO_PKG_VERSION")
    );
}

