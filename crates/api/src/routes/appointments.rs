use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/v1/appointments",
            post(handlers::appointments::create_appointment),
        )
        .route(
            "/v1/appointments/available",
            get(handlers::appointments::list_available_appointments),
        )
        .route(
            "/v1/appointments/scheduled",
            get(handlers::appointments::list_scheduled_appointments),
        )
}
