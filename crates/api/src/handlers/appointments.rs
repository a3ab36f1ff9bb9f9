//! # Appointment Handlers
//!
//! HTTP entry points for booking appointments and listing open or scheduled
//! slots. Decoding happens in the extractors; everything else is delegated to
//! the [`SchedulingService`](apptsched_core::SchedulingService).

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use apptsched_core::models::{
    appointment::{Appointment, AppointmentCreateRequest, AppointmentQuery},
    time_slot::TimeSlot,
};

use crate::{middleware::error_handling::AppError, ApiState};

/// Books a new appointment.
///
/// ```text
/// POST /v1/appointments
/// {"trainer_id": 1, "user_id": 2, "starts_at": "2022-03-17T19:00:00Z", "ends_at": "2022-03-17T19:30:00Z"}
/// ```
///
/// Responds `201 Created` with the stored appointment.
#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<AppointmentCreateRequest>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let appointment = state.service.create_appointment(payload).await?;

    tracing::info!(
        "Appointment {} booked for trainer {} at {}",
        appointment.id,
        appointment.trainer_id,
        appointment.starts_at
    );

    Ok((StatusCode::CREATED, Json(appointment)))
}

/// Lists the open slots of a window.
///
/// ```text
/// GET /v1/appointments/available?trainer_id=1&starts_at=...&ends_at=...
/// ```
///
/// Both `starts_at` and `ends_at` are required; `trainer_id` defaults to any
/// trainer.
#[axum::debug_handler]
pub async fn list_available_appointments(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AppointmentQuery>,
) -> Result<Json<Vec<TimeSlot>>, AppError> {
    let slots = state.service.available_slots(query).await?;
    Ok(Json(slots))
}

/// Lists stored appointments, optionally limited to a trainer and a window.
#[axum::debug_handler]
pub async fn list_scheduled_appointments(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AppointmentQuery>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let appointments = state.service.scheduled_appointments(query).await?;
    Ok(Json(appointments))
}
