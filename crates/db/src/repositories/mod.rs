//! Postgres-backed storage for appointments.
//!
//! The free functions in [`appointment`] return `eyre` reports; the
//! [`PgAppointmentRepository`] adapter turns those into the domain error the
//! scheduling service expects.

pub mod appointment;

use apptsched_core::{
    errors::{SchedResult, SchedulingError},
    models::{
        appointment::{Appointment, AppointmentCreateRequest},
        time_slot::BookedSlot,
    },
    repository::AppointmentRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::DbPool;

#[derive(Debug, Clone)]
pub struct PgAppointmentRepository {
    pool: DbPool,
}

impl PgAppointmentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Maps a missing row to `NotFound` and anything else to `Repository`.
pub fn to_scheduling_error(report: eyre::Report) -> SchedulingError {
    match report.downcast_ref::<sqlx::Error>() {
        Some(sqlx::Error::RowNotFound) => SchedulingError::NotFound(report.to_string()),
        _ => SchedulingError::Repository(report),
    }
}

#[async_trait]
impl AppointmentRepository for PgAppointmentRepository {
    async fn persist_appointment(&self, request: AppointmentCreateRequest) -> SchedResult<Appointment> {
        appointment::create_appointment(&self.pool, &request)
            .await
            .map(Appointment::from)
            .map_err(to_scheduling_error)
    }

    async fn fetch_booked_slots(
        &self,
        trainer_id: i64,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> SchedResult<Vec<BookedSlot>> {
        appointment::get_booked_slots(&self.pool, trainer_id, starts_at, ends_at)
            .await
            .map_err(to_scheduling_error)
    }

    async fn scheduled_appointments(
        &self,
        trainer_id: i64,
        starts_at: Option<DateTime<Utc>>,
        ends_at: Option<DateTime<Utc>>,
    ) -> SchedResult<Vec<Appointment>> {
        let rows = appointment::get_scheduled_appointments(&self.pool, trainer_id, starts_at, ends_at)
            .await
            .map_err(to_scheduling_error)?;

        Ok(rows.into_iter().map(Appointment::from).collect())
    }
}
