use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    errors::SchedResult,
    models::{
        appointment::{Appointment, AppointmentCreateRequest},
        time_slot::BookedSlot,
    },
};

/// Storage collaborator of the scheduling service.
///
/// Implementations report a missing record as `SchedulingError::NotFound`
/// and any other storage failure as `SchedulingError::Repository`.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Stores a validated appointment and returns the stored record.
    async fn persist_appointment(&self, request: AppointmentCreateRequest) -> SchedResult<Appointment>;

    /// Slots booked for `trainer_id` (`0` = any trainer) inside the window,
    /// ordered by start instant.
    async fn fetch_booked_slots(
        &self,
        trainer_id: i64,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> SchedResult<Vec<BookedSlot>>;

    /// Stored appointments for `trainer_id` (`0` = any trainer). The window
    /// filter only applies when both bounds are given.
    async fn scheduled_appointments(
        &self,
        trainer_id: i64,
        starts_at: Option<DateTime<Utc>>,
        ends_at: Option<DateTime<Utc>>,
    ) -> SchedResult<Vec<Appointment>>;
}
