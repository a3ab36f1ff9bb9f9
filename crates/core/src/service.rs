//! # Scheduling Service
//!
//! Entry point used by the request handlers. It validates create requests
//! before anything reaches storage, and turns a trainer's booked slots into a
//! list of open slots. Repository results, failures included, are returned
//! to the caller unchanged and never retried.

use std::sync::Arc;

use tracing::debug;

use crate::{
    availability::{AvailabilityComputer, AvailabilityWindow, BookedSlotIndex},
    business_hours::BusinessHours,
    errors::SchedResult,
    models::{
        appointment::{Appointment, AppointmentCreateRequest, AppointmentQuery},
        time_slot::TimeSlot,
    },
    repository::AppointmentRepository,
    validator::SlotValidator,
};

#[derive(Clone)]
pub struct SchedulingService {
    repo: Arc<dyn AppointmentRepository>,
    validator: SlotValidator,
    computer: AvailabilityComputer,
}

impl SchedulingService {
    pub fn new(repo: Arc<dyn AppointmentRepository>, hours: BusinessHours) -> Self {
        Self {
            repo,
            validator: SlotValidator::new(hours),
            computer: AvailabilityComputer::new(hours),
        }
    }

    pub fn business_hours(&self) -> &BusinessHours {
        self.validator.hours()
    }

    /// Validates and stores a new appointment.
    pub async fn create_appointment(
        &self,
        request: AppointmentCreateRequest,
    ) -> SchedResult<Appointment> {
        self.validator.validate_request(&request)?;

        debug!(
            "Persisting appointment: trainer_id={}, user_id={}, starts_at={:?}",
            request.trainer_id, request.user_id, request.starts_at
        );

        self.repo.persist_appointment(request).await
    }

    /// Open slots for the query's trainer inside its window.
    ///
    /// Both window bounds are required; the repository is not called when
    /// either is missing.
    pub async fn available_slots(&self, query: AppointmentQuery) -> SchedResult<Vec<TimeSlot>> {
        let window = AvailabilityWindow::new(query.trainer_id(), query.starts_at, query.ends_at);
        let (starts_at, ends_at) = window.bounds()?;

        let booked = self
            .repo
            .fetch_booked_slots(window.trainer_id, starts_at, ends_at)
            .await?;
        debug!(
            "Fetched {} booked slots for trainer {} between {} and {}",
            booked.len(),
            window.trainer_id,
            starts_at,
            ends_at
        );

        let index: BookedSlotIndex = booked.into_iter().collect();
        self.computer.compute(&window, &index)
    }

    /// Stored appointments; a missing bound means the lookup is unbounded.
    pub async fn scheduled_appointments(
        &self,
        query: AppointmentQuery,
    ) -> SchedResult<Vec<Appointment>> {
        self.repo
            .scheduled_appointments(query.trainer_id(), query.starts_at, query.ends_at)
            .await
    }
}

impl std::fmt::Debug for SchedulingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchedulingService")
            .field("business_hours", self.validator.hours())
            .finish_non_exhaustive()
    }
}
