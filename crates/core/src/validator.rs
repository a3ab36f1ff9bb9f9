use chrono::{DateTime, Utc};

use crate::{
    business_hours::BusinessHours,
    errors::{SchedResult, SchedulingError},
    models::appointment::AppointmentCreateRequest,
};

/// Decides whether a proposed appointment is a bookable slot.
#[derive(Debug, Clone, Copy)]
pub struct SlotValidator {
    hours: BusinessHours,
}

impl SlotValidator {
    pub fn new(hours: BusinessHours) -> Self {
        Self { hours }
    }

    pub fn hours(&self) -> &BusinessHours {
        &self.hours
    }

    /// Validates a full create request: identifiers first, then the time slot.
    pub fn validate_request(&self, request: &AppointmentCreateRequest) -> SchedResult<()> {
        if request.user_id == 0 {
            return Err(SchedulingError::InvalidIdentifier(
                "user_id must be set".to_string(),
            ));
        }
        if request.trainer_id == 0 {
            return Err(SchedulingError::InvalidIdentifier(
                "trainer_id must be set".to_string(),
            ));
        }

        self.validate(request.starts_at, request.ends_at)
    }

    /// Checks presence, duration, alignment and business hours, in that order.
    pub fn validate(
        &self,
        starts_at: Option<DateTime<Utc>>,
        ends_at: Option<DateTime<Utc>>,
    ) -> SchedResult<()> {
        let (Some(starts_at), Some(ends_at)) = (starts_at, ends_at) else {
            return Err(SchedulingError::MissingTimeRange);
        };

        let length = ends_at - starts_at;
        if length != self.hours.slot_length() {
            return Err(SchedulingError::InvalidDuration {
                expected: self.hours.slot_length().num_minutes(),
                actual: length.num_minutes(),
            });
        }

        if !self.hours.is_aligned(starts_at) {
            return Err(SchedulingError::MisalignedSlot {
                slot_minutes: self.hours.slot_minutes,
            });
        }

        if !self.hours.contains_start(starts_at) {
            tracing::debug!("Slot start {} is outside business hours", starts_at);
            return Err(SchedulingError::OutsideBusinessHours);
        }

        Ok(())
    }
}

impl Default for SlotValidator {
    fn default() -> Self {
        Self::new(BusinessHours::default())
    }
}
