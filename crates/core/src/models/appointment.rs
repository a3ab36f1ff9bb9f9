use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::time_slot::{BookedSlot, ANY_TRAINER};

/// A stored appointment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub trainer_id: i64,
    pub user_id: i64,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canceled_at: Option<DateTime<Utc>>,
}

impl Appointment {
    pub fn booked_slot(&self) -> BookedSlot {
        BookedSlot {
            starts_at: self.starts_at,
            ends_at: self.ends_at,
        }
    }
}

/// Payload for booking a new appointment.
///
/// Missing ids decode as `0` and missing instants as `None` so the validator
/// can report them as distinct failures instead of a generic decode error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentCreateRequest {
    #[serde(default)]
    pub trainer_id: i64,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
}

/// Query used by both the availability and the scheduled-appointment lookups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentQuery {
    pub trainer_id: Option<i64>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

impl AppointmentQuery {
    pub fn trainer_id(&self) -> i64 {
        self.trainer_id.unwrap_or(ANY_TRAINER)
    }
}
