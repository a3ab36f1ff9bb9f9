use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Trainer id meaning "any trainer" in queries and windows.
pub const ANY_TRAINER: i64 = 0;

/// An open (or candidate) appointment slot for a trainer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub trainer_id: i64,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl TimeSlot {
    pub fn new(trainer_id: i64, starts_at: DateTime<Utc>, length: Duration) -> Self {
        Self {
            trainer_id,
            starts_at,
            ends_at: starts_at + length,
        }
    }

    pub fn duration(&self) -> Duration {
        self.ends_at - self.starts_at
    }

    /// Half-open containment: `starts_at <= instant < ends_at`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.starts_at <= instant && instant < self.ends_at
    }
}

/// A slot already taken by a stored appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedSlot {
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}
