use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulingError {
    #[error("Missing time range: starts_at and ends_at are both required")]
    MissingTimeRange,

    #[error("Invalid time slot duration: expected {expected} minutes, got {actual}")]
    InvalidDuration { expected: i64, actual: i64 },

    #[error("Misaligned time slot: must start on a {slot_minutes} minute boundary")]
    MisalignedSlot { slot_minutes: u32 },

    #[error("Time slot starts outside business hours")]
    OutsideBusinessHours,

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(#[from] eyre::Report),
}

impl SchedulingError {
    /// Stable machine-readable name of the failure, used in API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            SchedulingError::MissingTimeRange => "missing_time_range",
            SchedulingError::InvalidDuration { .. } => "invalid_duration",
            SchedulingError::MisalignedSlot { .. } => "misaligned_slot",
            SchedulingError::OutsideBusinessHours => "outside_business_hours",
            SchedulingError::InvalidIdentifier(_) => "invalid_identifier",
            SchedulingError::NotFound(_) => "not_found",
            SchedulingError::Repository(_) => "repository_failure",
        }
    }

    /// True for failures detected before the repository is touched.
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            SchedulingError::NotFound(_) | SchedulingError::Repository(_)
        )
    }
}

pub type SchedResult<T> = Result<T, SchedulingError>;
