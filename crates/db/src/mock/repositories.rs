use apptsched_core::{
    errors::SchedResult,
    models::{
        appointment::{Appointment, AppointmentCreateRequest},
        time_slot::BookedSlot,
    },
    repository::AppointmentRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;

// Mock repository for testing
mock! {
    pub AppointmentRepo {}

    #[async_trait]
    impl AppointmentRepository for AppointmentRepo {
        async fn persist_appointment(
            &self,
            request: AppointmentCreateRequest,
        ) -> SchedResult<Appointment>;

        async fn fetch_booked_slots(
            &self,
            trainer_id: i64,
            starts_at: DateTime<Utc>,
            ends_at: DateTime<Utc>,
        ) -> SchedResult<Vec<BookedSlot>>;

        async fn scheduled_appointments(
            &self,
            trainer_id: i64,
            starts_at: Option<DateTime<Utc>>,
            ends_at: Option<DateTime<Utc>>,
        ) -> SchedResult<Vec<Appointment>>;
    }
}
