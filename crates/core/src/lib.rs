//! # Appointment Scheduling Core
//!
//! Domain types and the availability engine of the appointment scheduling
//! service: validation of half-hour slots against business hours, and
//! enumeration of the open slots of a window. Storage is reached only through
//! the [`repository::AppointmentRepository`] trait.

pub mod availability;
pub mod business_hours;
pub mod errors;
pub mod models;
pub mod repository;
pub mod service;
pub mod validator;

pub use availability::{AvailabilityComputer, AvailabilityWindow, BookedSlotIndex};
pub use business_hours::BusinessHours;
pub use errors::{SchedResult, SchedulingError};
pub use service::SchedulingService;
pub use validator::SlotValidator;
