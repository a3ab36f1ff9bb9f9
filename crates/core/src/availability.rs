//! # Availability
//!
//! Open slots are found by walking the window in slot-length steps and
//! dropping every candidate that is either already booked or outside business
//! hours. Booked slots are looked up by their start instant in epoch seconds,
//! so lookups do not depend on the timezone an instant was parsed in.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::{
    business_hours::BusinessHours,
    errors::{SchedResult, SchedulingError},
    models::time_slot::{BookedSlot, TimeSlot},
};

/// Booked slots of one query, keyed by start instant (epoch seconds) with the
/// end instant as value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookedSlotIndex {
    slots: HashMap<i64, i64>,
}

impl BookedSlotIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, slot: BookedSlot) {
        self.slots
            .insert(slot.starts_at.timestamp(), slot.ends_at.timestamp());
    }

    pub fn is_booked(&self, starts_at: DateTime<Utc>) -> bool {
        self.slots.contains_key(&starts_at.timestamp())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl FromIterator<BookedSlot> for BookedSlotIndex {
    fn from_iter<I: IntoIterator<Item = BookedSlot>>(iter: I) -> Self {
        let mut index = Self::new();
        for slot in iter {
            index.insert(slot);
        }
        index
    }
}

/// The `[starts_at, ends_at)` range an availability query covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityWindow {
    /// `0` means any trainer
    pub trainer_id: i64,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

impl AvailabilityWindow {
    pub fn new(
        trainer_id: i64,
        starts_at: Option<DateTime<Utc>>,
        ends_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            trainer_id,
            starts_at,
            ends_at,
        }
    }

    /// Both bounds, or `MissingTimeRange` when either is absent.
    pub fn bounds(&self) -> SchedResult<(DateTime<Utc>, DateTime<Utc>)> {
        match (self.starts_at, self.ends_at) {
            (Some(starts_at), Some(ends_at)) => Ok((starts_at, ends_at)),
            _ => Err(SchedulingError::MissingTimeRange),
        }
    }
}

/// Enumerates open slots of a window against a booked index.
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityComputer {
    hours: BusinessHours,
}

impl AvailabilityComputer {
    pub fn new(hours: BusinessHours) -> Self {
        Self { hours }
    }

    /// Collects every open slot in the window, ordered by start instant.
    pub fn compute(
        &self,
        window: &AvailabilityWindow,
        booked: &BookedSlotIndex,
    ) -> SchedResult<Vec<TimeSlot>> {
        let slots: Vec<TimeSlot> = self.open_slots(window, booked)?.collect();

        tracing::debug!(
            "Computed {} open slots for trainer {} ({} booked)",
            slots.len(),
            window.trainer_id,
            booked.len()
        );

        Ok(slots)
    }

    /// Lazy form of [`compute`](Self::compute). The iterator borrows the
    /// index and can be recreated from the same inputs any number of times.
    pub fn open_slots<'a>(
        &'a self,
        window: &AvailabilityWindow,
        booked: &'a BookedSlotIndex,
    ) -> SchedResult<impl Iterator<Item = TimeSlot> + 'a> {
        let (starts_at, ends_at) = window.bounds()?;
        let trainer_id = window.trainer_id;
        let step = self.hours.slot_length();

        let candidates =
            std::iter::successors(Some(starts_at), move |current| current.checked_add_signed(step))
                .take_while(move |candidate| *candidate < ends_at);

        Ok(candidates
            .filter(move |candidate| !booked.is_booked(*candidate))
            .filter(move |candidate| self.hours.contains_start(*candidate))
            .map(move |candidate| TimeSlot::new(trainer_id, candidate, step)))
    }
}

impl Default for AvailabilityComputer {
    fn default() -> Self {
        Self::new(BusinessHours::default())
    }
}
