//! # Business Hours
//!
//! Operating-hours configuration shared by the slot validator and the
//! availability computer. All checks convert the absolute instant into the
//! configured timezone first, so the local hour follows the zone's DST rules
//! for that date rather than a fixed offset.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use eyre::{eyre, Result};

/// Default operating timezone.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Los_Angeles;

/// Business-hours configuration
///
/// A slot may start on any weekday (Monday to Friday) whose local start hour
/// lies in `first_start_hour..=last_start_hour`. With the defaults the first
/// bookable slot starts at 08:00 and the last one at 16:30 local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    /// Canonical operating timezone
    pub timezone: Tz,

    /// Earliest local hour a slot may start in
    pub first_start_hour: u32,

    /// Latest local hour a slot may start in (inclusive)
    pub last_start_hour: u32,

    /// Length of every slot in minutes
    pub slot_minutes: u32,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            first_start_hour: 8,
            last_start_hour: 16,
            slot_minutes: 30,
        }
    }
}

impl BusinessHours {
    /// Parses an IANA timezone name such as `America/Los_Angeles`.
    pub fn parse_timezone(name: &str) -> Result<Tz> {
        name.parse::<Tz>()
            .map_err(|e| eyre!("Invalid timezone {:?}: {}", name, e))
    }

    /// Checks that the configuration describes a usable grid.
    pub fn check(&self) -> Result<()> {
        if self.slot_minutes == 0 || 60 % self.slot_minutes != 0 {
            return Err(eyre!(
                "Slot length must divide an hour evenly, got {} minutes",
                self.slot_minutes
            ));
        }
        if self.first_start_hour > 23 || self.last_start_hour > 23 {
            return Err(eyre!("Business hours must be within 0..=23"));
        }
        if self.first_start_hour > self.last_start_hour {
            return Err(eyre!(
                "First start hour {} is after last start hour {}",
                self.first_start_hour,
                self.last_start_hour
            ));
        }
        Ok(())
    }

    pub fn slot_length(&self) -> Duration {
        Duration::minutes(i64::from(self.slot_minutes))
    }

    /// Weekday and start-hour predicate, evaluated in the operating timezone.
    pub fn contains_start(&self, instant: DateTime<Utc>) -> bool {
        let local = instant.with_timezone(&self.timezone);
        let hour = local.hour();

        !matches!(local.weekday(), Weekday::Sat | Weekday::Sun)
            && hour >= self.first_start_hour
            && hour <= self.last_start_hour
    }

    /// True when the local start falls exactly on a slot boundary.
    pub fn is_aligned(&self, instant: DateTime<Utc>) -> bool {
        let local = instant.with_timezone(&self.timezone);

        local.minute() % self.slot_minutes == 0 && local.second() == 0 && local.nanosecond() == 0
    }
}
