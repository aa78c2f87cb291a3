//! Validated inputs for a bedtime calculation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time_of_day::TimeOfDay;

/// Minimum accepted desired sleep, in hours.
pub const MIN_SLEEP_HOURS: f64 = 4.0;

/// Maximum accepted desired sleep, in hours.
pub const MAX_SLEEP_HOURS: f64 = 12.0;

/// Minimum accepted daily coffee intake, in cups.
pub const MIN_COFFEE_CUPS: u32 = 1;

/// Maximum accepted daily coffee intake, in cups.
pub const MAX_COFFEE_CUPS: u32 = 20;

/// Inputs for one bedtime calculation.
///
/// Fields are public for ergonomic construction in tests and callers, so
/// the range invariant is re-checked by [`validate`](Self::validate) at the
/// calculation boundary rather than assumed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepRequest {
    /// The time of day the user intends to wake up.
    pub wake: TimeOfDay,

    /// Target hours of sleep, in [`MIN_SLEEP_HOURS`]..=[`MAX_SLEEP_HOURS`].
    pub desired_sleep_hours: f64,

    /// Daily coffee intake, in [`MIN_COFFEE_CUPS`]..=[`MAX_COFFEE_CUPS`] cups.
    pub coffee_cups: u32,
}

impl SleepRequest {
    /// Creates a request, rejecting out-of-range fields.
    ///
    /// Non-finite `desired_sleep_hours` values are out of range.
    pub fn new(
        wake: TimeOfDay,
        desired_sleep_hours: f64,
        coffee_cups: u32,
    ) -> Result<Self, InvalidRequest> {
        let request = Self {
            wake,
            desired_sleep_hours,
            coffee_cups,
        };
        request.validate()?;
        Ok(request)
    }

    /// Creates a request, clamping out-of-range fields to their bounds.
    ///
    /// This mirrors the stepper widgets of the original form, which cannot
    /// produce values outside their configured ranges.
    pub fn clamped(wake: TimeOfDay, desired_sleep_hours: f64, coffee_cups: u32) -> Self {
        let desired_sleep_hours = if desired_sleep_hours.is_finite() {
            desired_sleep_hours.clamp(MIN_SLEEP_HOURS, MAX_SLEEP_HOURS)
        } else {
            MIN_SLEEP_HOURS
        };
        Self {
            wake,
            desired_sleep_hours,
            coffee_cups: coffee_cups.clamp(MIN_COFFEE_CUPS, MAX_COFFEE_CUPS),
        }
    }

    /// Checks the range invariant on every field.
    pub fn validate(&self) -> Result<(), InvalidRequest> {
        if !(MIN_SLEEP_HOURS..=MAX_SLEEP_HOURS).contains(&self.desired_sleep_hours) {
            return Err(InvalidRequest::SleepHours {
                hours: self.desired_sleep_hours,
            });
        }
        if !(MIN_COFFEE_CUPS..=MAX_COFFEE_CUPS).contains(&self.coffee_cups) {
            return Err(InvalidRequest::CoffeeCups {
                cups: self.coffee_cups,
            });
        }
        Ok(())
    }
}

/// A request field outside its declared range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidRequest {
    #[error("desired sleep hours out of range: {hours} (expected {MIN_SLEEP_HOURS}..={MAX_SLEEP_HOURS})")]
    SleepHours { hours: f64 },

    #[error("coffee cups out of range: {cups} (expected {MIN_COFFEE_CUPS}..={MAX_COFFEE_CUPS})")]
    CoffeeCups { cups: u32 },
}
