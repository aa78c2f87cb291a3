//! Core domain logic for the bedtime predictor.
//!
//! This crate contains the fundamental types and logic for:
//! - `TimeOfDay`: wall-clock time arithmetic with midnight wraparound
//! - `SleepRequest`: validated calculation inputs
//! - Bedtime calculation: subtracting a model's predicted sleep duration
//!   from the desired wake time

mod calculator;
pub mod model;
pub mod request;
pub mod time_of_day;

pub use calculator::{CalcError, compute_bedtime};
pub use model::{PredictionError, SleepModel};
pub use request::{
    InvalidRequest, MAX_COFFEE_CUPS, MAX_SLEEP_HOURS, MIN_COFFEE_CUPS, MIN_SLEEP_HOURS,
    SleepRequest,
};
pub use time_of_day::{InvalidTimeOfDay, SECONDS_PER_DAY, TimeOfDay};
