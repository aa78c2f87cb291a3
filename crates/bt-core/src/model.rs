//! The sleep model capability.
//!
//! The calculator never evaluates a regression itself; it delegates to an
//! injected [`SleepModel`]. Production code supplies the trained linear
//! model from `bt-model`, tests supply stubs.

use thiserror::Error;

use crate::request::SleepRequest;

/// A trained model that predicts actual sleep duration.
pub trait SleepModel {
    /// Predicts the actual sleep duration, in seconds, for the given
    /// request. Inputs follow the original model's feature layout: wake
    /// time in seconds from midnight, desired sleep in hours, coffee in
    /// cups.
    fn predict(&self, request: &SleepRequest) -> Result<f64, PredictionError>;
}

/// An opaque model inference failure.
///
/// The calculator does not differentiate model failures; whatever the
/// cause, the calculation is abandoned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct PredictionError(String);

impl PredictionError {
    /// Creates a prediction error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
