//! Bedtime calculation.
//!
//! A single linear transform with one fallible step: validate the request,
//! ask the model for a predicted actual sleep duration, and rewind the wake
//! time by that duration, wrapping across midnight.

use thiserror::Error;

use crate::model::{PredictionError, SleepModel};
use crate::request::{InvalidRequest, SleepRequest};
use crate::time_of_day::TimeOfDay;

/// A failed bedtime calculation.
#[derive(Debug, Clone, Error)]
pub enum CalcError {
    /// A request field was outside its declared range.
    #[error(transparent)]
    InvalidInput(#[from] InvalidRequest),

    /// The model could not produce a usable prediction.
    #[error("model inference failed")]
    ModelInference(#[source] PredictionError),
}

/// Computes the ideal bedtime for a sleep request.
///
/// The model's prediction is the *actual* sleep duration it expects, not
/// the desired one; the bedtime is the wake time minus that prediction,
/// wrapped across midnight. A prediction that is non-finite or not
/// positive counts as a model failure. No partial result is returned on
/// any failure.
#[expect(
    clippy::cast_possible_truncation,
    reason = "prediction is checked finite; the saturating f64 to i64 cast cannot misbehave"
)]
pub fn compute_bedtime(
    request: &SleepRequest,
    model: &dyn SleepModel,
) -> Result<TimeOfDay, CalcError> {
    request.validate()?;

    let predicted_seconds = model.predict(request).map_err(CalcError::ModelInference)?;
    if !predicted_seconds.is_finite() || predicted_seconds <= 0.0 {
        return Err(CalcError::ModelInference(PredictionError::new(format!(
            "unusable predicted sleep duration: {predicted_seconds}"
        ))));
    }
    tracing::debug!(predicted_seconds, "model predicted sleep duration");

    Ok(request.wake.rewind(predicted_seconds.round() as i64))
}
