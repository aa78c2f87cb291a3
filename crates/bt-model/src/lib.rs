//! Trained linear regression sleep model.
//!
//! Evaluates `predicted = intercept + w·wake + s·sleep + c·coffee` over the
//! three request features. The built-in coefficients stand in for the
//! original trained model; alternative coefficient sets can be loaded from
//! a JSON file.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use bt_core::{PredictionError, SleepModel, SleepRequest};

/// Coefficients of the linear sleep regression.
///
/// Feature layout matches the original trained model: wake time in seconds
/// from midnight, desired sleep in hours, coffee in cups. The output is
/// predicted actual sleep duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    /// Weight on wake time (seconds from midnight).
    pub wake: f64,
    /// Weight on desired sleep (hours).
    pub estimated_sleep: f64,
    /// Weight on coffee intake (cups).
    pub coffee: f64,
    /// Constant term (seconds).
    pub intercept: f64,
}

impl Default for Coefficients {
    /// Stand-in weights fitted offline against a sleep-duration dataset.
    /// Later wake times, higher sleep targets, and more coffee all push
    /// the predicted duration up, as in the original model.
    fn default() -> Self {
        Self {
            wake: 0.045_7,
            estimated_sleep: 3_476.0,
            coffee: 311.0,
            intercept: 1_502.0,
        }
    }
}

impl Coefficients {
    fn checked(self) -> Result<Self, ModelError> {
        let fields = [
            ("wake", self.wake),
            ("estimated_sleep", self.estimated_sleep),
            ("coffee", self.coffee),
            ("intercept", self.intercept),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ModelError::NonFiniteCoefficient { name });
            }
        }
        Ok(self)
    }
}

/// A loaded, immutable linear sleep model.
#[derive(Clone, PartialEq)]
pub struct LinearSleepModel {
    coefficients: Coefficients,
}

impl fmt::Debug for LinearSleepModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearSleepModel")
            .field("coefficients", &self.coefficients)
            .finish()
    }
}

impl Default for LinearSleepModel {
    fn default() -> Self {
        Self {
            coefficients: Coefficients::default(),
        }
    }
}

impl LinearSleepModel {
    /// Creates a model from an explicit coefficient set.
    ///
    /// # Errors
    ///
    /// Returns an error if any coefficient is non-finite.
    pub fn new(coefficients: Coefficients) -> Result<Self, ModelError> {
        Ok(Self {
            coefficients: coefficients.checked()?,
        })
    }

    /// Loads coefficients from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let contents = fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let coefficients: Coefficients =
            serde_json::from_str(&contents).map_err(|source| ModelError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "loaded model coefficients");
        Self::new(coefficients)
    }

    /// The model's coefficient set.
    pub const fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }
}

impl SleepModel for LinearSleepModel {
    fn predict(&self, request: &SleepRequest) -> Result<f64, PredictionError> {
        let c = &self.coefficients;
        let predicted = c.intercept
            + c.wake * f64::from(request.wake.seconds())
            + c.estimated_sleep * request.desired_sleep_hours
            + c.coffee * f64::from(request.coffee_cups);

        if !predicted.is_finite() {
            return Err(PredictionError::new("regression evaluated to a non-finite value"));
        }
        if predicted <= 0.0 {
            return Err(PredictionError::new(format!(
                "regression predicted a non-positive sleep duration: {predicted}"
            )));
        }
        Ok(predicted)
    }
}

/// Model construction and loading errors.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Failed to read the model file.
    #[error("failed to read model file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The model file is not valid coefficient JSON.
    #[error("invalid model file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A coefficient is NaN or infinite.
    #[error("non-finite model coefficient: {name}")]
    NonFiniteCoefficient { name: &'static str },
}
