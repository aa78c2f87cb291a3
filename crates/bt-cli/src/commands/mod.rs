//! CLI subcommand implementations.

pub mod calc;
pub mod model;

use anyhow::{Context, Result};

use bt_model::LinearSleepModel;

use crate::Config;

/// Loads the configured sleep model, falling back to built-in coefficients.
pub(crate) fn load_model(config: &Config) -> Result<LinearSleepModel> {
    match &config.model_path {
        Some(path) => LinearSleepModel::from_file(path)
            .with_context(|| format!("failed to load model from {}", path.display())),
        None => Ok(LinearSleepModel::default()),
    }
}
