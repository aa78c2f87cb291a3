//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use bt_core::TimeOfDay;

/// Bedtime predictor.
///
/// Computes an ideal bedtime from a desired wake-up time, a sleep target,
/// and daily coffee intake, using a trained regression model.
#[derive(Debug, Parser)]
#[command(name = "bt", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Calculate the ideal bedtime.
    Calc(CalcArgs),

    /// Show the active sleep model.
    Model {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Inputs for the calc command.
#[derive(Debug, Args)]
pub struct CalcArgs {
    /// Desired wake-up time (HH:MM).
    #[arg(long)]
    pub wake: TimeOfDay,

    /// Target hours of sleep (4 to 12).
    #[arg(long)]
    pub sleep: f64,

    /// Daily coffee intake in cups (1 to 20).
    #[arg(long)]
    pub coffee: u32,

    /// Clamp out-of-range inputs to their bounds instead of failing.
    #[arg(long)]
    pub clamp: bool,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}
