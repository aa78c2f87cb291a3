//! Bedtime predictor CLI library.
//!
//! This crate provides the CLI interface for the bedtime predictor.

mod cli;
pub mod commands;
mod config;

pub use cli::{CalcArgs, Cli, Commands};
pub use config::Config;
