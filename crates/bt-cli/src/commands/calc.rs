//! Calc command: compute the ideal bedtime for the given inputs.

use std::io::Write;

use anyhow::{Context, Result};
use serde_json::json;

use bt_core::{SleepRequest, compute_bedtime};

use crate::cli::CalcArgs;
use crate::Config;

pub fn run<W: Write>(writer: &mut W, config: &Config, args: &CalcArgs) -> Result<()> {
    let model = super::load_model(config)?;

    let request = if args.clamp {
        SleepRequest::clamped(args.wake, args.sleep, args.coffee)
    } else {
        SleepRequest::new(args.wake, args.sleep, args.coffee)?
    };
    tracing::debug!(?request, "computed request");

    // One generic failure message regardless of the underlying cause.
    let bedtime = compute_bedtime(&request, &model).context("could not calculate a bedtime")?;

    if args.json {
        serde_json::to_writer(&mut *writer, &json!({ "bedtime": bedtime }))?;
        writeln!(writer)?;
    } else {
        writeln!(writer, "Your ideal bedtime is {bedtime}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use bt_core::TimeOfDay;
    use insta::assert_snapshot;

    fn args(wake: &str, sleep: f64, coffee: u32) -> CalcArgs {
        CalcArgs {
            wake: wake.parse::<TimeOfDay>().unwrap(),
            sleep,
            coffee,
            clamp: false,
            json: false,
        }
    }

    /// Writes a coefficient file where prediction equals the desired sleep
    /// exactly, so outputs are easy to verify by hand.
    fn identity_model(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("model.json");
        std::fs::write(
            &path,
            r#"{"wake":0.0,"estimated_sleep":3600.0,"coffee":0.0,"intercept":0.0}"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn calc_prints_bedtime_message() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config {
            model_path: Some(identity_model(temp.path())),
        };

        let mut output = Vec::new();
        run(&mut output, &config, &args("07:00", 8.0, 1)).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @"Your ideal bedtime is 23:00");
    }

    #[test]
    fn calc_json_output() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config {
            model_path: Some(identity_model(temp.path())),
        };

        let mut output = Vec::new();
        let mut json_args = args("07:00", 8.0, 1);
        json_args.json = true;
        run(&mut output, &config, &json_args).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r#"{"bedtime":"23:00"}"#);
    }

    #[test]
    fn calc_rejects_out_of_range_sleep() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config {
            model_path: Some(identity_model(temp.path())),
        };

        let mut output = Vec::new();
        let result = run(&mut output, &config, &args("07:00", 3.9, 1));
        assert!(result.is_err());
        assert!(output.is_empty(), "no partial output on failure");
    }

    #[test]
    fn calc_clamp_accepts_out_of_range_sleep() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config {
            model_path: Some(identity_model(temp.path())),
        };

        let mut output = Vec::new();
        let mut clamp_args = args("07:00", 3.9, 1);
        clamp_args.clamp = true;
        run(&mut output, &config, &clamp_args).unwrap();

        // Clamped to 4 hours: 07:00 - 4h = 03:00
        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @"Your ideal bedtime is 03:00");
    }

    #[test]
    fn calc_fails_when_model_file_is_missing() {
        let config = Config {
            model_path: Some(PathBuf::from("/nonexistent/model.json")),
        };

        let mut output = Vec::new();
        let result = run(&mut output, &config, &args("07:00", 8.0, 1));
        assert!(result.is_err());
    }

    #[test]
    fn calc_uses_builtin_model_without_config() {
        let config = Config::default();

        let mut output = Vec::new();
        run(&mut output, &config, &args("07:00", 8.0, 1)).unwrap();

        // Built-in coefficients predict slightly over eight hours of sleep.
        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @"Your ideal bedtime is 22:27");
    }
}
