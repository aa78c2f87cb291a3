//! Model command: show the active sleep model.

use std::io::Write;

use anyhow::Result;
use serde_json::json;

use crate::Config;

pub fn run<W: Write>(writer: &mut W, config: &Config, json: bool) -> Result<()> {
    let model = super::load_model(config)?;
    let coefficients = model.coefficients();

    let source = config
        .model_path
        .as_ref()
        .map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string());

    if json {
        serde_json::to_writer(
            &mut *writer,
            &json!({ "source": source, "coefficients": coefficients }),
        )?;
        writeln!(writer)?;
    } else {
        writeln!(writer, "Sleep model: {source}")?;
        writeln!(writer, "- wake: {}", coefficients.wake)?;
        writeln!(writer, "- estimated_sleep: {}", coefficients.estimated_sleep)?;
        writeln!(writer, "- coffee: {}", coefficients.coffee)?;
        writeln!(writer, "- intercept: {}", coefficients.intercept)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    #[test]
    fn model_command_shows_builtin_coefficients() {
        let config = Config::default();

        let mut output = Vec::new();
        run(&mut output, &config, false).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        Sleep model: built-in defaults
        - wake: 0.0457
        - estimated_sleep: 3476
        - coffee: 311
        - intercept: 1502
        ");
    }

    #[test]
    fn model_command_shows_file_source() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("model.json");
        std::fs::write(
            &path,
            r#"{"wake":0.0,"estimated_sleep":3600.0,"coffee":0.0,"intercept":0.0}"#,
        )
        .unwrap();

        let config = Config {
            model_path: Some(path.clone()),
        };

        let mut output = Vec::new();
        run(&mut output, &config, false).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("model.json"));
        assert!(output.contains("- estimated_sleep: 3600"));
    }

    #[test]
    fn model_command_json_includes_coefficients() {
        let config = Config::default();

        let mut output = Vec::new();
        run(&mut output, &config, true).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed["source"], "built-in defaults");
        assert!(parsed["coefficients"]["intercept"].is_number());
    }
}
