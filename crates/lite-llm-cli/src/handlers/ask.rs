//! Ask command handler: one non-streaming generation.

use anyhow::{Context, Result};
use lite_llm_core::GenerateOptions;
use serde_json::Value;
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Parse repeated `key=value` flags into generation options.
///
/// Values are read as JSON when they parse (`0.2`, `true`, `[1,2]`) and
/// kept as strings otherwise. A later key overrides an earlier one.
pub fn parse_options(pairs: &[String]) -> Result<GenerateOptions, CliError> {
    let mut options = GenerateOptions::new();
    for pair in pairs {
        let (key, raw) = pair
            .split_once('=')
            .ok_or_else(|| CliError::Arguments(format!("option {pair:?} is not key=value")))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(CliError::Arguments(format!("option {pair:?} has an empty key")));
        }
        let value =
            serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        options.insert(key.to_string(), value);
    }
    Ok(options)
}

/// Execute the ask command.
pub async fn execute(ctx: &CliContext, model: &str, prompt: &str, options: &[String]) -> Result<()> {
    let options = parse_options(options)?;
    debug!(model = %model, options = options.len(), "Sending prompt");

    let result = ctx
        .server
        .generate(model, prompt, options)
        .await
        .map_err(CliError::from)
        .with_context(|| format!("generation with {model} failed"))?;

    println!("{}", result.response.trim_end());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn owned(pairs: &[&str]) -> Vec<String> {
        pairs.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_values_parse_as_json_or_string() {
        let options = parse_options(&owned(&[
            "temperature=0.2",
            "num_ctx=4096",
            "stop=[\"###\"]",
            "seed=abc",
            "system=",
        ]))
        .unwrap();

        assert_eq!(options["temperature"], json!(0.2));
        assert_eq!(options["num_ctx"], json!(4096));
        assert_eq!(options["stop"], json!(["###"]));
        assert_eq!(options["seed"], json!("abc"));
        assert_eq!(options["system"], json!(""));
    }

    #[test]
    fn test_value_may_contain_equals() {
        let options = parse_options(&owned(&["stop=a=b"])).unwrap();
        assert_eq!(options["stop"], json!("a=b"));
    }

    #[test]
    fn test_malformed_pairs_are_argument_errors() {
        for bad in ["temperature", "=0.2"] {
            let err = parse_options(&owned(&[bad])).unwrap_err();
            assert_eq!(err.exit_code(), 2, "{bad}");
        }
    }

    #[test]
    fn test_no_options_is_empty() {
        assert!(parse_options(&[]).unwrap().is_empty());
    }
}
