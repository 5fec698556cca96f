use super::{apply_config, load_config_file};
use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tempfile::tempdir;

use crate::args::{AnalyzeArgs, InsightsArgs, LogEncoding, OutputFormat};
use crate::error::{AppError, ConfigError};

fn analyze_matches(argv: &[&str]) -> Result<(AnalyzeArgs, ArgMatches), String> {
    let mut full = vec!["universe-insights", "analyze"];
    full.extend_from_slice(argv);
    let matches = InsightsArgs::command()
        .try_get_matches_from(full)
        .map_err(|err| format!("parse failed: {}", err))?;
    let sub = matches
        .subcommand_matches("analyze")
        .ok_or_else(|| "missing analyze matches".to_owned())?
        .clone();
    let args =
        AnalyzeArgs::from_arg_matches(&sub).map_err(|err| format!("from matches failed: {}", err))?;
    Ok((args, sub))
}

#[test]
fn parse_toml_config_with_flashcards_section() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("universe-insights.toml");
    let content = r#"
log_file = "/var/log/universe/logs_app.log"
encoding = "latin1"
output_format = "json"
top_n = 3

[flashcards]
api_key_env = "GEMINI_KEY"
model = "gemini-1.5-flash"
timeout_secs = 20
"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.log_file.as_deref() != Some("/var/log/universe/logs_app.log") {
        return Err("Unexpected log_file".to_owned());
    }
    if config.output_format != Some(OutputFormat::Json) {
        return Err("Unexpected output_format".to_owned());
    }
    if config.top_n != Some(3) {
        return Err("Unexpected top_n".to_owned());
    }
    let flashcards = config
        .flashcards
        .ok_or_else(|| "Expected flashcards section".to_owned())?;
    if flashcards.api_key_env.as_deref() != Some("GEMINI_KEY") {
        return Err("Unexpected api_key_env".to_owned());
    }
    if flashcards.timeout_secs != Some(20) {
        return Err("Unexpected timeout".to_owned());
    }
    Ok(())
}

#[test]
fn parse_json_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("universe-insights.json");
    let content = r#"{
  "log": "access.log",
  "no_charts": true,
  "charts_path": "./out/charts"
}"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.log_file.as_deref() != Some("access.log") {
        return Err("Unexpected log alias".to_owned());
    }
    if config.no_charts != Some(true) {
        return Err("Unexpected no_charts".to_owned());
    }
    if config.charts_path.as_deref() != Some("./out/charts") {
        return Err("Unexpected charts_path".to_owned());
    }
    Ok(())
}

#[test]
fn unsupported_extension_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("universe-insights.yaml");
    std::fs::write(&path, "log_file: a.log").map_err(|err| format!("write failed: {}", err))?;
    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::UnsupportedExtension { ext })) if ext == "yaml" => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected yaml config to be rejected".to_owned()),
    }
}

#[test]
fn invalid_toml_reports_path() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "top_n = [").map_err(|err| format!("write failed: {}", err))?;
    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::ParseToml { path: reported, .. }))
            if reported == path =>
        {
            Ok(())
        }
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected parse failure".to_owned()),
    }
}

#[test]
fn apply_config_fills_defaults() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("universe-insights.toml");
    std::fs::write(
        &path,
        "log_file = \"from-config.log\"\nencoding = \"latin1\"\ntop_n = 7\nno_charts = true\n",
    )
    .map_err(|err| format!("write failed: {}", err))?;
    let config = load_config_file(&path).map_err(|err| err.to_string())?;

    let (mut args, matches) = analyze_matches(&[])?;
    apply_config(&mut args, &matches, &config).map_err(|err| err.to_string())?;

    if args.log_file != "from-config.log" {
        return Err(format!("Unexpected log_file: {}", args.log_file));
    }
    if args.encoding != LogEncoding::Latin1 {
        return Err("Expected latin1 from config".to_owned());
    }
    if args.top_n.get() != 7 {
        return Err("Expected top_n from config".to_owned());
    }
    if !args.no_charts {
        return Err("Expected no_charts from config".to_owned());
    }
    Ok(())
}

#[test]
fn apply_config_keeps_cli_values() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("universe-insights.toml");
    std::fs::write(
        &path,
        "log_file = \"from-config.log\"\noutput_format = \"json\"\ntop_n = 7\n",
    )
    .map_err(|err| format!("write failed: {}", err))?;
    let config = load_config_file(&path).map_err(|err| err.to_string())?;

    let (mut args, matches) =
        analyze_matches(&["--log-file", "cli.log", "--output-format", "text"])?;
    apply_config(&mut args, &matches, &config).map_err(|err| err.to_string())?;

    if args.log_file != "cli.log" {
        return Err(format!("CLI log_file overridden: {}", args.log_file));
    }
    if args.output_format != OutputFormat::Text {
        return Err("CLI output_format overridden".to_owned());
    }
    if args.top_n.get() != 7 {
        return Err("Expected top_n from config".to_owned());
    }
    Ok(())
}

#[test]
fn apply_config_rejects_invalid_values() -> Result<(), String> {
    let (mut args, matches) = analyze_matches(&[])?;

    let zero = super::types::ConfigFile {
        top_n: Some(0),
        ..Default::default()
    };
    match apply_config(&mut args, &matches, &zero) {
        Err(AppError::Config(ConfigError::FieldMustBePositive { field: "top_n", .. })) => {}
        Err(err) => return Err(format!("Unexpected error: {}", err)),
        Ok(()) => return Err("Expected top_n = 0 to be rejected".to_owned()),
    }

    let encoding = super::types::ConfigFile {
        encoding: Some("ebcdic".to_owned()),
        ..Default::default()
    };
    match apply_config(&mut args, &matches, &encoding) {
        Err(AppError::Config(ConfigError::InvalidEncoding { value })) if value == "ebcdic" => {
            Ok(())
        }
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(()) => Err("Expected unknown encoding to be rejected".to_owned()),
    }
}
