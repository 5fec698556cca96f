use std::future::Future;

use tempfile::tempdir;

use super::format::{format_signed_x100, format_x100};
use super::{render_json, render_text, write_reports};
use crate::args::OutputFormat;
use crate::error::{AppError, AppResult};
use crate::events::LogGrammar;
use crate::reports::{ReportEngine, UsageReports};

const SAMPLE_LOG: &str = "\
2024-01-01 10:00:00 INFO Method: GET URL: /tasks/ Response: 200
2024-01-01 11:00:00 INFO Method: GET URL: /tasks/ Response: 404
2024-01-01 12:00:00 INFO Method: POST URL: /reminders/ Response: 200
2024-01-01 12:30:00 INFO Method: POST URL: /reminders/ Response: 200
2024-01-01 13:00:00 INFO Method: DELETE URL: /reminders/r1 Response: 200
2024-01-01 21:15:00 INFO Method: GET URL: /users/u1/math/flash Response: 200
";

fn sample_reports() -> AppResult<UsageReports> {
    let events = LogGrammar::new()?.parse_lines(SAMPLE_LOG);
    Ok(ReportEngine::new()?.compute(&events))
}

fn run_async_test<F>(future: F) -> AppResult<()>
where
    F: Future<Output = AppResult<()>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::output(format!("Failed to build runtime: {}", err)))?;
    runtime.block_on(future)
}

#[test]
fn format_x100_renders_two_decimals() -> AppResult<()> {
    let cases = [(0, "0.00"), (5, "0.05"), (3333, "33.33"), (10_000, "100.00")];
    for (value, expected) in cases {
        if format_x100(value) != expected {
            return Err(AppError::output(format!("format_x100({})", value)));
        }
    }
    if format_signed_x100(-10_000) != "-100.00" || format_signed_x100(6667) != "66.67" {
        return Err(AppError::output("Unexpected signed formatting"));
    }
    Ok(())
}

#[test]
fn render_json_has_one_key_per_report() -> AppResult<()> {
    let json = render_json(&sample_reports()?)?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    let object = value
        .as_object()
        .ok_or_else(|| AppError::output("Expected a JSON object"))?;
    let keys = [
        "error_features",
        "schedule_cadence",
        "least_used_features",
        "flashcard_hours",
        "most_used_features",
        "flashcard_subjects",
        "meeting_hours",
        "reminder_retention",
    ];
    if object.len() != keys.len() {
        return Err(AppError::output(format!("Unexpected key count: {}", object.len())));
    }
    for key in keys {
        if !object.contains_key(key) {
            return Err(AppError::output(format!("Missing key {}", key)));
        }
    }
    let hours = object
        .get("flashcard_hours")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| AppError::output("flashcard_hours should be an array"))?;
    if hours.len() != 24 {
        return Err(AppError::output("Expected 24 hour bins"));
    }
    let retention = object
        .get("reminder_retention")
        .ok_or_else(|| AppError::output("Missing retention"))?;
    if retention.get("status").and_then(serde_json::Value::as_str) != Some("measured")
        || retention
            .get("deletion_percentage_x100")
            .and_then(serde_json::Value::as_u64)
            != Some(5000)
    {
        return Err(AppError::output(format!("Unexpected retention: {}", retention)));
    }
    Ok(())
}

#[test]
fn render_text_lists_sections() -> AppResult<()> {
    let text = render_text(&sample_reports()?)?;
    for needle in [
        "Features with the most errors:\n  tasks lecture: 1\n",
        "Most used features:\n  reminders: 3\n  tasks: 2\n",
        "Flashcard subjects:\n  math: 1\n",
        "  21:00 1\n",
        "  deletion: 50.00%\n",
        "  retention: 50.00%\n",
    ] {
        if !text.contains(needle) {
            return Err(AppError::output(format!(
                "Missing '{}' in:\n{}",
                needle, text
            )));
        }
    }
    Ok(())
}

#[test]
fn render_text_shows_no_data_sentinel() -> AppResult<()> {
    let reports = ReportEngine::new()?.compute(&[]);
    let text = render_text(&reports)?;
    if !text.contains("Reminder retention:\n  no data\n") {
        return Err(AppError::output(format!("Missing sentinel in:\n{}", text)));
    }
    if !text.contains("Most used features:\n  none\n") {
        return Err(AppError::output("Expected empty ranking marker"));
    }
    Ok(())
}

#[test]
fn write_reports_to_file() -> AppResult<()> {
    run_async_test(async {
        let dir = tempdir()?;
        let path = dir.path().join("reports.json");
        let path_str = path
            .to_str()
            .ok_or_else(|| AppError::output("Failed to convert path to string"))?;
        write_reports(&sample_reports()?, OutputFormat::Json, Some(path_str)).await?;
        let written = std::fs::read_to_string(&path)?;
        let value: serde_json::Value = serde_json::from_str(&written)?;
        if value.get("most_used_features").is_none() {
            return Err(AppError::output("Missing most_used_features in file"));
        }
        Ok(())
    })
}
