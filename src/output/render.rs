use std::collections::BTreeMap;

use super::format::{format_signed_x100, format_x100, write_line};
use crate::error::{AppError, AppResult, OutputError};
use crate::reports::{HourHistogram, RankedCounts, ReminderRetention, UsageReports};

/// Renders the reports as one pretty-printed JSON object.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(reports: &UsageReports) -> AppResult<String> {
    let mut json = serde_json::to_string_pretty(reports)
        .map_err(|err| AppError::output(OutputError::Serialize { source: err }))?;
    json.push('\n');
    Ok(json)
}

/// Renders the reports as plain-text sections.
///
/// # Errors
///
/// Returns an error if formatting into the buffer fails.
pub fn render_text(reports: &UsageReports) -> AppResult<String> {
    let mut output = String::new();

    write_ranked(
        &mut output,
        "Features with the most errors",
        &reports.error_features,
    )?;

    write_line(&mut output, "Schedule update frequency:")?;
    let cadence = &reports.schedule_cadence;
    write_line(&mut output, &format!("  daily: {}", cadence.daily))?;
    write_line(&mut output, &format!("  weekly: {}", cadence.weekly))?;
    write_line(&mut output, &format!("  monthly: {}", cadence.monthly))?;

    write_ranked(
        &mut output,
        "Least used features",
        &reports.least_used_features,
    )?;
    write_hours(
        &mut output,
        "Flashcard study hours",
        &reports.flashcard_hours,
    )?;
    write_ranked(
        &mut output,
        "Most used features",
        &reports.most_used_features,
    )?;
    write_subjects(&mut output, &reports.flashcard_subjects)?;
    write_hours(
        &mut output,
        "Meeting scheduling hours",
        &reports.meeting_hours,
    )?;

    write_line(&mut output, "Reminder retention:")?;
    match reports.reminder_retention {
        ReminderRetention::NoData => write_line(&mut output, "  no data")?,
        ReminderRetention::Measured {
            creates,
            deletes,
            deletion_percentage_x100,
            retention_percentage_x100,
        } => {
            write_line(&mut output, &format!("  created: {}", creates))?;
            write_line(&mut output, &format!("  deleted: {}", deletes))?;
            write_line(
                &mut output,
                &format!("  deletion: {}%", format_x100(deletion_percentage_x100)),
            )?;
            write_line(
                &mut output,
                &format!(
                    "  retention: {}%",
                    format_signed_x100(retention_percentage_x100)
                ),
            )?;
        }
    }

    Ok(output)
}

fn write_ranked(output: &mut String, title: &str, counts: &RankedCounts) -> AppResult<()> {
    write_line(output, &format!("{}:", title))?;
    if counts.is_empty() {
        return write_line(output, "  none");
    }
    for entry in counts.entries() {
        write_line(output, &format!("  {}: {}", entry.label, entry.count))?;
    }
    Ok(())
}

fn write_hours(output: &mut String, title: &str, histogram: &HourHistogram) -> AppResult<()> {
    write_line(
        output,
        &format!("{} ({} requests):", title, histogram.total()),
    )?;
    for (hour, count) in histogram.bins().iter().enumerate() {
        if *count > 0 {
            write_line(output, &format!("  {:02}:00 {}", hour, count))?;
        }
    }
    Ok(())
}

fn write_subjects(output: &mut String, subjects: &BTreeMap<String, u64>) -> AppResult<()> {
    write_line(output, "Flashcard subjects:")?;
    if subjects.is_empty() {
        return write_line(output, "  none");
    }
    for (subject, count) in subjects {
        write_line(output, &format!("  {}: {}", subject, count))?;
    }
    Ok(())
}
