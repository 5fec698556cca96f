//! PNG chart export for the usage reports.
mod bars;


use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{error, info};

use crate::error::{AppError, AppResult, OutputError};
use crate::reports::{HourHistogram, RankedCounts, ReminderRetention, UsageReports};

pub use bars::{Bar, plot_bar_chart};

fn ranked_bars(counts: &RankedCounts) -> Vec<Bar> {
    counts
        .entries()
        .iter()
        .map(|entry| Bar {
            label: entry.label.clone(),
            value: entry.count,
        })
        .collect()
}

fn hour_bars(histogram: &HourHistogram) -> Vec<Bar> {
    histogram
        .bins()
        .iter()
        .enumerate()
        .map(|(hour, count)| Bar {
            label: format!("{:02}h", hour),
            value: *count,
        })
        .collect()
}

/// Writes one PNG per report into `dir` and returns the written paths.
///
/// The reminder chart is skipped when no reminder was created.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or a chart fails to
/// render.
pub async fn plot_reports(reports: &UsageReports, dir: &Path) -> AppResult<Vec<PathBuf>> {
    if let Err(err) = fs::create_dir_all(dir).await {
        error!(
            "Failed to create output directory '{}': {}",
            dir.display(),
            err
        );
        return Err(AppError::output(OutputError::CreateChartsDir {
            path: dir.to_path_buf(),
            source: err,
        }));
    }

    let mut written = Vec::new();
    let mut plot = |file: &str, title: &str, y_desc: &str, bars: &[Bar]| -> AppResult<()> {
        let path = dir.join(file);
        info!("Plotting {}...", title.to_ascii_lowercase());
        plot_bar_chart(&path, title, y_desc, bars)?;
        written.push(path);
        Ok(())
    };

    plot(
        "error_features.png",
        "Features with the most errors",
        "Failed requests",
        &ranked_bars(&reports.error_features),
    )?;

    let cadence = &reports.schedule_cadence;
    plot(
        "schedule_cadence.png",
        "User schedule update frequency",
        "Updates",
        &[
            Bar {
                label: "daily".to_owned(),
                value: cadence.daily,
            },
            Bar {
                label: "weekly".to_owned(),
                value: cadence.weekly,
            },
            Bar {
                label: "monthly".to_owned(),
                value: cadence.monthly,
            },
        ],
    )?;

    plot(
        "least_used_features.png",
        "Least used features",
        "Requests",
        &ranked_bars(&reports.least_used_features),
    )?;
    plot(
        "flashcard_hours.png",
        "Hour distribution for flashcards",
        "Requests",
        &hour_bars(&reports.flashcard_hours),
    )?;
    plot(
        "most_used_features.png",
        "Most used features",
        "Requests",
        &ranked_bars(&reports.most_used_features),
    )?;

    let subjects: Vec<Bar> = reports
        .flashcard_subjects
        .iter()
        .map(|(subject, count)| Bar {
            label: subject.clone(),
            value: *count,
        })
        .collect();
    plot(
        "flashcard_subjects.png",
        "Flashcard subjects",
        "Requests",
        &subjects,
    )?;

    plot(
        "meeting_hours.png",
        "Hour distribution for meeting scheduling",
        "Meetings created",
        &hour_bars(&reports.meeting_hours),
    )?;

    match reports.reminder_retention {
        ReminderRetention::NoData => {
            info!("No reminders created; skipping reminder retention chart");
        }
        ReminderRetention::Measured {
            creates, deletes, ..
        } => {
            plot(
                "reminder_retention.png",
                "Reminder retention",
                "Reminders",
                &[
                    Bar {
                        label: "created".to_owned(),
                        value: creates,
                    },
                    Bar {
                        label: "deleted".to_owned(),
                        value: deletes,
                    },
                ],
            )?;
        }
    }

    Ok(written)
}
