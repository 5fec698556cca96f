//! Usage analytics over one in-memory snapshot of request events.
//!
//! Every report is an independent pure pass over the same event slice; none
//! of them fails on empty or sparse input.
mod cadence;
mod counting;
mod errors;
mod flashcards;
mod histogram;
mod meetings;
mod reminders;
mod usage;


use std::collections::BTreeMap;

use regex::Regex;
use serde::Serialize;
use tracing::info;

use crate::args::DEFAULT_TOP_N;
use crate::error::AnalyticsError;
use crate::events::RequestEvent;

pub use cadence::{CadenceBucket, UpdateCadence, classify_gap, schedule_update_cadence};
pub use counting::{LabelCount, RankedCounts};
pub use errors::error_feature_frequency;
pub use flashcards::{flashcard_study_hours, flashcard_subject_frequency};
pub use histogram::{HOURS_PER_DAY, HourHistogram};
pub use meetings::meeting_scheduling_hours;
pub use reminders::{ReminderRetention, reminder_retention};
pub use usage::{least_used_features, most_used_features};

const SCHEDULE_PATTERN: &str = r"/schedules/([\w\d]+)[/]?";
const SUBJECT_PATTERN: &str = r"/users/[^/\s]+/([^/\s]+)/flash";

/// The full battery of reports for one log snapshot.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UsageReports {
    pub error_features: RankedCounts,
    pub schedule_cadence: UpdateCadence,
    pub least_used_features: RankedCounts,
    pub flashcard_hours: HourHistogram,
    pub most_used_features: RankedCounts,
    pub flashcard_subjects: BTreeMap<String, u64>,
    pub meeting_hours: HourHistogram,
    pub reminder_retention: ReminderRetention,
}

/// Runs the report battery; holds the compiled URL sub-patterns.
#[derive(Debug, Clone)]
pub struct ReportEngine {
    schedule: Regex,
    subject: Regex,
    ranking_limit: usize,
}

impl ReportEngine {
    /// Compiles the report URL patterns with the default ranking limit.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in pattern fails to compile.
    pub fn new() -> Result<Self, AnalyticsError> {
        let schedule = Regex::new(SCHEDULE_PATTERN).map_err(|err| AnalyticsError::Pattern {
            context: "schedule url",
            source: err,
        })?;
        let subject = Regex::new(SUBJECT_PATTERN).map_err(|err| AnalyticsError::Pattern {
            context: "flashcard subject url",
            source: err,
        })?;
        Ok(Self {
            schedule,
            subject,
            ranking_limit: DEFAULT_TOP_N,
        })
    }

    /// Sets how many entries the least/most used rankings keep.
    #[must_use]
    pub const fn with_ranking_limit(mut self, limit: usize) -> Self {
        self.ranking_limit = limit;
        self
    }

    #[must_use]
    pub fn compute(&self, events: &[RequestEvent]) -> UsageReports {
        info!("Computing usage reports over {} events", events.len());
        UsageReports {
            error_features: error_feature_frequency(events),
            schedule_cadence: schedule_update_cadence(events, &self.schedule),
            least_used_features: least_used_features(events, self.ranking_limit),
            flashcard_hours: flashcard_study_hours(events),
            most_used_features: most_used_features(events, self.ranking_limit),
            flashcard_subjects: flashcard_subject_frequency(events, &self.subject),
            meeting_hours: meeting_scheduling_hours(events),
            reminder_retention: reminder_retention(events),
        }
    }
}
