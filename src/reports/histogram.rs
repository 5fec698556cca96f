use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

pub const HOURS_PER_DAY: usize = 24;

/// Per-hour-of-day request counts.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct HourHistogram([u64; HOURS_PER_DAY]);

impl HourHistogram {
    pub fn record(&mut self, timestamp: &NaiveDateTime) {
        let hour = usize::try_from(timestamp.hour()).unwrap_or(HOURS_PER_DAY);
        if let Some(bin) = self.0.get_mut(hour) {
            *bin = bin.saturating_add(1);
        }
    }

    #[must_use]
    pub const fn bins(&self) -> &[u64; HOURS_PER_DAY] {
        &self.0
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().fold(0u64, |acc, count| acc.saturating_add(*count))
    }
}

impl<'event> FromIterator<&'event NaiveDateTime> for HourHistogram {
    fn from_iter<I: IntoIterator<Item = &'event NaiveDateTime>>(iter: I) -> Self {
        let mut histogram = HourHistogram::default();
        for timestamp in iter {
            histogram.record(timestamp);
        }
        histogram
    }
}
