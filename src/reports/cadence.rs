use std::collections::HashMap;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::Serialize;

use crate::events::{HttpMethod, RequestEvent};

const SECONDS_PER_DAY: i64 = 86_400;
const DAILY_LIMIT_DAYS: i64 = 2;
const WEEKLY_LIMIT_DAYS: i64 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CadenceBucket {
    Daily,
    Weekly,
    Monthly,
}

/// How often schedules get successfully updated, counted per gap between
/// consecutive updates of the same schedule.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct UpdateCadence {
    pub daily: u64,
    pub weekly: u64,
    pub monthly: u64,
}

impl UpdateCadence {
    fn record(&mut self, bucket: CadenceBucket) {
        let slot = match bucket {
            CadenceBucket::Daily => &mut self.daily,
            CadenceBucket::Weekly => &mut self.weekly,
            CadenceBucket::Monthly => &mut self.monthly,
        };
        *slot = slot.saturating_add(1);
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.daily
            .saturating_add(self.weekly)
            .saturating_add(self.monthly)
    }
}

/// Buckets a gap of whole days: under 2 is daily, under 8 weekly, else
/// monthly.
#[must_use]
pub const fn classify_gap(days: i64) -> CadenceBucket {
    if days < DAILY_LIMIT_DAYS {
        CadenceBucket::Daily
    } else if days < WEEKLY_LIMIT_DAYS {
        CadenceBucket::Weekly
    } else {
        CadenceBucket::Monthly
    }
}

/// Whole days from `earlier` to `later`, floored.
fn whole_days(earlier: &NaiveDateTime, later: &NaiveDateTime) -> i64 {
    later
        .signed_duration_since(*earlier)
        .num_seconds()
        .checked_div_euclid(SECONDS_PER_DAY)
        .unwrap_or(0)
}

#[must_use]
pub fn schedule_update_cadence(events: &[RequestEvent], schedule: &Regex) -> UpdateCadence {
    let mut updates: HashMap<&str, Vec<&NaiveDateTime>> = HashMap::new();
    for event in events
        .iter()
        .filter(|event| event.method == HttpMethod::Put && event.status == 200)
    {
        let Some(id) = schedule
            .captures(&event.url)
            .and_then(|captures| captures.get(1))
        else {
            continue;
        };
        updates
            .entry(id.as_str())
            .or_default()
            .push(&event.timestamp);
    }

    let mut cadence = UpdateCadence::default();
    for times in updates.values() {
        for pair in times.windows(2) {
            if let [earlier, later] = pair {
                cadence.record(classify_gap(whole_days(earlier, later)));
            }
        }
    }
    cadence
}
