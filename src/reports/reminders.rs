use serde::Serialize;

use crate::events::{HttpMethod, RequestEvent};

const PERCENT_X100: u64 = 10_000;

/// Share of created reminders that were deleted, in hundredths of a percent
/// rounded half up. Retention is always exactly `100.00 - deletion`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReminderRetention {
    /// No reminder was created, so no ratio exists.
    NoData,
    Measured {
        creates: u64,
        deletes: u64,
        deletion_percentage_x100: u64,
        /// Negative when more reminders were deleted than created.
        retention_percentage_x100: i64,
    },
}

#[must_use]
pub fn reminder_retention(events: &[RequestEvent]) -> ReminderRetention {
    let mut creates: u64 = 0;
    let mut deletes: u64 = 0;
    for event in events
        .iter()
        .filter(|event| event.status == 200 && event.url.contains("reminders"))
    {
        match event.method {
            HttpMethod::Post => creates = creates.saturating_add(1),
            HttpMethod::Delete => deletes = deletes.saturating_add(1),
            HttpMethod::Get | HttpMethod::Put => {}
        }
    }

    let Some(deletion_percentage_x100) = deletes
        .saturating_mul(PERCENT_X100)
        .saturating_add(creates / 2)
        .checked_div(creates)
    else {
        return ReminderRetention::NoData;
    };
    let retention_percentage_x100 = i64::try_from(PERCENT_X100)
        .unwrap_or(i64::MAX)
        .saturating_sub(i64::try_from(deletion_percentage_x100).unwrap_or(i64::MAX));
    ReminderRetention::Measured {
        creates,
        deletes,
        deletion_percentage_x100,
        retention_percentage_x100,
    }
}
