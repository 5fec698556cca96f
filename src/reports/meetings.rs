use super::histogram::HourHistogram;
use crate::events::{HttpMethod, RequestEvent};

/// Hour of day at which meetings are successfully created.
#[must_use]
pub fn meeting_scheduling_hours(events: &[RequestEvent]) -> HourHistogram {
    events
        .iter()
        .filter(|event| {
            event.method == HttpMethod::Post
                && event.status == 200
                && event.url.contains("/meetings/")
        })
        .map(|event| &event.timestamp)
        .collect()
}
