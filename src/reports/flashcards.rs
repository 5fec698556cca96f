use std::collections::BTreeMap;

use regex::Regex;

use super::histogram::HourHistogram;
use crate::events::RequestEvent;

/// Hour of day of every flashcard request.
#[must_use]
pub fn flashcard_study_hours(events: &[RequestEvent]) -> HourHistogram {
    events
        .iter()
        .filter(|event| event.url.contains("flash"))
        .map(|event| &event.timestamp)
        .collect()
}

/// Requests per flashcard subject, read from `/users/<id>/<subject>/flash`.
#[must_use]
pub fn flashcard_subject_frequency(
    events: &[RequestEvent],
    subject: &Regex,
) -> BTreeMap<String, u64> {
    let mut subjects: BTreeMap<String, u64> = BTreeMap::new();
    for name in events.iter().filter_map(|event| {
        subject
            .captures(&event.url)
            .and_then(|captures| captures.get(1))
    }) {
        let count = subjects.entry(name.as_str().to_owned()).or_insert(0);
        *count = count.saturating_add(1);
    }
    subjects
}
