use super::counting::{OrderedCounter, RankedCounts};
use crate::events::{RequestEvent, feature_key};

const ERROR_STATUS_FLOOR: u16 = 400;

/// Failed requests (4xx/5xx) per feature and verb, most frequent first.
#[must_use]
pub fn error_feature_frequency(events: &[RequestEvent]) -> RankedCounts {
    let mut counter = OrderedCounter::default();
    for event in events.iter().filter(|event| event.status >= ERROR_STATUS_FLOOR) {
        let key = feature_key(&event.url);
        if key.is_empty() {
            continue;
        }
        counter.increment(format!("{} {}", key, event.method.verb_label()));
    }
    counter.most_common(None)
}
