use super::counting::{OrderedCounter, RankedCounts};
use crate::events::{RequestEvent, feature_key};

const OK_STATUS: u16 = 200;

/// Successful requests per feature and verb, keeping the `limit` rarest.
#[must_use]
pub fn least_used_features(events: &[RequestEvent], limit: usize) -> RankedCounts {
    let mut counter = OrderedCounter::default();
    for event in events.iter().filter(|event| event.status == OK_STATUS) {
        let key = feature_key(&event.url);
        if key.is_empty() {
            continue;
        }
        counter.increment(format!("{} {}", key, event.method.verb_label()));
    }
    counter.least_common(limit)
}

/// Requests per feature regardless of verb or status, keeping the `limit`
/// most frequent.
#[must_use]
pub fn most_used_features(events: &[RequestEvent], limit: usize) -> RankedCounts {
    let mut counter = OrderedCounter::default();
    for key in events.iter().map(|event| feature_key(&event.url)) {
        if !key.is_empty() {
            counter.increment(key);
        }
    }
    counter.most_common(Some(limit))
}
