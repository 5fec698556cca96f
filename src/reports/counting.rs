use std::collections::HashMap;

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LabelCount {
    pub label: String,
    pub count: u64,
}

/// Ordered `(label, count)` pairs as produced by a ranking report.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct RankedCounts(Vec<LabelCount>);

impl RankedCounts {
    #[must_use]
    pub fn entries(&self) -> &[LabelCount] {
        &self.0
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<u64> {
        self.0
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.count)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Counter that remembers the order in which labels were first seen, so
/// rankings break ties by first encounter.
#[derive(Debug, Default)]
pub(super) struct OrderedCounter {
    index: HashMap<String, usize>,
    entries: Vec<LabelCount>,
}

impl OrderedCounter {
    pub(super) fn increment(&mut self, label: String) {
        if let Some(slot) = self
            .index
            .get(&label)
            .and_then(|&position| self.entries.get_mut(position))
        {
            slot.count = slot.count.saturating_add(1);
            return;
        }
        self.index.insert(label.clone(), self.entries.len());
        self.entries.push(LabelCount { label, count: 1 });
    }

    /// Highest counts first; equal counts keep first-encounter order.
    pub(super) fn most_common(mut self, limit: Option<usize>) -> RankedCounts {
        self.entries.sort_by(|left, right| right.count.cmp(&left.count));
        if let Some(limit) = limit {
            self.entries.truncate(limit);
        }
        RankedCounts(self.entries)
    }

    /// Lowest counts first; equal counts keep first-encounter order.
    pub(super) fn least_common(mut self, limit: usize) -> RankedCounts {
        self.entries.sort_by_key(|entry| entry.count);
        self.entries.truncate(limit);
        RankedCounts(self.entries)
    }
}
