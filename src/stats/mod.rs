/// Statistics layer: grouped frequency, duration, and demographic reports
/// computed over a (possibly filtered) dataset. All functions are pure.

pub mod demographics;
pub mod duration;
pub mod frequency;

use std::collections::BTreeMap;

use thiserror::Error;

/// The dataset has no rows, so a winner or a mean is undefined. Callers
/// report this as a "no data" outcome for the affected report only.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no trips match the selected filters")]
pub struct EmptyDataset;

/// Pick the entry with the highest count. Iteration is ascending in key
/// order and only a strictly greater count replaces the current best, so
/// ties go to the smallest key.
pub(crate) fn most_frequent<K: Ord + Clone>(counts: &BTreeMap<K, u64>) -> Option<(K, u64)> {
    let mut best: Option<(&K, u64)> = None;
    for (key, &count) in counts {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((key, count));
        }
    }
    best.map(|(key, count)| (key.clone(), count))
}

/// Round to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
