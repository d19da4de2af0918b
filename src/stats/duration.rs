use crate::data::model::Dataset;

use super::{round1, EmptyDataset};

const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Total and mean trip duration with display-friendly unit conversions.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationSummary {
    pub total_seconds: f64,
    pub mean_seconds: f64,
    /// Whole days in the total.
    pub total_days: u64,
    /// Hours left over after the whole days, rounded to one decimal.
    pub remainder_hours: f64,
    /// Whole minutes in the mean.
    pub mean_minutes: u64,
    /// Whole seconds left over after the whole minutes.
    pub mean_remainder_seconds: u64,
}

/// Sum and average the trip durations. Fails on an empty dataset, where
/// the mean is undefined.
pub fn compute(dataset: &Dataset) -> Result<DurationSummary, EmptyDataset> {
    if dataset.is_empty() {
        return Err(EmptyDataset);
    }

    let total_seconds: f64 = dataset.trips.iter().map(|t| t.duration_seconds).sum();
    let mean_seconds = total_seconds / dataset.len() as f64;

    Ok(DurationSummary {
        total_seconds,
        mean_seconds,
        total_days: (total_seconds / SECONDS_PER_DAY).floor() as u64,
        remainder_hours: round1((total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR),
        mean_minutes: (mean_seconds / SECONDS_PER_MINUTE).floor() as u64,
        mean_remainder_seconds: (mean_seconds % SECONDS_PER_MINUTE).floor() as u64,
    })
}
