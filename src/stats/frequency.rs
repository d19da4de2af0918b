use std::collections::BTreeMap;

use crate::data::model::{month_name, weekday_name, ColumnValue, Dataset, Trip};

use super::{most_frequent, EmptyDataset};

// ---------------------------------------------------------------------------
// Grouping columns and report specs
// ---------------------------------------------------------------------------

/// A trip attribute usable as a grouping key component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Month,
    Weekday,
    Hour,
    StartStation,
    EndStation,
}

impl Column {
    /// Extract the typed key component from one trip.
    fn value(self, trip: &Trip) -> ColumnValue {
        match self {
            Column::Month => ColumnValue::Integer(trip.month as i64),
            Column::Weekday => ColumnValue::Text(weekday_name(trip.weekday).to_string()),
            Column::Hour => ColumnValue::Integer(trip.hour as i64),
            Column::StartStation => ColumnValue::Text(trip.start_station.clone()),
            Column::EndStation => ColumnValue::Text(trip.end_station.clone()),
        }
    }
}

/// One "most frequent" query: ordered grouping columns plus a display label.
#[derive(Debug, Clone)]
pub struct AggregationSpec {
    pub columns: Vec<Column>,
    pub label: &'static str,
}

impl AggregationSpec {
    pub fn new(columns: Vec<Column>, label: &'static str) -> Self {
        AggregationSpec { columns, label }
    }

    fn is_month_only(&self) -> bool {
        self.columns == [Column::Month]
    }
}

/// The "most frequent times of travel" report family.
pub fn travel_time_specs() -> Vec<AggregationSpec> {
    vec![
        AggregationSpec::new(vec![Column::Month], "MOST FREQUENT MONTH"),
        AggregationSpec::new(vec![Column::Weekday], "MOST FREQUENT WEEKDAY"),
        AggregationSpec::new(vec![Column::Hour], "MOST FREQUENT HOUR"),
    ]
}

/// The "most popular stations and trip" report family.
pub fn station_specs() -> Vec<AggregationSpec> {
    vec![
        AggregationSpec::new(vec![Column::StartStation], "MOST POPULAR START STATION"),
        AggregationSpec::new(vec![Column::EndStation], "MOST POPULAR END STATION"),
        AggregationSpec::new(
            vec![Column::StartStation, Column::EndStation],
            "MOST POPULAR TRIP",
        ),
    ]
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Winner of one aggregation spec.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationResult {
    pub label: &'static str,
    /// Rendered winning key: a single value or the comma-joined composite.
    pub key: String,
    pub count: u64,
    /// Winning count over the total row count, as a fraction.
    pub share: f64,
    pub total: u64,
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Count rows per distinct composite key. Keys are the comma-joined
/// renderings of the component values, in column order.
pub fn group_counts(dataset: &Dataset, columns: &[Column]) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for trip in &dataset.trips {
        let parts: Vec<String> = columns
            .iter()
            .map(|col| col.value(trip).to_string())
            .collect();
        *counts.entry(parts.join(", ")).or_insert(0) += 1;
    }
    counts
}

/// Answer each spec's "most frequent" query over the dataset. Ties go to
/// the lexicographically smallest rendered key.
pub fn compute(
    dataset: &Dataset,
    specs: &[AggregationSpec],
) -> Result<Vec<AggregationResult>, EmptyDataset> {
    if dataset.is_empty() {
        return Err(EmptyDataset);
    }
    let total = dataset.len() as u64;

    let mut results = Vec::with_capacity(specs.len());
    for spec in specs {
        let counts = group_counts(dataset, &spec.columns);
        let (key, count) = most_frequent(&counts).ok_or(EmptyDataset)?;
        // A winning month number reads better as its calendar name.
        let key = if spec.is_month_only() {
            key.parse()
                .ok()
                .and_then(month_name)
                .map(str::to_string)
                .unwrap_or(key)
        } else {
            key
        };
        results.push(AggregationResult {
            label: spec.label,
            key,
            count,
            share: count as f64 / total as f64,
            total,
        });
    }
    Ok(results)
}
