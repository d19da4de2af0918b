use std::collections::BTreeMap;

use crate::data::model::Dataset;

use super::{most_frequent, round1};

/// Label substituted when a row's gender value is missing.
pub const UNKNOWN_GENDER: &str = "Unknown";

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// One category of a distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionRow {
    pub category: String,
    pub count: u64,
    /// Share of the table total, as a percentage rounded to one decimal.
    pub percent: f64,
}

/// Categories sorted by count descending; equal counts keep ascending
/// category order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistributionTable {
    pub rows: Vec<DistributionRow>,
}

/// Earliest, most recent, and most common of the non-missing birth years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearSummary {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Demographic report for one dataset. `genders` and `birth_years` are
/// `None` when the city's schema lacks the column (and, for birth years,
/// when no value survives the filters) — absent data, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct DemographicSummary {
    pub user_types: DistributionTable,
    pub genders: Option<DistributionTable>,
    pub birth_years: Option<BirthYearSummary>,
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Compute the demographic report. The optional sections are gated on the
/// capability flags recorded at load time.
pub fn compute(dataset: &Dataset) -> DemographicSummary {
    let user_types = distribution(dataset.trips.iter().map(|t| t.user_type.clone()));

    let genders = dataset.capabilities.gender.then(|| {
        distribution(dataset.trips.iter().map(|t| {
            t.gender
                .clone()
                .unwrap_or_else(|| UNKNOWN_GENDER.to_string())
        }))
    });

    let birth_years = if dataset.capabilities.birth_year {
        birth_year_summary(dataset)
    } else {
        None
    };

    DemographicSummary {
        user_types,
        genders,
        birth_years,
    }
}

fn distribution(categories: impl Iterator<Item = String>) -> DistributionTable {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for category in categories {
        *counts.entry(category).or_insert(0) += 1;
    }
    let total: u64 = counts.values().sum();

    let mut rows: Vec<DistributionRow> = counts
        .into_iter()
        .map(|(category, count)| DistributionRow {
            percent: round1(100.0 * count as f64 / total as f64),
            category,
            count,
        })
        .collect();
    // Stable sort keeps the map's ascending category order for equal counts.
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    DistributionTable { rows }
}

fn birth_year_summary(dataset: &Dataset) -> Option<BirthYearSummary> {
    let mut counts: BTreeMap<i32, u64> = BTreeMap::new();
    for year in dataset.trips.iter().filter_map(|t| t.birth_year) {
        *counts.entry(year).or_insert(0) += 1;
    }

    let earliest = *counts.keys().next()?;
    let most_recent = *counts.keys().next_back()?;
    let (most_common, _) = most_frequent(&counts)?;
    Some(BirthYearSummary {
        earliest,
        most_recent,
        most_common,
    })
}
