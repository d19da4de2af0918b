use chrono::Weekday;

use super::model::{Dataset, Trip};

// ---------------------------------------------------------------------------
// Accepted filter codes
// ---------------------------------------------------------------------------

/// Month codes accepted by the month filter, in calendar order. The city
/// extracts only cover January through June, so the table stops at `jun`.
pub const MONTH_CODES: [&str; 6] = ["jan", "feb", "mar", "apr", "may", "jun"];

/// Three-letter weekday codes accepted by the day filter.
pub const DAY_CODES: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// Sentinel code that disables a filter.
pub const ALL: &str = "all";

// ---------------------------------------------------------------------------
// Filter selections
// ---------------------------------------------------------------------------

/// A validated month selection: `all` or one of [`MONTH_CODES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Month(u32),
}

impl MonthFilter {
    /// Parse a month code. Returns `None` for anything outside the table.
    pub fn parse(code: &str) -> Option<Self> {
        if code == ALL {
            return Some(MonthFilter::All);
        }
        MONTH_CODES
            .iter()
            .position(|c| *c == code)
            .map(|i| MonthFilter::Month(i as u32 + 1))
    }
}

/// A validated weekday selection: `all` or one of [`DAY_CODES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl DayFilter {
    /// Parse a day code. The 3-letter codes map one-to-one onto [`Weekday`].
    pub fn parse(code: &str) -> Option<Self> {
        let day = match code {
            "all" => return Some(DayFilter::All),
            "mon" => Weekday::Mon,
            "tue" => Weekday::Tue,
            "wed" => Weekday::Wed,
            "thu" => Weekday::Thu,
            "fri" => Weekday::Fri,
            "sat" => Weekday::Sat,
            "sun" => Weekday::Sun,
            _ => return None,
        };
        Some(DayFilter::Day(day))
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Keep trips whose derived month matches the selection. The source dataset
/// is left untouched; `All` reproduces the same logical row set.
pub fn by_month(dataset: &Dataset, month: MonthFilter) -> Dataset {
    retain(dataset, |trip| match month {
        MonthFilter::All => true,
        MonthFilter::Month(m) => trip.month == m,
    })
}

/// Keep trips whose derived weekday matches the selection.
pub fn by_day(dataset: &Dataset, day: DayFilter) -> Dataset {
    retain(dataset, |trip| match day {
        DayFilter::All => true,
        DayFilter::Day(d) => trip.weekday == d,
    })
}

fn retain(dataset: &Dataset, keep: impl Fn(&Trip) -> bool) -> Dataset {
    let trips = dataset
        .trips
        .iter()
        .filter(|trip| keep(trip))
        .cloned()
        .collect();
    Dataset::new(trips, dataset.capabilities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::SchemaCapabilities;
    use chrono::NaiveDate;

    fn trip(year: i32, month: u32, day: u32) -> Trip {
        let start = NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Trip::new(
            start,
            60.0,
            format!("start-{month}-{day}"),
            "end".to_string(),
            "Subscriber".to_string(),
        )
    }

    fn dataset(trips: Vec<Trip>) -> Dataset {
        Dataset::new(trips, SchemaCapabilities::default())
    }

    fn stations(ds: &Dataset) -> Vec<&str> {
        ds.trips.iter().map(|t| t.start_station.as_str()).collect()
    }

    #[test]
    fn parse_month_codes() {
        assert_eq!(MonthFilter::parse("all"), Some(MonthFilter::All));
        assert_eq!(MonthFilter::parse("jan"), Some(MonthFilter::Month(1)));
        assert_eq!(MonthFilter::parse("jun"), Some(MonthFilter::Month(6)));
        // The table deliberately stops at June.
        assert_eq!(MonthFilter::parse("jul"), None);
        assert_eq!(MonthFilter::parse("January"), None);
    }

    #[test]
    fn parse_day_codes() {
        assert_eq!(DayFilter::parse("all"), Some(DayFilter::All));
        assert_eq!(DayFilter::parse("wed"), Some(DayFilter::Day(Weekday::Wed)));
        assert_eq!(DayFilter::parse("sunday"), None);
    }

    #[test]
    fn all_filters_preserve_every_row() {
        let ds = dataset(vec![trip(2017, 1, 2), trip(2017, 3, 8), trip(2017, 6, 30)]);

        let by_m = by_month(&ds, MonthFilter::All);
        let by_d = by_day(&ds, DayFilter::All);

        assert_eq!(stations(&by_m), stations(&ds));
        assert_eq!(stations(&by_d), stations(&ds));
    }

    #[test]
    fn month_filter_keeps_matching_rows() {
        let ds = dataset(vec![trip(2017, 1, 2), trip(2017, 3, 8), trip(2017, 3, 9)]);

        let march = by_month(&ds, MonthFilter::Month(3));
        assert_eq!(march.len(), 2);
        assert!(march.trips.iter().all(|t| t.month == 3));
        // Source untouched.
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn day_filter_keeps_matching_rows() {
        // 2017-01-02 and 2017-01-09 are Mondays, 2017-01-04 a Wednesday.
        let ds = dataset(vec![trip(2017, 1, 2), trip(2017, 1, 4), trip(2017, 1, 9)]);

        let mondays = by_day(&ds, DayFilter::Day(Weekday::Mon));
        assert_eq!(mondays.len(), 2);
        assert!(mondays.trips.iter().all(|t| t.weekday == Weekday::Mon));
    }

    #[test]
    fn filters_commute() {
        let ds = dataset(vec![
            trip(2017, 1, 2),
            trip(2017, 1, 4),
            trip(2017, 2, 6),
            trip(2017, 2, 8),
            trip(2017, 3, 6),
        ]);

        for month in [MonthFilter::All, MonthFilter::Month(2)] {
            for day in [DayFilter::All, DayFilter::Day(Weekday::Mon)] {
                let month_first = by_day(&by_month(&ds, month), day);
                let day_first = by_month(&by_day(&ds, day), month);
                assert_eq!(stations(&month_first), stations(&day_first));
            }
        }
    }

    #[test]
    fn filter_preserves_capabilities() {
        let caps = SchemaCapabilities {
            gender: true,
            birth_year: false,
        };
        let ds = Dataset::new(vec![trip(2017, 1, 2)], caps);
        assert_eq!(by_month(&ds, MonthFilter::All).capabilities, caps);
    }
}
