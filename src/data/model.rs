use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

// ---------------------------------------------------------------------------
// Calendar name tables
// ---------------------------------------------------------------------------

/// Calendar month names, indexed by month number minus one.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Look up the calendar name for a 1-based month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    (month as usize)
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i))
        .copied()
}

/// Full English weekday name (`Weekday`'s own `Display` is abbreviated).
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ---------------------------------------------------------------------------
// ColumnValue – a single typed cell of a group key
// ---------------------------------------------------------------------------

/// A typed cell extracted from a trip when building composite group keys.
/// Rendered with `Display` when keys are compared or reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValue {
    Integer(i64),
    Text(String),
}

impl fmt::Display for ColumnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnValue::Integer(i) => write!(f, "{i}"),
            ColumnValue::Text(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// SchemaCapabilities – optional columns present in the loaded schema
// ---------------------------------------------------------------------------

/// Which optional columns the city's schema carries. Recorded once from the
/// CSV header at load time; never re-probed afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaCapabilities {
    pub gender: bool,
    pub birth_year: bool,
}

// ---------------------------------------------------------------------------
// Trip – one row of the city extract
// ---------------------------------------------------------------------------

/// A single trip record. The calendar attributes are derived from
/// `start_time` at construction and stay fixed afterwards.
#[derive(Debug, Clone)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub duration_seconds: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: String,
    /// `None` when the row carries no value or the column is absent.
    pub gender: Option<String>,
    /// `None` when the row carries no value or the column is absent.
    pub birth_year: Option<i32>,
    /// Month of `start_time`, 1–12.
    pub month: u32,
    /// Weekday of `start_time`.
    pub weekday: Weekday,
    /// Hour of `start_time`, 0–23.
    pub hour: u32,
}

impl Trip {
    /// Build a trip, deriving month/weekday/hour from `start_time`.
    pub fn new(
        start_time: NaiveDateTime,
        duration_seconds: f64,
        start_station: String,
        end_station: String,
        user_type: String,
    ) -> Self {
        Trip {
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
            start_time,
            duration_seconds,
            start_station,
            end_station,
            user_type,
            gender: None,
            birth_year: None,
        }
    }

    pub fn with_gender(mut self, gender: Option<String>) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_birth_year(mut self, birth_year: Option<i32>) -> Self {
        self.birth_year = birth_year;
        self
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded collection
// ---------------------------------------------------------------------------

/// All trips loaded for one city, plus the schema capability flags.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub trips: Vec<Trip>,
    pub capabilities: SchemaCapabilities,
}

impl Dataset {
    pub fn new(trips: Vec<Trip>, capabilities: SchemaCapabilities) -> Self {
        Dataset {
            trips,
            capabilities,
        }
    }

    /// Number of trips.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Whether the dataset has no trips.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}
