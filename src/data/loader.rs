use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;

use super::model::{Dataset, SchemaCapabilities, Trip};

// ---------------------------------------------------------------------------
// City registry
// ---------------------------------------------------------------------------

/// Supported cities and their extract file names, in prompt order.
pub const CITY_FILES: [(&str, &str); 3] = [
    ("chicago", "chicago.csv"),
    ("new york city", "new_york_city.csv"),
    ("washington", "washington.csv"),
];

/// Timestamp layout used by the city extracts.
const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unknown city `{0}`")]
    UnknownCity(String),
    #[error("data file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("row {row}: {message}")]
    Parse { row: usize, message: String },
}

// ---------------------------------------------------------------------------
// CSV row layout
// ---------------------------------------------------------------------------

/// One raw CSV row. `Gender` and `Birth Year` default to `None` when a
/// city's schema lacks the column; `Birth Year` is float-formatted in the
/// extracts (`1992.0`).
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type")]
    user_type: String,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Loads city extracts from a data directory. The city table is fixed; only
/// the directory comes from configuration.
#[derive(Debug, Clone)]
pub struct Loader {
    data_dir: PathBuf,
}

impl Loader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Loader {
            data_dir: data_dir.into(),
        }
    }

    /// City selectors accepted by [`Loader::load`], in registry order.
    pub fn cities(&self) -> impl Iterator<Item = &'static str> {
        CITY_FILES.iter().map(|(city, _)| *city)
    }

    /// Load one city's trips, deriving month/weekday/hour per row and
    /// recording which optional columns the schema carries.
    pub fn load(&self, city: &str) -> Result<Dataset, LoadError> {
        let file_name = CITY_FILES
            .iter()
            .find(|(name, _)| *name == city)
            .map(|(_, file)| *file)
            .ok_or_else(|| LoadError::UnknownCity(city.to_string()))?;
        let path = self.data_dir.join(file_name);
        if !path.exists() {
            return Err(LoadError::FileNotFound(path));
        }

        let mut reader = csv::Reader::from_path(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;

        let capabilities = {
            let headers = reader.headers().map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?;
            SchemaCapabilities {
                gender: headers.iter().any(|h| h == "Gender"),
                birth_year: headers.iter().any(|h| h == "Birth Year"),
            }
        };

        let mut trips = Vec::new();
        for (i, record) in reader.deserialize::<RawTrip>().enumerate() {
            // Line 1 is the header.
            let row = i + 2;
            let raw = record.map_err(|e| LoadError::Parse {
                row,
                message: e.to_string(),
            })?;
            let start_time = NaiveDateTime::parse_from_str(&raw.start_time, START_TIME_FORMAT)
                .map_err(|e| LoadError::Parse {
                    row,
                    message: format!("bad Start Time `{}`: {e}", raw.start_time),
                })?;
            trips.push(
                Trip::new(
                    start_time,
                    raw.trip_duration,
                    raw.start_station,
                    raw.end_station,
                    raw.user_type,
                )
                .with_gender(raw.gender)
                .with_birth_year(raw.birth_year.map(|y| y as i32)),
            );
        }

        log::info!("Loaded {} trips from {}", trips.len(), path.display());
        log::debug!("Schema capabilities: {capabilities:?}");
        Ok(Dataset::new(trips, capabilities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use std::env;
    use std::fs;

    const FULL_SCHEMA: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
100,2017-01-02 08:15:00,2017-01-02 08:25:00,600,Canal St,State St,Subscriber,Male,1984.0
101,2017-06-21 17:05:00,2017-06-21 17:20:00,900,State St,Canal St,Customer,,
";

    const NO_DEMOGRAPHICS: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
200,2017-03-05 12:00:00,2017-03-05 12:10:00,600,K St,M St,Subscriber
";

    fn write_city(dir_name: &str, file_name: &str, contents: &str) -> PathBuf {
        let dir = env::temp_dir().join(dir_name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file_name), contents).unwrap();
        dir
    }

    #[test]
    fn load_derives_attributes_and_capabilities() {
        let dir = write_city("bikeshare_loader_full", "chicago.csv", FULL_SCHEMA);
        let ds = Loader::new(&dir).load("chicago").unwrap();

        assert_eq!(ds.len(), 2);
        assert!(ds.capabilities.gender);
        assert!(ds.capabilities.birth_year);

        let first = &ds.trips[0];
        assert_eq!(first.month, 1);
        assert_eq!(first.weekday, Weekday::Mon);
        assert_eq!(first.hour, 8);
        assert_eq!(first.gender.as_deref(), Some("Male"));
        assert_eq!(first.birth_year, Some(1984));

        // Row with empty optional cells.
        let second = &ds.trips[1];
        assert_eq!(second.gender, None);
        assert_eq!(second.birth_year, None);
    }

    #[test]
    fn load_without_demographic_columns() {
        let dir = write_city("bikeshare_loader_bare", "washington.csv", NO_DEMOGRAPHICS);
        let ds = Loader::new(&dir).load("washington").unwrap();

        assert!(!ds.capabilities.gender);
        assert!(!ds.capabilities.birth_year);
        assert_eq!(ds.trips[0].gender, None);
        assert_eq!(ds.trips[0].birth_year, None);
    }

    #[test]
    fn unknown_city_is_rejected() {
        let loader = Loader::new(env::temp_dir());
        assert!(matches!(
            loader.load("springfield"),
            Err(LoadError::UnknownCity(_))
        ));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = env::temp_dir().join("bikeshare_loader_empty_dir");
        fs::create_dir_all(&dir).unwrap();
        let _ = fs::remove_file(dir.join("chicago.csv"));
        assert!(matches!(
            Loader::new(&dir).load("chicago"),
            Err(LoadError::FileNotFound(_))
        ));
    }

    #[test]
    fn malformed_timestamp_is_a_parse_error() {
        let csv = FULL_SCHEMA.replace("2017-01-02 08:15:00", "not-a-time");
        let dir = write_city("bikeshare_loader_bad_time", "chicago.csv", &csv);
        match Loader::new(&dir).load("chicago") {
            Err(LoadError::Parse { row, .. }) => assert_eq!(row, 2),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_duration_is_a_parse_error() {
        let csv = FULL_SCHEMA.replace(",600,", ",short,");
        let dir = write_city("bikeshare_loader_bad_duration", "chicago.csv", &csv);
        assert!(matches!(
            Loader::new(&dir).load("chicago"),
            Err(LoadError::Parse { .. })
        ));
    }
}
