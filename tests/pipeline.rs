use std::env;
use std::fs;
use std::path::PathBuf;

use bikeshare_explorer::data::filter::{self, DayFilter, MonthFilter};
use bikeshare_explorer::data::loader::Loader;
use bikeshare_explorer::data::model::Dataset;
use bikeshare_explorer::stats::frequency::{self, station_specs, travel_time_specs};
use bikeshare_explorer::stats::{demographics, duration, EmptyDataset};

const EXTRACT: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-06-05 08:00:00,2017-06-05 08:01:40,100,A,B,Subscriber,Male,1984.0
1,2017-06-06 09:00:00,2017-06-06 09:03:20,200,A,C,Subscriber,Female,1991.0
2,2017-06-07 10:00:00,2017-06-07 10:05:00,300,B,C,Customer,,1991.0
3,2017-05-01 11:00:00,2017-05-01 11:06:40,400,C,A,Customer,Male,
";

fn load_fixture(dir_name: &str) -> Dataset {
    let dir: PathBuf = env::temp_dir().join(dir_name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("chicago.csv"), EXTRACT).unwrap();
    Loader::new(&dir).load("chicago").unwrap()
}

#[test]
fn unfiltered_reports_cover_all_rows() {
    let ds = load_fixture("bikeshare_pipeline_all");
    let ds = filter::by_month(&ds, MonthFilter::All);
    let ds = filter::by_day(&ds, DayFilter::All);
    assert_eq!(ds.len(), 4);

    // Station popularity: A starts 2 of 4 trips.
    let stations = frequency::compute(&ds, &station_specs()).unwrap();
    assert_eq!(stations[0].key, "A");
    assert_eq!(stations[0].count, 2);
    assert!((stations[0].share - 0.5).abs() < 1e-9);
    assert_eq!(stations[0].total, 4);

    // Durations: 100+200+300+400.
    let durations = duration::compute(&ds).unwrap();
    assert_eq!(durations.total_seconds, 1_000.0);
    assert_eq!(durations.total_days, 0);
    assert_eq!(durations.remainder_hours, 0.3);
    assert_eq!(durations.mean_seconds, 250.0);
    assert_eq!(durations.mean_minutes, 4);
    assert_eq!(durations.mean_remainder_seconds, 10);

    // Times of travel: June wins 3 of 4, rendered by name.
    let times = frequency::compute(&ds, &travel_time_specs()).unwrap();
    assert_eq!(times[0].key, "June");
    assert_eq!(times[0].count, 3);

    // Demographics: 2/2 user-type tie lists Customer first; the missing
    // gender value is recoded; birth-year mode is the 1991 pair.
    let people = demographics::compute(&ds);
    let user_rows = &people.user_types.rows;
    assert_eq!(user_rows[0].category, "Customer");
    assert_eq!(user_rows[1].category, "Subscriber");
    assert_eq!(user_rows[0].percent, 50.0);

    let genders = people.genders.expect("gender column is present");
    assert_eq!(genders.rows[0].category, "Male");
    assert_eq!(genders.rows[0].count, 2);
    assert!(genders.rows.iter().any(|r| r.category == "Unknown" && r.count == 1));

    let years = people.birth_years.expect("birth year column is present");
    assert_eq!(years.earliest, 1984);
    assert_eq!(years.most_recent, 1991);
    assert_eq!(years.most_common, 1991);
}

#[test]
fn month_filter_restricts_every_report() {
    let ds = load_fixture("bikeshare_pipeline_june");
    let june = filter::by_day(
        &filter::by_month(&ds, MonthFilter::parse("jun").unwrap()),
        DayFilter::All,
    );
    assert_eq!(june.len(), 3);

    let stations = frequency::compute(&june, &station_specs()).unwrap();
    assert_eq!(stations[0].key, "A");
    assert_eq!(stations[0].count, 2);
    assert_eq!(stations[0].total, 3);

    let durations = duration::compute(&june).unwrap();
    assert_eq!(durations.total_seconds, 600.0);
}

#[test]
fn empty_filter_combination_reports_no_data_without_failing_demographics() {
    let ds = load_fixture("bikeshare_pipeline_empty");
    // No trips in January.
    let january = filter::by_month(&ds, MonthFilter::parse("jan").unwrap());
    assert!(january.is_empty());

    assert_eq!(
        frequency::compute(&january, &travel_time_specs()),
        Err(EmptyDataset)
    );
    assert_eq!(duration::compute(&january), Err(EmptyDataset));

    // Demographics degrade to empty tables, not errors.
    let people = demographics::compute(&january);
    assert!(people.user_types.rows.is_empty());
    assert_eq!(people.birth_years, None);
}
