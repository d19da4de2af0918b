use std::io;
use std::time::Instant;

use bikeshare_explorer::data::model::{Dataset, Trip};
use bikeshare_explorer::stats::demographics::{DemographicSummary, DistributionTable};
use bikeshare_explorer::stats::duration::DurationSummary;
use bikeshare_explorer::stats::frequency::AggregationResult;
use bikeshare_explorer::stats::EmptyDataset;

use super::prompts;

const SEPARATOR_WIDTH: usize = 60;
const PAGE_SIZE: usize = 5;

pub fn separator() {
    println!("{}", "-".repeat(SEPARATOR_WIDTH));
}

// ---------------------------------------------------------------------------
// Report sections
// ---------------------------------------------------------------------------

/// Render one "most frequent" report family.
pub fn frequency_section(
    title: &str,
    total: usize,
    outcome: &Result<Vec<AggregationResult>, EmptyDataset>,
) {
    let started = begin_section(title);
    match outcome {
        Ok(results) => {
            println!("TOTAL NUMBER OF TRIPS: {total}");
            for result in results {
                println!(
                    "{}: {} ({} trips, {:.1}%)",
                    result.label,
                    result.key,
                    result.count,
                    result.share * 100.0
                );
            }
        }
        Err(_) => println!("No data for this filter combination."),
    }
    finish_section(started);
}

/// Render the total/mean travel time report.
pub fn duration_section(outcome: &Result<DurationSummary, EmptyDataset>) {
    let started = begin_section("Calculating Trip Duration...");
    match outcome {
        Ok(summary) => {
            println!(
                "TOTAL TRAVEL TIME: {} days {} hours",
                summary.total_days, summary.remainder_hours
            );
            println!(
                "MEAN TRAVEL TIME: {} minutes {} seconds",
                summary.mean_minutes, summary.mean_remainder_seconds
            );
        }
        Err(_) => println!("No data for this filter combination."),
    }
    finish_section(started);
}

/// Render the user-type/gender/birth-year report.
pub fn demographic_section(summary: &DemographicSummary) {
    let started = begin_section("Calculating User Stats...");

    println!("USER TYPE DISTRIBUTION:");
    print_distribution(&summary.user_types);

    println!("GENDER DISTRIBUTION:");
    match &summary.genders {
        Some(table) => print_distribution(table),
        None => println!("No gender data is available for the city chosen.\n"),
    }

    println!("BIRTH YEAR DETAILS:");
    match &summary.birth_years {
        Some(years) => {
            println!("Earliest       {}", years.earliest);
            println!("Most Recent    {}", years.most_recent);
            println!("Most Common    {}", years.most_common);
        }
        None => println!("No birth year data is available for the city chosen."),
    }

    finish_section(started);
}

fn print_distribution(table: &DistributionTable) {
    for row in &table.rows {
        println!(
            "{:<12} {:>8} trips  {:>5.1}%",
            row.category, row.count, row.percent
        );
    }
    println!();
}

fn begin_section(title: &str) -> Instant {
    println!("\n{title}\n");
    Instant::now()
}

fn finish_section(started: Instant) {
    println!(
        "\nThis took {:.3} seconds.\n",
        started.elapsed().as_secs_f64()
    );
    separator();
}

// ---------------------------------------------------------------------------
// Raw data pagination
// ---------------------------------------------------------------------------

/// Page through raw trips, five at a time, on request. Stops when the
/// dataset is exhausted.
pub fn raw_trips(dataset: &Dataset) -> io::Result<()> {
    println!("\nDisplaying raw data details...");

    let mut start = 0;
    loop {
        let question = if start == 0 {
            "\nWould you like to see raw data for 5 trips? Enter yes or no."
        } else {
            "\nWould you like to see 5 more trips? Enter yes or no."
        };
        if !prompts::yes(question)? {
            break;
        }

        for (i, trip) in dataset.trips.iter().enumerate().skip(start).take(PAGE_SIZE) {
            print_trip(i, trip, dataset);
        }

        start += PAGE_SIZE;
        if start >= dataset.len() {
            println!("\nNo more trips to display.");
            break;
        }
    }

    println!();
    separator();
    Ok(())
}

fn print_trip(index: usize, trip: &Trip, dataset: &Dataset) {
    println!("\nTRIP {}:\n--------", index + 1);
    println!("Start Time     {}", trip.start_time);
    println!("Trip Duration  {}", trip.duration_seconds);
    println!("Start Station  {}", trip.start_station);
    println!("End Station    {}", trip.end_station);
    println!("User Type      {}", trip.user_type);
    if dataset.capabilities.gender {
        println!("Gender         {}", trip.gender.as_deref().unwrap_or("-"));
    }
    if dataset.capabilities.birth_year {
        match trip.birth_year {
            Some(year) => println!("Birth Year     {year}"),
            None => println!("Birth Year     -"),
        }
    }
}
