use anyhow::Result;

use bikeshare_explorer::data::filter;
use bikeshare_explorer::data::loader::Loader;
use bikeshare_explorer::stats::{demographics, duration, frequency};

use crate::ui::prompts::{self, Selection};
use crate::ui::report;

/// Run analysis cycles until the user declines to restart.
pub fn run(loader: &Loader) -> Result<()> {
    loop {
        let selection = prompts::collect(loader)?;

        if let Err(err) = run_cycle(loader, &selection) {
            log::error!("Analysis cycle for `{}` failed: {err:#}", selection.city);
            println!("\nWARNING: could not analyze {}: {err:#}", selection.city);
        }

        if !prompts::yes("\nWould you like to restart? Enter yes or no.")? {
            println!();
            report::separator();
            break;
        }
    }
    Ok(())
}

/// One analysis cycle: load the city fresh, apply the filters, compute and
/// render each report family, then page through raw rows on request.
///
/// `EmptyDataset` outcomes are rendered per report; only loader and console
/// failures surface as errors.
fn run_cycle(loader: &Loader, selection: &Selection) -> Result<()> {
    let dataset = loader.load(&selection.city)?;
    let dataset = filter::by_month(&dataset, selection.month);
    let dataset = filter::by_day(&dataset, selection.day);
    log::info!(
        "{} trips after filtering (month = {}, day = {})",
        dataset.len(),
        selection.month_code,
        selection.day_code
    );

    report::frequency_section(
        "Calculating The Most Frequent Times of Travel...",
        dataset.len(),
        &frequency::compute(&dataset, &frequency::travel_time_specs()),
    );
    report::frequency_section(
        "Calculating The Most Popular Stations and Trip...",
        dataset.len(),
        &frequency::compute(&dataset, &frequency::station_specs()),
    );
    report::duration_section(&duration::compute(&dataset));
    report::demographic_section(&demographics::compute(&dataset));

    report::raw_trips(&dataset)?;
    Ok(())
}
