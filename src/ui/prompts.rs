use std::io::{self, BufRead, Write};

use bikeshare_explorer::data::filter::{DayFilter, MonthFilter, ALL, DAY_CODES, MONTH_CODES};
use bikeshare_explorer::data::loader::Loader;

// ---------------------------------------------------------------------------
// Validated filter selections
// ---------------------------------------------------------------------------

/// City, month, and day chosen for one analysis cycle. The raw codes are
/// kept so the summary can echo exactly what the user picked.
pub struct Selection {
    pub city: String,
    pub month: MonthFilter,
    pub month_code: String,
    pub day: DayFilter,
    pub day_code: String,
}

/// Collect a full set of filter selections, re-prompting until each input
/// is valid, then echo the chosen filters back.
pub fn collect(loader: &Loader) -> io::Result<Selection> {
    println!("\n{}\n", "-".repeat(60));
    println!("Hello! Let's explore some US bikeshare data!\n");

    let cities: Vec<&str> = loader.cities().collect();
    let city = loop {
        let input = ask(&format!(
            "Enter city, valid values are:\n {}",
            cities.join(", ")
        ))?;
        if cities.contains(&input.as_str()) {
            break input;
        }
        println!("WARNING: `{input}` is not a valid city, please try again.\n");
    };

    let (month, month_code) = loop {
        let input = ask(&format!(
            "\nEnter month, valid values are:\n {}, {ALL}",
            MONTH_CODES.join(", ")
        ))?;
        match MonthFilter::parse(&input) {
            Some(month) => break (month, input),
            None => println!("WARNING: `{input}` is not a valid month, please try again.\n"),
        }
    };

    let (day, day_code) = loop {
        let input = ask(&format!(
            "\nEnter day, valid values are:\n {}, {ALL}",
            DAY_CODES.join(", ")
        ))?;
        match DayFilter::parse(&input) {
            Some(day) => break (day, input),
            None => println!("WARNING: `{input}` is not a valid day, please try again.\n"),
        }
    };

    println!("\nYou have chosen to apply the following filters to the data:");
    println!("City = {city}");
    println!("Month = {month_code}");
    println!("Weekday = {day_code}\n");
    println!("{}", "-".repeat(60));

    Ok(Selection {
        city,
        month,
        month_code,
        day,
        day_code,
    })
}

/// Ask a yes/no question; anything other than `yes` counts as no.
pub fn yes(question: &str) -> io::Result<bool> {
    Ok(ask(question)? == "yes")
}

/// Print a prompt and read one trimmed, lower-cased line from stdin.
fn ask(question: &str) -> io::Result<String> {
    println!("{question}");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_lowercase())
}
