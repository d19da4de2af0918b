mod app;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use bikeshare_explorer::data::loader::Loader;
use clap::Parser;

#[derive(Parser)]
#[command(name = "bikeshare-explorer")]
#[command(about = "Explore US bike-share trip statistics", long_about = None)]
struct Cli {
    /// Directory containing the per-city CSV extracts
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let loader = Loader::new(cli.data_dir);

    let outcome = app::run(&loader);
    if let Err(err) = &outcome {
        // Unexpected failures end the program with a generic message rather
        // than an internal trace.
        log::error!("Unexpected failure: {err:#}");
        println!("\nWARNING: unknown error, program will close.");
    }
    println!("\nProgram has been ended.\n");

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
