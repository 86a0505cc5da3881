use clap::{Parser, Subcommand};

/// Command-line interface definition for legcal
/// CLI application to generate legislative session calendars as ICS files
#[derive(Parser)]
#[command(
    name = "legcal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate iCalendar (.ics) files of US legislative sessions as multi-day blocks",
    long_about = None
)]
pub struct Cli {
    /// Override the output directory (useful for tests or custom targets)
    #[arg(global = true, long = "out-dir")]
    pub out_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate every calendar file: federal, per-state, combined, regional.
    /// This is also what runs when no subcommand is given.
    Generate,

    /// Print the static session table (dates, recesses, postal codes)
    Sessions,
}
