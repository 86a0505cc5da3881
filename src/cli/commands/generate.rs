use crate::config::Config;
use crate::core::batch;
use crate::data::{CALENDAR_YEAR, holidays, sessions};
use crate::errors::AppResult;
use crate::ui::messages::{header, success};
use std::path::Path;

/// Handle the `generate` command: parse the static tables, then run the
/// whole batch plan into the configured output directory.
pub fn handle(cfg: &Config) -> AppResult<()> {
    // Static tables are validated up front; a bad date literal stops the
    // run before anything is computed or written.
    let table = sessions::sessions_2026()?;
    let holidays = holidays::federal_holidays_2026()?;

    header(format!("Legislative Calendar Generator - {CALENDAR_YEAR}"));
    println!(
        "Sessions: {} | Federal holidays: {} | Output: {}",
        table.len(),
        holidays.len(),
        cfg.output_dir
    );
    println!();

    batch::run(&table, &holidays, &cfg.timezone, Path::new(&cfg.output_dir))?;

    println!();
    success(format!("All {CALENDAR_YEAR} calendars generated successfully!"));
    Ok(())
}
