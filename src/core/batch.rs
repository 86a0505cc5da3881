//! Batch driver: the fixed plan of which session groupings land in which
//! output file. Pure configuration, executed in order.

use crate::core::calendar::generate_calendar;
use crate::data::CALENDAR_YEAR;
use crate::data::jurisdictions::short_code;
use crate::errors::AppResult;
use crate::models::session::{HolidaySet, SessionTable};
use std::path::Path;

pub const FEDERAL_IDS: &[&str] = &["US_House", "US_Senate"];

pub const NORTHEAST: &[&str] = &[
    "Connecticut",
    "Maine",
    "Massachusetts",
    "New_Hampshire",
    "New_Jersey",
    "New_York",
    "Pennsylvania",
    "Rhode_Island",
    "Vermont",
];

pub const SOUTHEAST: &[&str] = &[
    "Alabama",
    "Arkansas",
    "Florida",
    "Georgia",
    "Kentucky",
    "Louisiana",
    "Mississippi",
    "North_Carolina",
    "South_Carolina",
    "Tennessee",
    "Virginia",
    "West_Virginia",
];

pub const MIDWEST: &[&str] = &[
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Michigan",
    "Minnesota",
    "Missouri",
    "Nebraska",
    "Ohio",
    "South_Dakota",
    "Wisconsin",
];

pub const WEST: &[&str] = &[
    "Alaska",
    "Arizona",
    "California",
    "Colorado",
    "Hawaii",
    "Idaho",
    "New_Mexico",
    "Oklahoma",
    "Oregon",
    "Utah",
    "Washington",
    "Wyoming",
];

/// One planned output: a set of session ids, a file name, and a title.
#[derive(Debug, Clone)]
pub struct Grouping {
    pub ids: Vec<String>,
    pub file_name: String,
    pub title: String,
}

impl Grouping {
    fn new(ids: Vec<String>, file_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            ids,
            file_name: file_name.into(),
            title: title.into(),
        }
    }
}

fn owned(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

/// The full execution plan: federal chambers combined, one calendar per
/// scheduled jurisdiction (alphabetical), everything combined, then the
/// four regional subsets.
pub fn groupings(table: &SessionTable) -> Vec<Grouping> {
    let states = table.scheduled_state_ids();

    let mut plan = vec![Grouping::new(
        owned(FEDERAL_IDS),
        format!("federal_legislative_calendar_{CALENDAR_YEAR}.ics"),
        format!("Federal - {CALENDAR_YEAR} Legislative Session"),
    )];

    for id in &states {
        let code = table
            .get(id)
            .map(|s| short_code(&s.name))
            .unwrap_or(id.as_str());
        plan.push(Grouping::new(
            vec![id.clone()],
            format!(
                "{}_legislative_calendar_{CALENDAR_YEAR}.ics",
                id.to_lowercase()
            ),
            format!("{code} - {CALENDAR_YEAR} Legislative Session"),
        ));
    }

    let mut all = owned(FEDERAL_IDS);
    all.extend(states);
    plan.push(Grouping::new(
        all,
        format!("all_legislative_sessions_{CALENDAR_YEAR}.ics"),
        format!("All Legislative Sessions - {CALENDAR_YEAR}"),
    ));

    for (region, ids) in [
        ("northeast", NORTHEAST),
        ("southeast", SOUTHEAST),
        ("midwest", MIDWEST),
        ("west", WEST),
    ] {
        plan.push(Grouping::new(
            owned(ids),
            format!("{region}_states_{CALENDAR_YEAR}.ics"),
            format!(
                "{} States - {CALENDAR_YEAR} Legislative Sessions",
                capitalize(region)
            ),
        ));
    }

    plan
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Run every grouping to completion, one file per grouping.
///
/// Fully synchronous; each document is written before the next grouping
/// starts. A failed write aborts the batch: the error propagates and the
/// remaining groupings are not attempted.
pub fn run(
    table: &SessionTable,
    holidays: &HolidaySet,
    timezone: &str,
    out_dir: &Path,
) -> AppResult<()> {
    for grouping in groupings(table) {
        let ids: Vec<&str> = grouping.ids.iter().map(String::as_str).collect();
        generate_calendar(
            &ids,
            Some(&grouping.title),
            table,
            holidays,
            timezone,
            &out_dir.join(&grouping.file_name),
        )?;
    }
    Ok(())
}
