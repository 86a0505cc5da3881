use crate::errors::AppResult;
use crate::models::session::HolidaySet;
use crate::utils::date::parse_date;

/// US federal holidays for 2026.
const FEDERAL_HOLIDAYS_2026: &[&str] = &[
    "2026-01-01", // New Year's Day
    "2026-01-19", // Martin Luther King Jr. Day
    "2026-02-16", // Presidents' Day
    "2026-05-25", // Memorial Day
    "2026-07-03", // Independence Day (observed Friday)
    "2026-09-07", // Labor Day
    "2026-10-12", // Columbus Day
    "2026-11-11", // Veterans Day
    "2026-11-26", // Thanksgiving
    "2026-11-27", // Day after Thanksgiving
    "2026-12-25", // Christmas
];

/// Build the 2026 federal holiday set.
/// A malformed literal in the table is a fatal configuration error.
pub fn federal_holidays_2026() -> AppResult<HolidaySet> {
    FEDERAL_HOLIDAYS_2026
        .iter()
        .map(|s| parse_date(s))
        .collect()
}
