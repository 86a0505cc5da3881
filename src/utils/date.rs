use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` date literal from the static data tables.
/// A malformed literal is a fatal configuration error, raised before
/// any session computation starts.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
