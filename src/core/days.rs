//! Session day calculator: which dates in a session range are actual
//! working days.

use crate::models::session::{DateRange, HolidaySet, RecessWindow};
use chrono::{Datelike, NaiveDate, Weekday};

/// True for Monday through Friday.
pub fn is_weekday(day: NaiveDate) -> bool {
    !matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

fn in_recess(day: NaiveDate, recess: &[RecessWindow]) -> bool {
    recess.iter().any(|w| w.contains(day))
}

/// Compute the ordered, duplicate-free list of working session days in
/// `range`: every date that is a weekday, not a holiday, and inside no
/// recess window.
///
/// Callers handle the "no session this year" case themselves; this is only
/// ever invoked with a concrete range.
pub fn compute_session_days(
    range: &DateRange,
    holidays: &HolidaySet,
    recess: &[RecessWindow],
) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut day = range.start;

    loop {
        if is_weekday(day) && !holidays.contains(day) && !in_recess(day, recess) {
            days.push(day);
        }

        if day == range.end {
            break;
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    days
}
