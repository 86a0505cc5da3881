use chrono::{Duration, NaiveDate};

/// A maximal run of calendar-consecutive session days.
/// Created by the grouper, consumed by the event formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionBlock {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SessionBlock {
    /// Inclusive number of days covered by the block.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// One past the last day, for the exclusive-end all-day convention.
    pub fn end_exclusive(&self) -> NaiveDate {
        self.end + Duration::days(1)
    }
}
