//! Block grouper: collapse an ordered day list into maximal runs of
//! calendar-consecutive days.

use crate::models::block::SessionBlock;
use chrono::{Duration, NaiveDate};

/// Partition a chronologically ordered, duplicate-free day list into
/// maximal consecutive blocks. Empty input yields no blocks; a single
/// isolated day yields a 1-day block.
///
/// Weekends are already absent from the input, so a Friday and the
/// following Monday land in separate blocks: the skipped Saturday breaks
/// day-to-day adjacency.
pub fn group_consecutive(days: &[NaiveDate]) -> Vec<SessionBlock> {
    let Some((&first, rest)) = days.split_first() else {
        return Vec::new();
    };

    let mut blocks = Vec::new();
    let mut start = first;
    let mut end = first;

    for &day in rest {
        if day == end + Duration::days(1) {
            end = day;
        } else {
            blocks.push(SessionBlock { start, end });
            start = day;
            end = day;
        }
    }
    blocks.push(SessionBlock { start, end });

    blocks
}
