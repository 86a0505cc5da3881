//! Event formatter: one all-day iCalendar event per session block.

use crate::data::jurisdictions::short_code;
use crate::models::block::SessionBlock;
use chrono::{DateTime, Utc};
use icalendar::{Component, Event, EventLike, Property};

/// Summary line for a block: postal code plus day count, the count omitted
/// for single-day blocks.
pub fn block_summary(display_name: &str, block: &SessionBlock) -> String {
    let code = short_code(display_name);
    let num_days = block.day_count();

    if num_days == 1 {
        format!("{code} - In Session")
    } else {
        format!("{code} - In Session ({num_days} days)")
    }
}

/// Deterministic event identifier: stable across runs for the same
/// (session, year, block index), unique within one document.
pub fn block_uid(session_id: &str, year: i32, block_num: usize) -> String {
    format!("{session_id}-{year}-block-{block_num}@legislative-calendar.beekeepergroup.com")
}

/// Build the all-day event for one session block.
///
/// DTEND follows the iCalendar exclusive-end convention (one past the last
/// day). `now` only feeds DTSTAMP and is never part of the event identity.
/// The event is marked TRANSPARENT so it does not register as busy time.
pub fn block_event(
    session_id: &str,
    display_name: &str,
    block: &SessionBlock,
    block_num: usize,
    year: i32,
    now: DateTime<Utc>,
) -> Event {
    Event::new()
        .summary(&block_summary(display_name, block))
        .starts(block.start)
        .ends(block.end_exclusive())
        .description("Legislature in session")
        .uid(&block_uid(session_id, year, block_num))
        .timestamp(now)
        .append_property(Property::new("TRANSP", "TRANSPARENT"))
        .done()
}
