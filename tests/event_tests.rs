use chrono::{NaiveDate, TimeZone, Utc};
use icalendar::Component;
use legcal::core::events::{block_event, block_summary, block_uid};
use legcal::data::jurisdictions::short_code;
use legcal::models::block::SessionBlock;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn block(start: NaiveDate, end: NaiveDate) -> SessionBlock {
    SessionBlock { start, end }
}

#[test]
fn test_one_day_block_title_has_no_day_count() {
    let b = block(d(2026, 1, 5), d(2026, 1, 5));
    assert_eq!(block_summary("Alaska Legislature", &b), "AK - In Session");
}

#[test]
fn test_multi_day_block_title_has_inclusive_day_count() {
    let b = block(d(2026, 1, 5), d(2026, 1, 9));
    assert_eq!(
        block_summary("Alaska Legislature", &b),
        "AK - In Session (5 days)"
    );
}

#[test]
fn test_unmatched_display_name_used_verbatim() {
    let b = block(d(2026, 1, 5), d(2026, 1, 5));
    assert_eq!(block_summary("U.S. Senate", &b), "U.S. Senate - In Session");
}

#[test]
fn test_first_match_in_table_order_wins() {
    // Known quirk preserved from the source data: "Virginia" precedes
    // "West Virginia" in the table, so the substring match picks VA.
    assert_eq!(short_code("West Virginia Legislature"), "VA");
    assert_eq!(short_code("Virginia General Assembly"), "VA");
    assert_eq!(short_code("West Virginia"), "VA");
}

#[test]
fn test_uid_is_deterministic_and_namespaced() {
    let uid = block_uid("Alaska", 2026, 3);
    assert_eq!(
        uid,
        "Alaska-2026-block-3@legislative-calendar.beekeepergroup.com"
    );
    assert_eq!(uid, block_uid("Alaska", 2026, 3));
    assert_ne!(uid, block_uid("Alaska", 2026, 4));
    assert_ne!(uid, block_uid("Hawaii", 2026, 3));
}

#[test]
fn test_event_has_exclusive_end_and_transparency() {
    let now = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
    let b = block(d(2026, 1, 5), d(2026, 1, 9));

    let event = block_event("Alaska", "Alaska Legislature", &b, 0, 2026, now);

    assert_eq!(
        event.property_value("SUMMARY"),
        Some("AK - In Session (5 days)")
    );
    assert_eq!(event.property_value("DTSTART"), Some("20260105"));
    // DTEND is one past the block's last day
    assert_eq!(event.property_value("DTEND"), Some("20260110"));
    assert_eq!(event.property_value("TRANSP"), Some("TRANSPARENT"));
    assert_eq!(
        event.property_value("DESCRIPTION"),
        Some("Legislature in session")
    );
    assert_eq!(
        event.property_value("UID"),
        Some("Alaska-2026-block-0@legislative-calendar.beekeepergroup.com")
    );
}

#[test]
fn test_event_identity_ignores_timestamp() {
    let b = block(d(2026, 1, 5), d(2026, 1, 9));
    let first = block_event(
        "Alaska",
        "Alaska Legislature",
        &b,
        0,
        2026,
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    );
    let second = block_event(
        "Alaska",
        "Alaska Legislature",
        &b,
        0,
        2026,
        Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap(),
    );

    assert_eq!(first.property_value("UID"), second.property_value("UID"));
    assert_eq!(
        first.property_value("SUMMARY"),
        second.property_value("SUMMARY")
    );
}
