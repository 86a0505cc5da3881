use chrono::{NaiveDate, TimeZone, Utc};
use legcal::core::calendar::{PRODID, build_calendar, render_calendar, write_calendar};
use legcal::models::session::{
    DateRange, HolidaySet, RecessWindow, SessionDefinition, SessionTable,
};
use std::env;
use std::fs;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn session(
    id: &str,
    name: &str,
    dates: Option<(NaiveDate, NaiveDate)>,
    recess: Vec<RecessWindow>,
) -> SessionDefinition {
    SessionDefinition {
        id: id.to_string(),
        name: name.to_string(),
        description: "2026 Regular Session".to_string(),
        dates: dates.map(|(s, e)| DateRange::new(s, e).unwrap()),
        recess,
    }
}

fn test_table() -> SessionTable {
    SessionTable::from_sessions(vec![
        session(
            "Alaska",
            "Alaska Legislature",
            Some((d(2026, 1, 5), d(2026, 1, 9))),
            vec![],
        ),
        session("Montana", "Montana Legislature", None, vec![]),
    ])
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
}

fn event_count(ics: &str) -> usize {
    ics.matches("BEGIN:VEVENT").count()
}

#[test]
fn test_single_session_end_to_end() {
    // Mon Jan 5 .. Fri Jan 9 2026, nothing excluded: 5 days, one block,
    // one event with a 5-day title and exclusive end Jan 10.
    let (cal, summary) = build_calendar(
        &["Alaska"],
        None,
        &test_table(),
        &HolidaySet::default(),
        "America/New_York",
        now(),
    );

    assert_eq!(summary.total_days, 5);
    assert_eq!(summary.total_blocks, 1);
    assert!(summary.skipped.is_empty());

    let ics = render_calendar(&cal);
    assert_eq!(event_count(&ics), 1);
    assert!(ics.contains("SUMMARY:AK - In Session (5 days)"));
    assert!(ics.contains("DTEND;VALUE=DATE:20260110"));
    assert!(ics.contains("TRANSP:TRANSPARENT"));
}

#[test]
fn test_document_header_fields() {
    let (cal, _) = build_calendar(
        &["Alaska"],
        Some("AK - 2026 Legislative Session"),
        &test_table(),
        &HolidaySet::default(),
        "America/New_York",
        now(),
    );

    let ics = render_calendar(&cal);
    assert!(ics.contains("BEGIN:VCALENDAR"));
    assert!(ics.contains("METHOD:PUBLISH"));
    assert!(ics.contains("X-WR-CALNAME:AK - 2026 Legislative Session"));
    assert!(ics.contains("X-WR-TIMEZONE:America/New_York"));

    // RFC 5545: exactly one VERSION and PRODID, at most one CALSCALE
    assert_eq!(ics.matches("VERSION:2.0").count(), 1);
    assert_eq!(ics.matches("PRODID:").count(), 1);
    assert_eq!(ics.matches("CALSCALE:").count(), 1);
    assert!(ics.contains("CALSCALE:GREGORIAN"));
}

#[test]
fn test_header_carries_only_our_product_identifier() {
    let (cal, _) = build_calendar(
        &["Alaska"],
        None,
        &test_table(),
        &HolidaySet::default(),
        "America/New_York",
        now(),
    );

    let ics = render_calendar(&cal);
    assert!(ics.contains(&format!("PRODID:{PRODID}")));
    assert!(!ics.contains("ICALENDAR-RS"));
    assert_eq!(ics.matches("PRODID:").count(), 1);
}

#[test]
fn test_title_derived_for_single_session_request() {
    let (cal, _) = build_calendar(
        &["Alaska"],
        None,
        &test_table(),
        &HolidaySet::default(),
        "America/New_York",
        now(),
    );
    assert!(
        render_calendar(&cal)
            .contains("X-WR-CALNAME:AK - 2026 Legislative Session")
    );

    let (cal, _) = build_calendar(
        &["Alaska", "Montana"],
        None,
        &test_table(),
        &HolidaySet::default(),
        "America/New_York",
        now(),
    );
    assert!(
        render_calendar(&cal)
            .contains("X-WR-CALNAME:Legislative Sessions Calendar 2026")
    );
}

#[test]
fn test_unscheduled_session_contributes_nothing() {
    let (cal, summary) = build_calendar(
        &["Montana"],
        None,
        &test_table(),
        &HolidaySet::default(),
        "America/New_York",
        now(),
    );

    assert_eq!(summary.total_days, 0);
    assert_eq!(summary.total_blocks, 0);
    assert!(summary.skipped.is_empty());
    assert_eq!(event_count(&render_calendar(&cal)), 0);
}

#[test]
fn test_unknown_session_skipped_with_warning_not_error() {
    let (cal, summary) = build_calendar(
        &["Atlantis", "Alaska"],
        None,
        &test_table(),
        &HolidaySet::default(),
        "America/New_York",
        now(),
    );

    // The unknown id is recorded, the valid one still produces events
    assert_eq!(summary.skipped, vec!["Atlantis".to_string()]);
    assert_eq!(summary.sessions.len(), 1);
    assert_eq!(event_count(&render_calendar(&cal)), 1);
}

#[test]
fn test_holiday_shortened_block_drops_day_count() {
    // Jan 1 2026 is a holiday, so Jan 1..2 leaves a single-day block
    let table = SessionTable::from_sessions(vec![session(
        "Alaska",
        "Alaska Legislature",
        Some((d(2026, 1, 1), d(2026, 1, 2))),
        vec![],
    )]);
    let holidays: HolidaySet = [d(2026, 1, 1)].into_iter().collect();

    let (cal, summary) = build_calendar(
        &["Alaska"],
        None,
        &table,
        &holidays,
        "America/New_York",
        now(),
    );

    assert_eq!(summary.total_days, 1);
    assert_eq!(summary.total_blocks, 1);
    let ics = render_calendar(&cal);
    assert!(ics.contains("SUMMARY:AK - In Session\r\n") || ics.contains("SUMMARY:AK - In Session\n"));
    assert!(!ics.contains("days)"));
}

#[test]
fn test_recess_split_produces_multiple_blocks_and_uids() {
    // Recess removes the middle week, leaving two blocks with sequential uids
    let table = SessionTable::from_sessions(vec![session(
        "Alaska",
        "Alaska Legislature",
        Some((d(2026, 1, 5), d(2026, 1, 23))),
        vec![RecessWindow::new(d(2026, 1, 12), d(2026, 1, 16)).unwrap()],
    )]);

    let (cal, summary) = build_calendar(
        &["Alaska"],
        None,
        &table,
        &HolidaySet::default(),
        "America/New_York",
        now(),
    );

    assert_eq!(summary.total_blocks, 2);
    let ics = render_calendar(&cal);
    assert!(ics.contains("UID:Alaska-2026-block-0@legislative-calendar.beekeepergroup.com"));
    assert!(ics.contains("UID:Alaska-2026-block-1@legislative-calendar.beekeepergroup.com"));
}

#[test]
fn test_write_calendar_creates_directory_and_file() {
    let mut dir = env::temp_dir();
    dir.push("write_calendar_legcal_out");
    fs::remove_dir_all(&dir).ok();

    let (cal, _) = build_calendar(
        &["Alaska"],
        None,
        &test_table(),
        &HolidaySet::default(),
        "America/New_York",
        now(),
    );

    let path = dir.join("alaska_legislative_calendar_2026.ics");
    write_calendar(&cal, &path).expect("write calendar");

    let content = fs::read_to_string(&path).expect("read written calendar");
    assert!(content.starts_with("BEGIN:VCALENDAR"));
    assert!(content.contains("END:VCALENDAR"));
    assert!(content.contains(&format!("PRODID:{PRODID}")));
    assert_eq!(content.matches("PRODID:").count(), 1);
}
