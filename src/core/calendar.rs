//! Calendar assembler: resolve session ids, run the day/block/event
//! pipeline, and serialize one iCalendar document per output target.

use crate::core::blocks::group_consecutive;
use crate::core::days::compute_session_days;
use crate::core::events::block_event;
use crate::data::CALENDAR_YEAR;
use crate::data::jurisdictions::short_code;
use crate::errors::AppResult;
use crate::models::session::{HolidaySet, SessionTable};
use crate::ui::messages::{success, warning};
use chrono::{DateTime, Utc};
use icalendar::{Calendar, Property};
use std::fs;
use std::path::Path;

/// Per-session reporting numbers (observational only).
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub id: String,
    pub name: String,
    pub blocks: usize,
    pub days: usize,
}

/// What one assembled document contained, for progress reporting and tests.
#[derive(Debug, Clone, Default)]
pub struct CalendarSummary {
    pub sessions: Vec<SessionReport>,
    pub skipped: Vec<String>,
    pub total_blocks: usize,
    pub total_days: usize,
}

/// Document title: caller override wins; a single-session request derives
/// its title from that session's name; anything else gets the generic one.
fn calendar_title(ids: &[&str], title: Option<&str>, table: &SessionTable) -> String {
    if let Some(t) = title {
        return t.to_string();
    }

    if let [only] = ids
        && let Some(session) = table.get(only)
    {
        return format!(
            "{} - {CALENDAR_YEAR} Legislative Session",
            short_code(&session.name)
        );
    }

    format!("Legislative Sessions Calendar {CALENDAR_YEAR}")
}

/// Assemble one calendar document for the given session ids, in order.
///
/// Unknown ids are skipped with a warning and recorded in the summary;
/// they never abort the rest of the document. Sessions with no defined
/// range contribute zero events. Block numbering restarts at 0 for each
/// session, so event UIDs stay unique across the whole document.
pub fn build_calendar(
    ids: &[&str],
    title: Option<&str>,
    table: &SessionTable,
    holidays: &HolidaySet,
    timezone: &str,
    now: DateTime<Utc>,
) -> (Calendar, CalendarSummary) {
    let mut cal = Calendar::new();
    cal.name(&calendar_title(ids, title, table))
        .timezone(timezone)
        .description("Legislative session periods (excludes weekends, holidays, recesses)")
        .append_property(Property::new("METHOD", "PUBLISH"));

    let mut summary = CalendarSummary::default();

    for &id in ids {
        let Some(session) = table.get(id) else {
            warning(format!("Session {id} not found in data"));
            summary.skipped.push(id.to_string());
            continue;
        };

        let days = match &session.dates {
            Some(range) => compute_session_days(range, holidays, &session.recess),
            None => Vec::new(),
        };
        let blocks = group_consecutive(&days);

        for (block_num, block) in blocks.iter().enumerate() {
            cal.push(block_event(
                &session.id,
                &session.name,
                block,
                block_num,
                CALENDAR_YEAR,
                now,
            ));
        }

        println!(
            "  {}: {} blocks, {} session days",
            session.name,
            blocks.len(),
            days.len()
        );

        summary.total_blocks += blocks.len();
        summary.total_days += days.len();
        summary.sessions.push(SessionReport {
            id: session.id.clone(),
            name: session.name.clone(),
            blocks: blocks.len(),
            days: days.len(),
        });
    }

    (cal, summary)
}

/// Product identifier stamped into every generated document.
pub const PRODID: &str = "-//Beekeeper Group//Legislative Calendar 2026//EN";

/// Serialize a document with our product identifier.
///
/// The icalendar serializer always writes its own PRODID line first, so
/// appending a PRODID property would leave two PRODID lines in the output.
/// RFC 5545 allows exactly one; the default line is swapped for ours here.
pub fn render_calendar(cal: &Calendar) -> String {
    cal.to_string()
        .replacen("PRODID:ICALENDAR-RS", &format!("PRODID:{PRODID}"), 1)
}

/// Serialize a document to its output file, creating the parent directory
/// if needed. The only I/O in the whole pipeline.
pub fn write_calendar(cal: &Calendar, path: &Path) -> AppResult<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, render_calendar(cal))?;
    Ok(())
}

/// Build and write one document, reporting per-session and per-document
/// totals along the way.
pub fn generate_calendar(
    ids: &[&str],
    title: Option<&str>,
    table: &SessionTable,
    holidays: &HolidaySet,
    timezone: &str,
    path: &Path,
) -> AppResult<CalendarSummary> {
    let (cal, summary) = build_calendar(ids, title, table, holidays, timezone, Utc::now());
    write_calendar(&cal, path)?;

    success(format!(
        "Generated: {} ({} blocks, {} total days)",
        path.display(),
        summary.total_blocks,
        summary.total_days
    ));

    Ok(summary)
}
