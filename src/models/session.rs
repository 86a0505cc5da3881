use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Inclusive calendar date range. Invariant: `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if start > end {
            return Err(AppError::InvalidRange(format!(
                "start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }
}

/// Inclusive recess window. Days inside it are never session days.
/// It is not required to lie within the owning session's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecessWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl RecessWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if start > end {
            return Err(AppError::InvalidRange(format!(
                "recess start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

/// One legislature's metadata for the calendar year.
/// `dates: None` means "no session this year": the entry contributes zero
/// days and zero blocks downstream, and that is not an error.
#[derive(Debug, Clone)]
pub struct SessionDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub dates: Option<DateRange>,
    pub recess: Vec<RecessWindow>,
}

impl SessionDefinition {
    pub fn is_scheduled(&self) -> bool {
        self.dates.is_some()
    }
}

/// Fixed set of holiday dates, shared read-only across all sessions.
#[derive(Debug, Clone, Default)]
pub struct HolidaySet(BTreeSet<NaiveDate>);

impl HolidaySet {
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.0.contains(&day)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Ordered collection of session definitions with id lookup.
/// Built once from the static data tables and passed by reference, so the
/// core stays testable against hand-built tables.
#[derive(Debug, Clone, Default)]
pub struct SessionTable {
    sessions: Vec<SessionDefinition>,
}

impl SessionTable {
    pub fn from_sessions(sessions: Vec<SessionDefinition>) -> Self {
        Self { sessions }
    }

    pub fn get(&self, id: &str) -> Option<&SessionDefinition> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SessionDefinition> {
        self.sessions.iter()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Ids of non-federal jurisdictions with a defined session this year,
    /// alphabetical. This is the order individual calendars are produced in.
    pub fn scheduled_state_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .sessions
            .iter()
            .filter(|s| !s.id.starts_with("US_") && s.is_scheduled())
            .map(|s| s.id.clone())
            .collect();
        ids.sort();
        ids
    }
}
