pub mod holidays;
pub mod jurisdictions;
pub mod sessions;

/// The calendar year the static tables describe.
pub const CALENDAR_YEAR: i32 = 2026;
