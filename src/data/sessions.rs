//! Static 2026 session table: both federal chambers plus all 50 states.
//! Entries with no dates are legislatures that do not meet in 2026
//! (biennial bodies meeting in odd years only).

use crate::errors::AppResult;
use crate::models::session::{DateRange, RecessWindow, SessionDefinition, SessionTable};
use crate::utils::date::parse_date;

struct RawSession {
    id: &'static str,
    name: &'static str,
    dates: Option<(&'static str, &'static str)>,
    description: &'static str,
    recess: &'static [(&'static str, &'static str)],
}

const SESSIONS_2026: &[RawSession] = &[
    RawSession {
        id: "US_House",
        name: "U.S. House of Representatives",
        dates: Some(("2026-01-06", "2026-12-31")),
        description: "120th Congress, 1st Session",
        recess: &[
            ("2026-02-14", "2026-02-22"), // Presidents' Day Recess
            ("2026-03-28", "2026-04-12"), // Spring Recess
            ("2026-05-23", "2026-05-31"), // Memorial Day Recess
            ("2026-07-04", "2026-09-07"), // Summer District Work Period
            ("2026-11-21", "2026-11-29"), // Thanksgiving Recess
            ("2026-12-19", "2026-12-31"), // Year-end Recess
        ],
    },
    RawSession {
        id: "US_Senate",
        name: "U.S. Senate",
        dates: Some(("2026-01-06", "2026-12-31")),
        description: "120th Congress, 1st Session",
        recess: &[
            ("2026-02-14", "2026-02-22"), // Presidents' Day Recess
            ("2026-03-28", "2026-04-12"), // Spring Recess
            ("2026-05-23", "2026-05-31"), // Memorial Day Recess
            ("2026-07-04", "2026-09-07"), // Summer Recess
            ("2026-11-21", "2026-11-29"), // Thanksgiving Recess
            ("2026-12-19", "2026-12-31"), // Year-end Recess
        ],
    },
    RawSession {
        id: "Alabama",
        name: "Alabama Legislature",
        dates: Some(("2026-01-13", "2026-03-27")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Alaska",
        name: "Alaska Legislature",
        dates: Some(("2026-01-20", "2026-05-20")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Arizona",
        name: "Arizona Legislature",
        dates: Some(("2026-01-12", "2026-04-25")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Arkansas",
        name: "Arkansas Legislature",
        dates: Some(("2026-04-08", "2026-05-07")),
        description: "2026 Fiscal Session (30 days)",
        recess: &[],
    },
    RawSession {
        id: "California",
        name: "California State Legislature",
        dates: Some(("2026-01-05", "2026-08-31")),
        description: "2025-2026 Regular Session",
        recess: &[
            ("2026-02-16", "2026-02-22"), // Presidents' Day Recess
            ("2026-04-06", "2026-04-12"), // Spring Recess
            ("2026-07-04", "2026-07-12"), // July 4th Recess
        ],
    },
    RawSession {
        id: "Colorado",
        name: "Colorado General Assembly",
        dates: Some(("2026-01-14", "2026-05-13")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Connecticut",
        name: "Connecticut General Assembly",
        dates: Some(("2026-02-04", "2026-05-06")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Delaware",
        name: "Delaware General Assembly",
        dates: Some(("2026-01-13", "2026-06-30")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Florida",
        name: "Florida Legislature",
        dates: Some(("2026-01-13", "2026-03-13")),
        description: "2026 Regular Session (60 days)",
        recess: &[],
    },
    RawSession {
        id: "Georgia",
        name: "Georgia General Assembly",
        dates: Some(("2026-01-12", "2026-04-06")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Hawaii",
        name: "Hawaii State Legislature",
        dates: Some(("2026-01-21", "2026-05-07")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Idaho",
        name: "Idaho Legislature",
        dates: Some(("2026-01-12", "2026-04-10")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Illinois",
        name: "Illinois General Assembly",
        dates: Some(("2026-01-14", "2026-05-31")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Indiana",
        name: "Indiana General Assembly",
        dates: Some(("2026-01-05", "2026-03-14")),
        description: "2026 Regular Session (30 days)",
        recess: &[],
    },
    RawSession {
        id: "Iowa",
        name: "Iowa General Assembly",
        dates: Some(("2026-01-12", "2026-04-21")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Kansas",
        name: "Kansas Legislature",
        dates: Some(("2026-01-12", "2026-04-10")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Kentucky",
        name: "Kentucky General Assembly",
        dates: Some(("2026-01-06", "2026-04-15")),
        description: "2026 Regular Session (60 days)",
        recess: &[],
    },
    RawSession {
        id: "Louisiana",
        name: "Louisiana Legislature",
        dates: Some(("2026-03-09", "2026-06-01")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Maine",
        name: "Maine Legislature",
        dates: Some(("2026-01-07", "2026-04-15")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Maryland",
        name: "Maryland General Assembly",
        dates: Some(("2026-01-14", "2026-04-13")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Massachusetts",
        name: "Massachusetts General Court",
        dates: Some(("2026-01-07", "2026-07-31")),
        description: "2025-2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Michigan",
        name: "Michigan Legislature",
        dates: Some(("2026-01-14", "2026-12-31")),
        description: "2026 Regular Session",
        recess: &[
            ("2026-07-04", "2026-09-08"), // Summer Recess
        ],
    },
    RawSession {
        id: "Minnesota",
        name: "Minnesota Legislature",
        dates: Some(("2026-02-17", "2026-05-18")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Mississippi",
        name: "Mississippi Legislature",
        dates: Some(("2026-01-06", "2026-05-05")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Missouri",
        name: "Missouri General Assembly",
        dates: Some(("2026-01-07", "2026-05-15")),
        description: "2026 Regular Session",
        recess: &[
            ("2026-03-16", "2026-03-22"), // Spring Break
        ],
    },
    RawSession {
        id: "Montana",
        name: "Montana Legislature",
        dates: None,
        description: "No regular session in 2026 (meets odd years only)",
        recess: &[],
    },
    RawSession {
        id: "Nebraska",
        name: "Nebraska Legislature (Unicameral)",
        dates: Some(("2026-01-07", "2026-04-17")),
        description: "2026 Regular Session (60 days)",
        recess: &[],
    },
    RawSession {
        id: "Nevada",
        name: "Nevada Legislature",
        dates: None,
        description: "No regular session in 2026 (meets odd years only)",
        recess: &[],
    },
    RawSession {
        id: "New_Hampshire",
        name: "New Hampshire General Court",
        dates: Some(("2026-01-07", "2026-06-30")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "New_Jersey",
        name: "New Jersey Legislature",
        dates: Some(("2026-01-13", "2026-12-31")),
        description: "2026 Regular Session",
        recess: &[
            ("2026-07-04", "2026-09-08"), // Summer Recess
        ],
    },
    RawSession {
        id: "New_Mexico",
        name: "New Mexico Legislature",
        dates: Some(("2026-01-20", "2026-02-19")),
        description: "2026 Regular Session (30 days)",
        recess: &[],
    },
    RawSession {
        id: "New_York",
        name: "New York State Legislature",
        dates: Some(("2026-01-07", "2026-06-10")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "North_Carolina",
        name: "North Carolina General Assembly",
        dates: Some(("2026-04-21", "2026-08-31")),
        description: "2026 Short Session",
        recess: &[],
    },
    RawSession {
        id: "North_Dakota",
        name: "North Dakota Legislative Assembly",
        dates: None,
        description: "No regular session in 2026 (meets odd years only)",
        recess: &[],
    },
    RawSession {
        id: "Ohio",
        name: "Ohio General Assembly",
        dates: Some(("2026-01-05", "2026-12-31")),
        description: "2026 Regular Session",
        recess: &[
            ("2026-07-04", "2026-09-08"), // Summer Recess
        ],
    },
    RawSession {
        id: "Oklahoma",
        name: "Oklahoma Legislature",
        dates: Some(("2026-02-02", "2026-05-29")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Oregon",
        name: "Oregon Legislative Assembly",
        dates: Some(("2026-02-02", "2026-03-09")),
        description: "2026 Short Session (35 days)",
        recess: &[],
    },
    RawSession {
        id: "Pennsylvania",
        name: "Pennsylvania General Assembly",
        dates: Some(("2026-01-06", "2026-11-30")),
        description: "2026 Regular Session",
        recess: &[
            ("2026-07-04", "2026-09-08"), // Summer Recess
        ],
    },
    RawSession {
        id: "Rhode_Island",
        name: "Rhode Island General Assembly",
        dates: Some(("2026-01-06", "2026-06-30")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "South_Carolina",
        name: "South Carolina General Assembly",
        dates: Some(("2026-01-13", "2026-05-07")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "South_Dakota",
        name: "South Dakota Legislature",
        dates: Some(("2026-01-13", "2026-03-30")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Tennessee",
        name: "Tennessee General Assembly",
        dates: Some(("2026-01-13", "2026-04-24")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Texas",
        name: "Texas Legislature",
        dates: None,
        description: "No regular session in 2026 (meets odd years only)",
        recess: &[],
    },
    RawSession {
        id: "Utah",
        name: "Utah Legislature",
        dates: Some(("2026-01-20", "2026-03-06")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Vermont",
        name: "Vermont General Assembly",
        dates: Some(("2026-01-06", "2026-05-08")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Virginia",
        name: "Virginia General Assembly",
        dates: Some(("2026-01-14", "2026-03-14")),
        description: "2026 Regular Session (60 days)",
        recess: &[],
    },
    RawSession {
        id: "Washington",
        name: "Washington Legislature",
        dates: Some(("2026-01-12", "2026-03-12")),
        description: "2026 Short Session (60 days)",
        recess: &[],
    },
    RawSession {
        id: "West_Virginia",
        name: "West Virginia Legislature",
        dates: Some(("2026-01-14", "2026-03-14")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Wisconsin",
        name: "Wisconsin Legislature",
        dates: Some(("2026-01-13", "2026-03-19")),
        description: "2026 Regular Session",
        recess: &[],
    },
    RawSession {
        id: "Wyoming",
        name: "Wyoming Legislature",
        dates: Some(("2026-02-09", "2026-03-06")),
        description: "2026 Budget Session (20 days)",
        recess: &[],
    },
];

impl RawSession {
    fn parse(&self) -> AppResult<SessionDefinition> {
        let dates = match self.dates {
            Some((start, end)) => Some(DateRange::new(parse_date(start)?, parse_date(end)?)?),
            None => None,
        };

        let recess = self
            .recess
            .iter()
            .map(|(start, end)| RecessWindow::new(parse_date(start)?, parse_date(end)?))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(SessionDefinition {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            dates,
            recess,
        })
    }
}

/// Parse the full static table. Any malformed date literal or inverted
/// range surfaces here, before any calendar computation runs.
pub fn sessions_2026() -> AppResult<SessionTable> {
    let sessions = SESSIONS_2026
        .iter()
        .map(RawSession::parse)
        .collect::<AppResult<Vec<_>>>()?;

    Ok(SessionTable::from_sessions(sessions))
}
