//! Fiscal month value object - the rep's commission-accounting period.
//!
//! Commission accounting does not follow the calendar month: a fiscal month
//! runs from the 28th at 18:00 UTC to the next month's 28th at 18:00 UTC,
//! and is named for the calendar month the period closes in.

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of month on which the fiscal month rolls over.
pub const ROLLOVER_DAY: u32 = 28;

/// Hour (UTC) at which the fiscal month rolls over.
pub const ROLLOVER_HOUR: u32 = 18;

/// A commission-accounting period, half-open: `[start, end)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(from = "DateTime<Utc>", into = "DateTime<Utc>")]
pub struct FiscalMonth {
    start: DateTime<Utc>,
}

impl FiscalMonth {
    /// Returns the fiscal month containing the given instant.
    pub fn containing(instant: DateTime<Utc>) -> Self {
        let this_rollover = rollover_at(instant.date_naive());
        let start = if instant >= this_rollover {
            this_rollover
        } else {
            // Still inside the period that opened on last month's 28th.
            rollover_at(shift_months(instant.date_naive(), -1))
        };
        Self { start }
    }

    /// Returns the fiscal month containing the current instant.
    pub fn current() -> Self {
        Self::containing(Utc::now())
    }

    /// Returns the inclusive start of the period.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the exclusive end of the period.
    pub fn end(&self) -> DateTime<Utc> {
        rollover_at(shift_months(self.start.date_naive(), 1))
    }

    /// Checks whether an instant falls inside this period.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end()
    }

    /// Returns the following fiscal month.
    pub fn next(&self) -> Self {
        Self { start: self.end() }
    }

    /// Returns the preceding fiscal month.
    pub fn previous(&self) -> Self {
        Self {
            start: rollover_at(shift_months(self.start.date_naive(), -1)),
        }
    }

    /// Display label, named for the calendar month the period closes in.
    pub fn label(&self) -> String {
        self.end().format("%B %Y").to_string()
    }

    /// Fraction of the period elapsed at `now`, clamped to `[0.0, 1.0]`.
    pub fn elapsed_fraction(&self, now: DateTime<Utc>) -> f64 {
        let total = (self.end() - self.start).num_seconds();
        if total <= 0 {
            return 1.0;
        }
        let elapsed = (now - self.start).num_seconds();
        (elapsed as f64 / total as f64).clamp(0.0, 1.0)
    }
}

impl From<DateTime<Utc>> for FiscalMonth {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::containing(instant)
    }
}

impl From<FiscalMonth> for DateTime<Utc> {
    fn from(month: FiscalMonth) -> Self {
        month.start
    }
}

impl fmt::Display for FiscalMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The rollover instant (28th 18:00 UTC) within the given date's month.
fn rollover_at(date: NaiveDate) -> DateTime<Utc> {
    // Every month has a 28th, and 18:00:00 is always a valid time.
    date.with_day(ROLLOVER_DAY)
        .unwrap()
        .and_hms_opt(ROLLOVER_HOUR, 0, 0)
        .unwrap()
        .and_utc()
}

fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    if months >= 0 {
        date.checked_add_months(Months::new(months as u32)).unwrap()
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
            .unwrap()
    }
}
