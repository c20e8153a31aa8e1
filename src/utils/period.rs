//! Calendar periods between dates
//!
//! A [`CalendarPeriod`] counts whole years, months and days the way a calendar does,
//! so it cannot be converted to a fixed length of time.
//!
//! The `until_*` functions measure from their *second* argument until the first,
//! which is the reverse of the `between_*` functions. Existing callers rely on this.

use std::fmt;

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::MONTHS_PER_YEAR;
use crate::error::Result;
use crate::utils::pattern::{parse_day_integer, parse_day_text};

/// Signed (years, months, days) difference between two dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CalendarPeriod {
    years: i32,
    months: i32,
    days: i32,
}

impl CalendarPeriod {
    pub const fn new(years: i32, months: i32, days: i32) -> Self {
        Self { years, months, days }
    }

    pub const fn zero() -> Self {
        Self::new(0, 0, 0)
    }

    pub fn years(&self) -> i32 {
        self.years
    }

    pub fn months(&self) -> i32 {
        self.months
    }

    pub fn days(&self) -> i32 {
        self.days
    }

    /// Years and months folded into months; days are left out
    pub fn total_months(&self) -> i64 {
        i64::from(self.years) * i64::from(MONTHS_PER_YEAR) + i64::from(self.months)
    }

    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// True if any of the three units is negative
    pub fn is_negative(&self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }

    pub fn negated(&self) -> Self {
        Self::new(-self.years, -self.months, -self.days)
    }

    /// Shift `date` by this period: months first (clamped to month end), then days.
    ///
    /// Returns `None` if the result falls outside chrono's date range.
    pub fn add_to(&self, date: NaiveDate) -> Option<NaiveDate> {
        let total = self.total_months();
        let shifted = if total >= 0 {
            date.checked_add_months(Months::new(u32::try_from(total).ok()?))?
        } else {
            date.checked_sub_months(Months::new(u32::try_from(-total).ok()?))?
        };
        shifted.checked_add_signed(Duration::days(i64::from(self.days)))
    }
}

impl fmt::Display for CalendarPeriod {
    /// ISO-8601 period notation, e.g. `P1Y2M3D`; zero prints as `P0D`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("P0D");
        }
        f.write_str("P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}

/// Period from `start` to `end`, positive when `end` is later
pub fn between(start: NaiveDate, end: NaiveDate) -> CalendarPeriod {
    let mut total_months = proleptic_month(end) - proleptic_month(start);
    let mut days = end.day() as i32 - start.day() as i32;

    if total_months > 0 && days < 0 {
        // Borrow a month: count days from `start + total_months` (clamped) to `end`
        total_months -= 1;
        let anchor = u32::try_from(total_months)
            .ok()
            .and_then(|months| start.checked_add_months(Months::new(months)));
        if let Some(anchor) = anchor {
            days = (end - anchor).num_days() as i32;
        }
    } else if total_months < 0 && days > 0 {
        if let Some(length) = days_in_month(end.year(), end.month()) {
            total_months += 1;
            days -= length;
        }
    }

    // Truncating division keeps years and months on the same sign
    let years = (total_months / i64::from(MONTHS_PER_YEAR)) as i32;
    let months = (total_months % i64::from(MONTHS_PER_YEAR)) as i32;
    CalendarPeriod::new(years, months, days)
}

/// Period from the `yyyyMMdd` date `first` to `second`
pub fn between_days(first: i32, second: i32) -> Result<CalendarPeriod> {
    let start = parse_day_integer(first)?;
    let end = parse_day_integer(second)?;
    Ok(between(start, end))
}

/// Period from the `yyyyMMdd` date `second` until `first`
pub fn until_days(first: i32, second: i32) -> Result<CalendarPeriod> {
    let first = parse_day_integer(first)?;
    let second = parse_day_integer(second)?;
    Ok(between(second, first))
}

/// Period from the `yyyy-MM-dd` date `first` to `second`
pub fn between_dates(first: &str, second: &str) -> Result<CalendarPeriod> {
    let start = parse_day_text(first)?;
    let end = parse_day_text(second)?;
    Ok(between(start, end))
}

/// Period from the `yyyy-MM-dd` date `second` until `first`
pub fn until_dates(first: &str, second: &str) -> Result<CalendarPeriod> {
    let first = parse_day_text(first)?;
    let second = parse_day_text(second)?;
    Ok(between(second, first))
}

fn proleptic_month(date: NaiveDate) -> i64 {
    i64::from(date.year()) * i64::from(MONTHS_PER_YEAR) + i64::from(date.month0())
}

/// Length of a month, or `None` past the end of chrono's range
fn days_in_month(year: i32, month: u32) -> Option<i32> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    let last = first_next - Duration::days(1);
    Some(last.day() as i32)
}
