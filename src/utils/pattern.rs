//! Fixed-width format patterns
//!
//! A [`FormatPattern`] pairs the layout text callers know (`yyyy-MM-dd`) with the
//! chrono strftime string that formats and parses it. Parsing is strict: the input
//! must have exactly the layout's width, digits wherever the layout has a field
//! letter and the same separators everywhere else. Only then is it handed to chrono
//! for calendar validation.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::constants::{DAY_COMPACT, DAY_DASHED, TIME_COMPACT, TIME_DASHED};
use crate::error::{DateError, Result};

/// An immutable date or date-time template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatPattern {
    layout: &'static str,
    strftime: &'static str,
}

impl FormatPattern {
    pub const fn new(layout: &'static str, strftime: &'static str) -> Self {
        Self { layout, strftime }
    }

    /// Layout text such as `yyyyMMdd`
    pub fn layout(&self) -> &'static str {
        self.layout
    }

    /// Equivalent chrono format string such as `%Y%m%d`
    pub fn strftime(&self) -> &'static str {
        self.strftime
    }

    /// Check the shape of `input` against the layout without validating the calendar
    pub fn check_layout(&self, input: &str) -> Result<()> {
        let matches = input.chars().count() == self.layout.chars().count()
            && input.chars().zip(self.layout.chars()).all(|(got, expected)| {
                if expected.is_ascii_alphabetic() {
                    got.is_ascii_digit()
                } else {
                    got == expected
                }
            });

        if matches {
            Ok(())
        } else {
            Err(DateError::Layout {
                input: input.to_string(),
                pattern: self.layout,
            })
        }
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(self.strftime).to_string()
    }

    pub fn format_datetime(&self, moment: NaiveDateTime) -> String {
        moment.format(self.strftime).to_string()
    }

    /// Parse a calendar date laid out with this pattern
    pub fn parse_date(&self, input: &str) -> Result<NaiveDate> {
        self.check_layout(input)?;
        let date =
            NaiveDate::parse_from_str(input, self.strftime).map_err(|e| self.calendar_error(input, e.to_string()))?;
        self.check_year(input, date.year())?;
        Ok(date)
    }

    /// Parse a date-time laid out with this pattern
    pub fn parse_datetime(&self, input: &str) -> Result<NaiveDateTime> {
        self.check_layout(input)?;
        let moment =
            NaiveDateTime::parse_from_str(input, self.strftime).map_err(|e| self.calendar_error(input, e.to_string()))?;

        // chrono accepts `60` seconds as a leap second
        if moment.nanosecond() >= 1_000_000_000 {
            return Err(self.calendar_error(input, "second out of range".to_string()));
        }
        self.check_year(input, moment.year())?;

        Ok(moment)
    }

    /// `yyyy` counts years of the current era, so year 0 and earlier are rejected
    fn check_year(&self, input: &str, year: i32) -> Result<()> {
        if year < 1 {
            return Err(self.calendar_error(input, "year out of range".to_string()));
        }
        Ok(())
    }

    fn calendar_error(&self, input: &str, reason: String) -> DateError {
        DateError::Calendar {
            input: input.to_string(),
            pattern: self.layout,
            reason,
        }
    }
}

/// Encode a date as the integer spelled by `yyyyMMdd`
pub fn day_as_integer(date: NaiveDate) -> i32 {
    date.year() * 10_000 + date.month() as i32 * 100 + date.day() as i32
}

/// Encode a date-time as the integer spelled by `yyyyMMddHHmmss`
pub fn time_as_integer(moment: NaiveDateTime) -> i64 {
    i64::from(day_as_integer(moment.date())) * 1_000_000
        + i64::from(moment.hour()) * 10_000
        + i64::from(moment.minute()) * 100
        + i64::from(moment.second())
}

pub fn parse_day_integer(value: i32) -> Result<NaiveDate> {
    DAY_COMPACT.parse_date(&value.to_string())
}

pub fn parse_day_text(value: &str) -> Result<NaiveDate> {
    DAY_DASHED.parse_date(value)
}

pub fn parse_time_integer(value: i64) -> Result<NaiveDateTime> {
    TIME_COMPACT.parse_datetime(&value.to_string())
}

pub fn parse_time_text(value: &str) -> Result<NaiveDateTime> {
    TIME_DASHED.parse_datetime(value)
}
