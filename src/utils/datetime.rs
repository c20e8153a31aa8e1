//! Date and time utility functions
//!
//! This module provides the "current moment" encodings, the same-day predicate and
//! elapsed-duration arithmetic. Everything that depends on a time zone or on the
//! clock goes through [`DateUtil`], which carries both explicitly. The free
//! functions at the bottom use the host zone and the system clock.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::constants::{DAY_DASHED, TIME_DASHED};
use crate::error::{DateError, Result};
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::pattern::{day_as_integer, time_as_integer};

/// Absolute-time difference between two moments
pub type ElapsedDuration = chrono::Duration;

/// Formatting and arithmetic bound to one time zone and one clock
#[derive(Debug, Clone)]
pub struct DateUtil<Tz: TimeZone = Local, C: Clock = SystemClock> {
    zone: Tz,
    clock: C,
}

impl DateUtil<Local, SystemClock> {
    /// Host time zone and system clock
    pub fn system() -> Self {
        Self::new(Local, SystemClock)
    }
}

impl Default for DateUtil<Local, SystemClock> {
    fn default() -> Self {
        Self::system()
    }
}

impl<Tz: TimeZone, C: Clock> DateUtil<Tz, C> {
    pub fn new(zone: Tz, clock: C) -> Self {
        Self { zone, clock }
    }

    pub fn zone(&self) -> &Tz {
        &self.zone
    }

    /// Current wall-clock date and time in the zone
    pub fn now_local(&self) -> NaiveDateTime {
        self.clock.now().with_timezone(&self.zone).naive_local()
    }

    /// Current calendar date in the zone
    pub fn today(&self) -> NaiveDate {
        self.now_local().date()
    }

    /// Wall-clock moment of an epoch-millisecond instant in the zone
    ///
    /// # Returns
    /// * `None` if `millis` is outside the range chrono can represent
    pub fn local_moment(&self, millis: i64) -> Option<NaiveDateTime> {
        DateTime::from_timestamp_millis(millis).map(|instant| instant.with_timezone(&self.zone).naive_local())
    }

    /// Today as a `yyyyMMdd` integer, e.g. `20240115`
    pub fn current_day_as_integer(&self) -> i32 {
        day_as_integer(self.today())
    }

    /// Today as `yyyy-MM-dd`
    pub fn current_day_as_text(&self) -> String {
        DAY_DASHED.format_date(self.today())
    }

    /// Now as a `yyyyMMddHHmmss` integer, e.g. `20240115143022`
    pub fn current_time_as_integer(&self) -> i64 {
        time_as_integer(self.now_local())
    }

    /// Now as `yyyy-MM-dd HH:mm:ss`
    pub fn current_time_as_text(&self) -> String {
        TIME_DASHED.format_datetime(self.now_local())
    }

    /// Whether an epoch-millisecond instant falls on today's date in the zone
    ///
    /// Today spans from midnight inclusive to the next midnight exclusive.
    ///
    /// # Arguments
    /// * `millis` - Milliseconds since the Unix epoch
    pub fn is_current_day(&self, millis: i64) -> bool {
        let Some(moment) = self.local_moment(millis) else {
            return false;
        };

        let today = self.today();
        let start = today.and_time(NaiveTime::MIN);
        match today.succ_opt() {
            Some(tomorrow) => moment >= start && moment < tomorrow.and_time(NaiveTime::MIN),
            None => moment >= start,
        }
    }

    /// Duration from `first` to `second`, both read as wall-clock moments in the zone
    ///
    /// Across a daylight saving change this differs from the absolute gap between
    /// the two instants by the size of the shift.
    pub fn elapsed_between<A: TimeZone, B: TimeZone>(&self, first: &DateTime<A>, second: &DateTime<B>) -> ElapsedDuration {
        let first = first.with_timezone(&self.zone).naive_local();
        let second = second.with_timezone(&self.zone).naive_local();
        second - first
    }

    /// Same as [`DateUtil::elapsed_between`], from raw epoch milliseconds
    ///
    /// # Returns
    /// * `Result<ElapsedDuration, DateError>` - `TimestampOutOfRange` if either value
    ///   cannot be represented
    pub fn elapsed_between_millis(&self, first: i64, second: i64) -> Result<ElapsedDuration> {
        let start = self.local_moment(first).ok_or(DateError::TimestampOutOfRange(first))?;
        let end = self.local_moment(second).ok_or(DateError::TimestampOutOfRange(second))?;
        Ok(end - start)
    }
}

/// Today in the host zone as a `yyyyMMdd` integer
pub fn current_day_as_integer() -> i32 {
    DateUtil::system().current_day_as_integer()
}

/// Today in the host zone as `yyyy-MM-dd`
pub fn current_day_as_text() -> String {
    DateUtil::system().current_day_as_text()
}

/// Now in the host zone as a `yyyyMMddHHmmss` integer
pub fn current_time_as_integer() -> i64 {
    DateUtil::system().current_time_as_integer()
}

/// Now in the host zone as `yyyy-MM-dd HH:mm:ss`
pub fn current_time_as_text() -> String {
    DateUtil::system().current_time_as_text()
}

pub fn is_current_day(millis: i64) -> bool {
    DateUtil::system().is_current_day(millis)
}

pub fn elapsed_between<A: TimeZone, B: TimeZone>(first: &DateTime<A>, second: &DateTime<B>) -> ElapsedDuration {
    DateUtil::system().elapsed_between(first, second)
}

pub fn elapsed_between_millis(first: i64, second: i64) -> Result<ElapsedDuration> {
    DateUtil::system().elapsed_between_millis(first, second)
}
