//! dateutil - fixed-pattern date/time formatting and calendar arithmetic
//!
//! This library formats the current moment into four fixed encodings, checks
//! whether a timestamp falls on today, and measures calendar periods and elapsed
//! durations between dates and moments. It is a thin layer over `chrono`.
//!
//! # Modules
//!
//! * [`utils`] - Patterns, periods, clocks and the [`DateUtil`] operations
//! * [`error`] - The [`DateError`] type returned by every fallible operation
//! * [`zone`] - Time zone selection
//! * [`config`] - Configuration file handling for the command-line tool
//! * [`logger`] - Log output setup for the command-line tool
//!
//! # Example
//!
//! ```
//! use dateutil::period;
//!
//! let p = period::between_days(20240101, 20240201).unwrap();
//! assert_eq!((p.years(), p.months(), p.days()), (0, 1, 0));
//! ```

/// Configuration module for managing application settings
pub mod config;

/// Format patterns and other constant values
pub mod constants;

/// Error type for parsing and timestamp conversion
pub mod error;

/// Logging utilities for the command-line tool
pub mod logger;

/// Date and time helpers
pub mod utils;

/// Time zone selection
pub mod zone;

pub use error::{DateError, Result};
pub use utils::clock::{Clock, FixedClock, SystemClock};
pub use utils::datetime::{DateUtil, ElapsedDuration};
pub use utils::pattern::FormatPattern;
pub use utils::period::{self, CalendarPeriod};
pub use zone::ZoneSpec;
