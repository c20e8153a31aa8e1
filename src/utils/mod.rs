//! Date utility modules.
//!
//! # Available Utilities
//!
//! - [`pattern`] - Fixed-width format patterns and integer encodings
//! - [`period`] - Calendar periods between dates
//! - [`clock`] - Clock sources for "current" queries
//! - [`datetime`] - Current-moment encodings, same-day check and elapsed durations
//!
//! Everything here is a pure function of its inputs, the clock and the time zone.
//! Nothing is cached between calls.

pub mod clock;
pub mod datetime;
pub mod pattern;
pub mod period;
