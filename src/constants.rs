//! Constants used throughout the crate
//!
//! This module centralizes the fixed format patterns, configuration defaults
//! and user-facing messages.

use crate::utils::pattern::FormatPattern;

// Format patterns
/// Compact day encoding, e.g. `20240115`
pub const DAY_COMPACT: FormatPattern = FormatPattern::new("yyyyMMdd", "%Y%m%d");
/// Dashed day encoding, e.g. `2024-01-15`
pub const DAY_DASHED: FormatPattern = FormatPattern::new("yyyy-MM-dd", "%Y-%m-%d");
/// Compact date-time encoding, e.g. `20240115143022`
pub const TIME_COMPACT: FormatPattern = FormatPattern::new("yyyyMMddHHmmss", "%Y%m%d%H%M%S");
/// Dashed date-time encoding, e.g. `2024-01-15 14:30:22`
pub const TIME_DASHED: FormatPattern = FormatPattern::new("yyyy-MM-dd HH:mm:ss", "%Y-%m-%d %H:%M:%S");

// Calendar
pub const MONTHS_PER_YEAR: i32 = 12;

// Configuration
pub const APP_NAME: &str = "dateutil";
pub const LOCAL_CONFIG_FILE: &str = "dateutil.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const ZONE_LOCAL: &str = "local";
pub const ZONE_UTC: &str = "utc";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Log timestamp format
pub const LOG_TIME_FORMAT: &str = "%H:%M:%S%.3f";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const ERROR_INVALID_ARGS: &str = "❌ Expected either no arguments or two dates";
