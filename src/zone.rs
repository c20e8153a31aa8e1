//! Time zone selection
//!
//! The zone every "current" query runs in is chosen once, from configuration, and
//! passed explicitly to [`crate::DateUtil`]. The host zone is the default.

use std::fmt;

use anyhow::{anyhow, Result};
use chrono_tz::Tz;

use crate::constants::{ZONE_LOCAL, ZONE_UTC};

/// Either the host zone or a named IANA zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneSpec {
    Local,
    Named(Tz),
}

impl ZoneSpec {
    /// Parse `local`, `utc` or an IANA zone name such as `Europe/Paris`
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ZONE_LOCAL) {
            return Ok(ZoneSpec::Local);
        }
        if trimmed.eq_ignore_ascii_case(ZONE_UTC) {
            return Ok(ZoneSpec::Named(chrono_tz::UTC));
        }
        let tz: Tz = trimmed
            .parse()
            .map_err(|e| anyhow!("Invalid time zone '{trimmed}' (expected IANA name, e.g. America/New_York): {e}"))?;
        Ok(ZoneSpec::Named(tz))
    }
}

impl fmt::Display for ZoneSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneSpec::Local => f.write_str(ZONE_LOCAL),
            ZoneSpec::Named(tz) => f.write_str(tz.name()),
        }
    }
}
