//! MGT table cells and HH:MM conversion.
//!
//! The manual prints durations as `HH:MM`; cells store whole minutes.
//! A cell marked `(SA)` carries a second, security-alert value.

use serde::{Deserialize, Serialize};

/// One MGT table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MgtCell {
    /// A single duration (minutes).
    Single(u32),
    /// A standard duration and its security-alert variant (minutes).
    WithSecurityAlert { standard: u32, security_alert: u32 },
}

impl MgtCell {
    /// Creates a single-value cell.
    pub const fn minutes(minutes: u32) -> Self {
        MgtCell::Single(minutes)
    }

    /// Creates a cell with a security-alert variant.
    pub const fn with_security_alert(standard: u32, security_alert: u32) -> Self {
        MgtCell::WithSecurityAlert {
            standard,
            security_alert,
        }
    }

    /// Picks the applicable value.
    ///
    /// The flag only matters for cells that define an SA variant.
    pub fn select(&self, is_security_alert_station: bool) -> u32 {
        match *self {
            MgtCell::Single(m) => m,
            MgtCell::WithSecurityAlert {
                standard,
                security_alert,
            } => {
                if is_security_alert_station {
                    security_alert
                } else {
                    standard
                }
            }
        }
    }

    pub fn standard(&self) -> u32 {
        self.select(false)
    }

    pub fn has_security_alert_variant(&self) -> bool {
        matches!(self, MgtCell::WithSecurityAlert { .. })
    }
}

/// Formats minutes as zero-padded `HH:MM`.
pub fn format_hhmm(total_minutes: u32) -> String {
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Parses `HH:MM` into minutes.
///
/// Returns `None` for malformed input or minutes outside `0..60`.
pub fn parse_hhmm(hhmm: &str) -> Option<u32> {
    let (hh, mm) = hhmm.trim().split_once(':')?;
    let hours: u32 = hh.trim().parse().ok()?;
    let minutes: u32 = mm.trim().parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    hours.checked_mul(60)?.checked_add(minutes)
}
