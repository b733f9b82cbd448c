//! Ground-handling activity model.
//!
//! An activity breakdown itemizes ground time into named tasks (deplaning,
//! cleaning, catering, boarding, ...). Each task carries one of three
//! authored values:
//! - **Fixed**: a plain minute count.
//! - **Not applicable**: the manual prints `-` for this movement.
//! - **Resourced**: the manual prints `minutes/count*`; the minutes assume
//!   that many resources working in parallel (footnote `*` or `**`).
//!
//! Resourced values are reported exactly as authored. Nothing in this crate
//! rescales them for a different crew or vehicle count.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Footnote marker attached to a resourced value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Footnote {
    /// `*`
    #[serde(rename = "*")]
    Single,
    /// `**`
    #[serde(rename = "**")]
    Double,
}

impl Footnote {
    pub fn marker(&self) -> &'static str {
        match self {
            Footnote::Single => "*",
            Footnote::Double => "**",
        }
    }
}

/// Authored value of one activity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActivityValue {
    /// Plain duration in minutes.
    Fixed { minutes: f64 },
    /// Not performed for this movement.
    NotApplicable,
    /// Duration that assumes `resource_count` parallel resources.
    Resourced {
        minutes: f64,
        resource_count: u32,
        footnote: Footnote,
    },
}

impl ActivityValue {
    pub fn fixed(minutes: f64) -> Self {
        ActivityValue::Fixed { minutes }
    }

    pub fn resourced(minutes: f64, resource_count: u32, footnote: Footnote) -> Self {
        ActivityValue::Resourced {
            minutes,
            resource_count,
            footnote,
        }
    }

    /// Minutes of a fixed value. `None` for resourced and not-applicable values.
    pub fn fixed_minutes(&self) -> Option<f64> {
        match *self {
            ActivityValue::Fixed { minutes } => Some(minutes),
            _ => None,
        }
    }

    /// Minutes as printed in the manual, including resourced values.
    ///
    /// For a resourced value this is the duration under the authored
    /// resource count, not a crew-independent figure.
    pub fn authored_minutes(&self) -> Option<f64> {
        match *self {
            ActivityValue::Fixed { minutes } | ActivityValue::Resourced { minutes, .. } => {
                Some(minutes)
            }
            ActivityValue::NotApplicable => None,
        }
    }

    /// Resource count assumed by a resourced value.
    pub fn resource_count(&self) -> Option<u32> {
        match *self {
            ActivityValue::Resourced { resource_count, .. } => Some(resource_count),
            _ => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        !matches!(self, ActivityValue::NotApplicable)
    }

    pub fn is_resourced(&self) -> bool {
        matches!(self, ActivityValue::Resourced { .. })
    }
}

impl fmt::Display for ActivityValue {
    /// Renders the manual notation: `12.00`, `-`, `15.00/20*`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityValue::Fixed { minutes } => write!(f, "{minutes:.2}"),
            ActivityValue::NotApplicable => f.write_str("-"),
            ActivityValue::Resourced {
                minutes,
                resource_count,
                footnote,
            } => write!(f, "{minutes:.2}/{resource_count}{}", footnote.marker()),
        }
    }
}

/// A named activity with its authored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    /// Activity name as printed in the manual.
    pub name: String,
    pub value: ActivityValue,
}

impl ActivityItem {
    pub fn new(name: impl Into<String>, value: ActivityValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Which manual column the normalized ground time was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroundTimeBasis {
    /// "Total Ground Time"
    TotalGroundTime,
    /// "Min Ground Time"
    MinGroundTime,
}

impl GroundTimeBasis {
    pub fn label(&self) -> &'static str {
        match self {
            GroundTimeBasis::TotalGroundTime => "Total Ground Time",
            GroundTimeBasis::MinGroundTime => "Min Ground Time",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resourced_value_is_not_a_plain_number() {
        let v = ActivityValue::resourced(15.0, 20, Footnote::Single);
        assert_eq!(v.fixed_minutes(), None);
        assert_eq!(v.authored_minutes(), Some(15.0));
        assert_eq!(v.resource_count(), Some(20));
        assert!(v.is_resourced());
        assert!(v.is_applicable());
    }

    #[test]
    fn test_fixed_and_not_applicable() {
        let fixed = ActivityValue::fixed(12.0);
        assert_eq!(fixed.fixed_minutes(), Some(12.0));
        assert_eq!(fixed.resource_count(), None);

        let na = ActivityValue::NotApplicable;
        assert!(!na.is_applicable());
        assert_eq!(na.authored_minutes(), None);
    }

    #[test]
    fn test_manual_notation() {
        assert_eq!(ActivityValue::fixed(12.0).to_string(), "12.00");
        assert_eq!(ActivityValue::NotApplicable.to_string(), "-");
        assert_eq!(
            ActivityValue::resourced(15.0, 20, Footnote::Single).to_string(),
            "15.00/20*"
        );
        assert_eq!(
            ActivityValue::resourced(17.0, 2, Footnote::Double).to_string(),
            "17.00/2**"
        );
    }

    #[test]
    fn test_serialized_shape() {
        let json =
            serde_json::to_value(ActivityValue::resourced(10.0, 8, Footnote::Single)).unwrap();
        assert_eq!(json["kind"], "resourced");
        assert_eq!(json["resource_count"], 8);
        assert_eq!(json["footnote"], "*");

        let json = serde_json::to_value(ActivityValue::NotApplicable).unwrap();
        assert_eq!(json["kind"], "not_applicable");
    }
}
