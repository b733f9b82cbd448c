//! Aircraft delivery before S.T.D (13.16.13.1).
//!
//! Hours between hangar release and parking-gate arrival for aircraft coming
//! out of scheduled maintenance. Rows are keyed by the label exactly as the
//! manual prints it, which is not always the canonical group label; a
//! legacy label records such a discrepancy without correcting it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::AircraftGroup;

/// Delivery hours keyed by authored label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryTable {
    /// Authored label → hours.
    hours: BTreeMap<String, f64>,
    /// Canonical group → label the manual authored its row under.
    legacy_labels: BTreeMap<AircraftGroup, String>,
}

impl DeliveryTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a row under its authored label.
    pub fn with_row(mut self, label: impl Into<String>, hours: f64) -> Self {
        self.hours.insert(label.into(), hours);
        self
    }

    /// Records that `group`'s row may be authored under `label`.
    pub fn with_legacy_label(mut self, group: AircraftGroup, label: impl Into<String>) -> Self {
        self.legacy_labels.insert(group, label.into());
        self
    }

    /// Hours for an authored label.
    pub fn hours(&self, label: &str) -> Option<f64> {
        self.hours.get(label.trim()).copied()
    }

    /// Label the manual authored `group`'s row under, when it differs.
    pub fn legacy_label(&self, group: AircraftGroup) -> Option<&str> {
        self.legacy_labels.get(&group).map(String::as_str)
    }

    /// Rows by authored label.
    pub fn rows(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.hours.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
