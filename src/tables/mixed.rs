//! Mixed-flights tables.
//!
//! Two informational tables for flights that combine aircraft types:
//! - MGT per sector (13.16.3.3), with a separate value when the outbound leg
//!   goes to the USA.
//! - Combined activity breakdown (13.16.10) per aircraft group.
//!
//! Neither table feeds the main MGT computation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{ActivityItem, AircraftGroup, MixedFlightSector};

/// Mixed-flights MGT entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixedFlightMgt {
    /// Standard duration (minutes).
    pub standard: u32,
    /// USA-bound duration (minutes), outbound sectors only.
    pub usa: Option<u32>,
}

/// Combined breakdown row for one aircraft group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedMixedRow {
    pub activities: Vec<ActivityItem>,
    pub minimum_ground_time: f64,
}

/// Both mixed-flights tables of one edition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MixedFlightsTable {
    mgt: BTreeMap<MixedFlightSector, BTreeMap<AircraftGroup, MixedFlightMgt>>,
    /// `None` marks a group the manual authors as `N/A`.
    combined: BTreeMap<AircraftGroup, Option<CombinedMixedRow>>,
    combined_assumptions: Vec<String>,
}

impl MixedFlightsTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the MGT entry for a sector and group.
    pub fn with_mgt(
        mut self,
        sector: MixedFlightSector,
        aircraft_group: AircraftGroup,
        entry: MixedFlightMgt,
    ) -> Self {
        self.mgt.entry(sector).or_default().insert(aircraft_group, entry);
        self
    }

    /// Adds the combined breakdown row for a group.
    pub fn with_combined_row(
        mut self,
        aircraft_group: AircraftGroup,
        row: CombinedMixedRow,
    ) -> Self {
        self.combined.insert(aircraft_group, Some(row));
        self
    }

    /// Marks a group's combined breakdown as authored `N/A`.
    pub fn with_combined_not_applicable(mut self, aircraft_group: AircraftGroup) -> Self {
        self.combined.insert(aircraft_group, None);
        self
    }

    /// Appends an assumption printed under the combined breakdown.
    pub fn with_combined_assumption(mut self, assumption: impl Into<String>) -> Self {
        self.combined_assumptions.push(assumption.into());
        self
    }

    /// MGT entry for a sector and group.
    pub fn mgt(
        &self,
        sector: MixedFlightSector,
        aircraft_group: AircraftGroup,
    ) -> Option<&MixedFlightMgt> {
        self.mgt.get(&sector).and_then(|by_group| by_group.get(&aircraft_group))
    }

    /// Combined breakdown entry.
    ///
    /// Outer `None`: the group has no entry. Inner `None`: authored `N/A`.
    pub fn combined(&self, aircraft_group: AircraftGroup) -> Option<Option<&CombinedMixedRow>> {
        self.combined.get(&aircraft_group).map(Option::as_ref)
    }

    /// Assumptions printed under the combined breakdown.
    pub fn combined_assumptions(&self) -> &[String] {
        &self.combined_assumptions
    }

    /// Every MGT entry, by sector then group.
    pub fn mgt_entries(
        &self,
    ) -> impl Iterator<Item = (MixedFlightSector, AircraftGroup, &MixedFlightMgt)> + '_ {
        self.mgt
            .iter()
            .flat_map(|(s, by_g)| by_g.iter().map(move |(g, e)| (*s, *g, e)))
    }

    /// Combined rows, skipping `N/A` groups.
    pub fn combined_rows(&self) -> impl Iterator<Item = (AircraftGroup, &CombinedMixedRow)> + '_ {
        self.combined
            .iter()
            .filter_map(|(g, row)| row.as_ref().map(|r| (*g, r)))
    }
}
