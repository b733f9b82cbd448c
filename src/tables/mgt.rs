//! Minimum ground time tables (13.16.3.1 turnaround, 13.16.3.2 transit).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{GroundTimeError, Result};
use crate::models::{AircraftGroup, MgtCell, Movement, Operation, StationKey};

/// Station cells of one (aircraft group, movement) row.
pub type MgtRow = BTreeMap<StationKey, MgtCell>;

/// MGT table for a single operation.
///
/// Keyed aircraft group → movement → station. A row need not define every
/// station; a missing key is a lookup failure, never zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MgtTable {
    operation: Operation,
    rows: BTreeMap<AircraftGroup, BTreeMap<Movement, MgtRow>>,
}

impl MgtTable {
    /// Creates an empty table for an operation.
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            rows: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) one cell.
    pub fn with_cell(
        mut self,
        aircraft_group: AircraftGroup,
        movement: Movement,
        station: StationKey,
        cell: MgtCell,
    ) -> Self {
        self.rows
            .entry(aircraft_group)
            .or_default()
            .entry(movement)
            .or_default()
            .insert(station, cell);
        self
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Looks up a row, distinguishing an unknown group from an unknown movement.
    pub fn row(&self, aircraft_group: AircraftGroup, movement: Movement) -> Result<&MgtRow> {
        let by_movement =
            self.rows
                .get(&aircraft_group)
                .ok_or(GroundTimeError::UnknownAircraftGroup {
                    operation: self.operation,
                    aircraft_group,
                })?;
        by_movement
            .get(&movement)
            .ok_or(GroundTimeError::UnknownMovementForAircraftGroup {
                operation: self.operation,
                aircraft_group,
                movement,
            })
    }

    /// Looks up a cell; each missing dimension yields its own error.
    pub fn cell(
        &self,
        aircraft_group: AircraftGroup,
        movement: Movement,
        station: StationKey,
    ) -> Result<&MgtCell> {
        self.row(aircraft_group, movement)?
            .get(&station)
            .ok_or(GroundTimeError::UnknownStationForMovement {
                operation: self.operation,
                aircraft_group,
                movement,
                station,
            })
    }

    pub fn aircraft_groups(&self) -> impl Iterator<Item = AircraftGroup> + '_ {
        self.rows.keys().copied()
    }

    /// Movements defined for a group (empty if the group is unknown).
    pub fn movements(&self, aircraft_group: AircraftGroup) -> Vec<Movement> {
        self.rows
            .get(&aircraft_group)
            .map(|m| m.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Stations defined for a row (empty if the row is unknown).
    pub fn stations(&self, aircraft_group: AircraftGroup, movement: Movement) -> Vec<StationKey> {
        self.row(aircraft_group, movement)
            .map(|r| r.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Iterates every (group, movement, row) triple.
    pub fn rows(&self) -> impl Iterator<Item = (AircraftGroup, Movement, &MgtRow)> + '_ {
        self.rows
            .iter()
            .flat_map(|(g, by_m)| by_m.iter().map(move |(m, row)| (*g, *m, row)))
    }

    /// Number of cells in the table.
    pub fn len(&self) -> usize {
        self.rows().map(|(_, _, row)| row.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
