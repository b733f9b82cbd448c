//! Activity breakdown tables.
//!
//! One sheet per (aircraft group, operation) pair, each holding a row per
//! movement. Sheets are authored independently of the MGT tables and their
//! totals are not reconciled with them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{GroundTimeError, Result};
use crate::models::{ActivityItem, AircraftGroup, GroundTimeBasis, Movement, Operation};

/// Activities of one movement plus the sheet's ground-time column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRow {
    /// Activities in manual order (the ground-time column excluded).
    pub activities: Vec<ActivityItem>,
    /// Ground-time column value; `None` when authored as `-`.
    pub ground_time: Option<f64>,
}

impl BreakdownRow {
    /// Row from activities in manual order and the ground-time column.
    pub fn new(activities: Vec<ActivityItem>, ground_time: Option<f64>) -> Self {
        Self {
            activities,
            ground_time,
        }
    }
}

/// Breakdown sheet for one aircraft group and operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownSheet {
    pub aircraft_group: AircraftGroup,
    pub operation: Operation,
    /// Whether the sheet prints "Total Ground Time" or "Min Ground Time".
    pub ground_time_basis: GroundTimeBasis,
    pub assumptions: Vec<String>,
    pub notes: Vec<String>,
    rows: BTreeMap<Movement, BreakdownRow>,
}

impl BreakdownSheet {
    /// Empty sheet; rows, assumptions and notes are added with the `with_*` builders.
    pub fn new(
        aircraft_group: AircraftGroup,
        operation: Operation,
        ground_time_basis: GroundTimeBasis,
    ) -> Self {
        Self {
            aircraft_group,
            operation,
            ground_time_basis,
            assumptions: Vec::new(),
            notes: Vec::new(),
            rows: BTreeMap::new(),
        }
    }

    /// Appends an assumption printed under the sheet.
    pub fn with_assumption(mut self, assumption: impl Into<String>) -> Self {
        self.assumptions.push(assumption.into());
        self
    }

    /// Appends a footnote printed under the sheet.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Adds (or replaces) the row for a movement.
    pub fn with_row(mut self, movement: Movement, row: BreakdownRow) -> Self {
        self.rows.insert(movement, row);
        self
    }

    /// Row for a movement, or `UnknownMovementForBreakdown`.
    pub fn row(&self, movement: Movement) -> Result<&BreakdownRow> {
        self.rows
            .get(&movement)
            .ok_or(GroundTimeError::UnknownMovementForBreakdown {
                aircraft_group: self.aircraft_group,
                operation: self.operation,
                movement,
            })
    }

    /// Rows in movement order.
    pub fn rows(&self) -> impl Iterator<Item = (Movement, &BreakdownRow)> + '_ {
        self.rows.iter().map(|(m, r)| (*m, r))
    }
}

/// All breakdown sheets, keyed aircraft group → operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BreakdownTable {
    sheets: BTreeMap<AircraftGroup, BTreeMap<Operation, BreakdownSheet>>,
}

impl BreakdownTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a sheet under its own group and operation.
    pub fn with_sheet(mut self, sheet: BreakdownSheet) -> Self {
        self.sheets
            .entry(sheet.aircraft_group)
            .or_default()
            .insert(sheet.operation, sheet);
        self
    }

    /// Sheet for a group and operation, or `UnknownAircraftOperationPair`.
    pub fn sheet(
        &self,
        aircraft_group: AircraftGroup,
        operation: Operation,
    ) -> Result<&BreakdownSheet> {
        self.sheets
            .get(&aircraft_group)
            .and_then(|by_op| by_op.get(&operation))
            .ok_or(GroundTimeError::UnknownAircraftOperationPair {
                aircraft_group,
                operation,
            })
    }

    /// Every sheet, by group then operation.
    pub fn sheets(&self) -> impl Iterator<Item = &BreakdownSheet> + '_ {
        self.sheets.values().flat_map(|by_op| by_op.values())
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityValue;

    fn table() -> BreakdownTable {
        BreakdownTable::new().with_sheet(
            BreakdownSheet::new(
                AircraftGroup::B757,
                Operation::Transit,
                GroundTimeBasis::MinGroundTime,
            )
            .with_assumption("50% Load Factor")
            .with_row(
                Movement::DomDom,
                BreakdownRow::new(
                    vec![ActivityItem::new("Pushback", ActivityValue::fixed(1.0))],
                    Some(39.0),
                ),
            ),
        )
    }

    #[test]
    fn test_sheet_and_row_lookup() {
        let t = table();
        let sheet = t.sheet(AircraftGroup::B757, Operation::Transit).unwrap();
        assert_eq!(sheet.assumptions, vec!["50% Load Factor"]);
        assert_eq!(sheet.row(Movement::DomDom).unwrap().ground_time, Some(39.0));
        assert_eq!(t.sheets().count(), 1);
    }

    #[test]
    fn test_distinct_failures() {
        let t = table();
        assert_eq!(
            t.sheet(AircraftGroup::B757, Operation::Turnaround).unwrap_err(),
            GroundTimeError::UnknownAircraftOperationPair {
                aircraft_group: AircraftGroup::B757,
                operation: Operation::Turnaround,
            }
        );
        let sheet = t.sheet(AircraftGroup::B757, Operation::Transit).unwrap();
        assert_eq!(
            sheet.row(Movement::IntlDom).unwrap_err(),
            GroundTimeError::UnknownMovementForBreakdown {
                aircraft_group: AircraftGroup::B757,
                operation: Operation::Transit,
                movement: Movement::IntlDom,
            }
        );
    }
}
