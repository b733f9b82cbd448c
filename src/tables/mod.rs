//! Reference data store.
//!
//! Holds the five table families of the ramp-handling chapter:
//! turnaround and transit MGT, activity breakdowns, delivery before S.T.D,
//! and the informational mixed-flights tables, plus the overlay constants.
//!
//! # Lifecycle
//!
//! Tables are assembled once through [`ReferenceTablesBuilder`] (or
//! [`ReferenceTables::standard`]) and are read-only afterwards: no accessor
//! hands out a mutable reference. Resolvers share them through an `Arc`,
//! so several editions can be loaded side by side.

mod breakdown;
mod delivery;
mod manual;
mod mgt;
mod mixed;
mod overlays;

pub use breakdown::{BreakdownRow, BreakdownSheet, BreakdownTable};
pub use delivery::DeliveryTable;
pub use manual::EDITION as STANDARD_EDITION;
pub use mgt::{MgtRow, MgtTable};
pub use mixed::{CombinedMixedRow, MixedFlightMgt, MixedFlightsTable};
pub use overlays::{
    DestinationFloor, OverlayConfig, LOCAL_TOWING_ADD_MINUTES, TURNAROUND_MIN_TO_KAN_MINUTES,
    TURNAROUND_MIN_TO_SSH_MINUTES, TURNAROUND_MIN_TO_USA_MINUTES,
    TURNAROUND_MIN_TO_USA_STATIONS_MINUTES,
};

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::models::Operation;

/// Immutable reference tables for one manual edition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTables {
    edition: String,
    turnaround: MgtTable,
    transit: MgtTable,
    breakdowns: BreakdownTable,
    delivery: DeliveryTable,
    mixed_flights: MixedFlightsTable,
    overlays: OverlayConfig,
}

impl ReferenceTables {
    /// The authored manual edition.
    pub fn standard() -> Self {
        Self::builder(STANDARD_EDITION)
            .with_turnaround(manual::turnaround_mgt())
            .with_transit(manual::transit_mgt())
            .with_breakdowns(manual::breakdowns())
            .with_delivery(manual::delivery())
            .with_mixed_flights(manual::mixed_flights())
            .with_overlays(OverlayConfig::default())
            .build()
    }

    /// Shared handle to the authored edition.
    pub fn shared_standard() -> Arc<Self> {
        Arc::new(Self::standard())
    }

    /// Starts an empty edition.
    pub fn builder(edition: impl Into<String>) -> ReferenceTablesBuilder {
        ReferenceTablesBuilder::new(edition)
    }

    /// Starts a new edition from this one (for revised manuals).
    pub fn to_builder(&self, edition: impl Into<String>) -> ReferenceTablesBuilder {
        ReferenceTablesBuilder {
            tables: Self {
                edition: edition.into(),
                ..self.clone()
            },
        }
    }

    pub fn edition(&self) -> &str {
        &self.edition
    }

    /// MGT table for an operation.
    pub fn mgt(&self, operation: Operation) -> &MgtTable {
        match operation {
            Operation::Turnaround => &self.turnaround,
            Operation::Transit => &self.transit,
        }
    }

    pub fn breakdowns(&self) -> &BreakdownTable {
        &self.breakdowns
    }

    pub fn delivery(&self) -> &DeliveryTable {
        &self.delivery
    }

    pub fn mixed_flights(&self) -> &MixedFlightsTable {
        &self.mixed_flights
    }

    pub fn overlays(&self) -> &OverlayConfig {
        &self.overlays
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::standard()
    }
}

/// Assembles a [`ReferenceTables`] edition.
#[derive(Debug, Clone)]
pub struct ReferenceTablesBuilder {
    tables: ReferenceTables,
}

impl ReferenceTablesBuilder {
    /// Empty tables with no overlay rules.
    pub fn new(edition: impl Into<String>) -> Self {
        Self {
            tables: ReferenceTables {
                edition: edition.into(),
                turnaround: MgtTable::new(Operation::Turnaround),
                transit: MgtTable::new(Operation::Transit),
                breakdowns: BreakdownTable::new(),
                delivery: DeliveryTable::new(),
                mixed_flights: MixedFlightsTable::new(),
                overlays: OverlayConfig::empty(),
            },
        }
    }

    /// Sets the turnaround table.
    ///
    /// A table built for the other operation is re-keyed so error messages
    /// name the right operation.
    pub fn with_turnaround(mut self, table: MgtTable) -> Self {
        self.tables.turnaround = rekey(table, Operation::Turnaround);
        self
    }

    pub fn with_transit(mut self, table: MgtTable) -> Self {
        self.tables.transit = rekey(table, Operation::Transit);
        self
    }

    pub fn with_breakdowns(mut self, breakdowns: BreakdownTable) -> Self {
        self.tables.breakdowns = breakdowns;
        self
    }

    pub fn with_delivery(mut self, delivery: DeliveryTable) -> Self {
        self.tables.delivery = delivery;
        self
    }

    pub fn with_mixed_flights(mut self, mixed_flights: MixedFlightsTable) -> Self {
        self.tables.mixed_flights = mixed_flights;
        self
    }

    pub fn with_overlays(mut self, overlays: OverlayConfig) -> Self {
        self.tables.overlays = overlays;
        self
    }

    pub fn build(self) -> ReferenceTables {
        self.tables
    }
}

fn rekey(table: MgtTable, operation: Operation) -> MgtTable {
    if table.operation() == operation {
        return table;
    }
    table
        .rows()
        .flat_map(|(g, m, row)| row.iter().map(move |(s, c)| (g, m, *s, *c)))
        .fold(MgtTable::new(operation), |t, (g, m, s, c)| t.with_cell(g, m, s, c))
}
