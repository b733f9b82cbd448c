//! Minimum ground time resolver.
//!
//! # Algorithm
//! 1. Select the base cell for (group, movement, station); use its SA
//!    variant when the station is under security alert.
//! 2. Run the overlay chain (towing, destination floors, long-haul).
//! 3. Append the mixed-flights note.
//!
//! The result is a pure function of the query and the tables.

use std::sync::Arc;

use log::debug;

use super::overlay::{OverlayChain, OverlayContext};
use crate::error::Result;
use crate::models::{
    AircraftGroup, Destination, MgtResult, Movement, Operation, RuleTraceEntry, StationKey,
};
use crate::tables::ReferenceTables;

/// Trace rule id of the informational mixed-flights note.
pub const MIXED_FLIGHTS_NOTE: &str = "mixed_flights_note";

/// Canonical MGT query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MgtQuery {
    pub operation: Operation,
    pub aircraft_group: AircraftGroup,
    pub movement: Movement,
    pub station: StationKey,
    /// Outbound destination; floors only apply to turnarounds.
    pub destination: Option<Destination>,
    pub is_security_alert_station: bool,
    pub apply_local_towing_rule: bool,
}

impl MgtQuery {
    pub fn new(
        operation: Operation,
        aircraft_group: AircraftGroup,
        movement: Movement,
        station: StationKey,
    ) -> Self {
        Self {
            operation,
            aircraft_group,
            movement,
            station,
            destination: None,
            is_security_alert_station: false,
            apply_local_towing_rule: false,
        }
    }

    pub fn with_destination(mut self, destination: impl Into<Destination>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_security_alert(mut self, is_security_alert_station: bool) -> Self {
        self.is_security_alert_station = is_security_alert_station;
        self
    }

    pub fn with_local_towing(mut self, apply_local_towing_rule: bool) -> Self {
        self.apply_local_towing_rule = apply_local_towing_rule;
        self
    }
}

/// Resolves minimum ground time against one edition of the tables.
#[derive(Debug, Clone)]
pub struct MgtResolver {
    tables: Arc<ReferenceTables>,
    chain: OverlayChain,
}

impl MgtResolver {
    /// Creates a resolver whose overlay chain follows the tables' configuration.
    pub fn new(tables: Arc<ReferenceTables>) -> Self {
        let chain = OverlayChain::from_config(tables.overlays());
        Self { tables, chain }
    }

    /// Creates a resolver with a custom overlay chain.
    pub fn with_chain(tables: Arc<ReferenceTables>, chain: OverlayChain) -> Self {
        Self { tables, chain }
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    /// Resolves the minimum ground time for a query.
    ///
    /// # Errors
    /// `UnknownAircraftGroup`, `UnknownMovementForAircraftGroup` or
    /// `UnknownStationForMovement`, depending on which key is missing from
    /// the operation's table.
    pub fn resolve_mgt(&self, query: &MgtQuery) -> Result<MgtResult> {
        let table = self.tables.mgt(query.operation);
        let row = table.row(query.aircraft_group, query.movement)?;
        let cell = table.cell(query.aircraft_group, query.movement, query.station)?;
        let base = cell.select(query.is_security_alert_station);

        let ctx = OverlayContext {
            operation: query.operation,
            movement: query.movement,
            station: query.station,
            destination: query.destination.as_ref(),
            is_security_alert_station: query.is_security_alert_station,
            apply_local_towing_rule: query.apply_local_towing_rule,
            row,
        };
        let (adjusted, mut rule_trace) = self.chain.apply(&ctx, base);

        rule_trace.push(RuleTraceEntry::note(
            MIXED_FLIGHTS_NOTE,
            "Note: mixed-aircraft-type flights use the single aircraft type MGT \
             (see mixed-flights table)",
        ));

        debug!(
            "mgt {} {} {} {}: base {} min, adjusted {} min",
            query.operation, query.aircraft_group, query.movement, query.station, base, adjusted
        );

        Ok(MgtResult {
            operation: query.operation,
            aircraft_group: query.aircraft_group,
            movement: query.movement,
            station_key: query.station,
            base_duration: base,
            adjusted_duration: adjusted,
            rule_trace,
        })
    }
}
