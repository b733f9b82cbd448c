//! Mixed-flights resolvers.
//!
//! Informational lookups only; the MGT resolver never consults these tables
//! and only points to them through a trace note.

use std::sync::Arc;

use log::debug;

use crate::error::{GroundTimeError, Result};
use crate::models::{
    AircraftGroup, CombinedMixedBreakdownResult, MixedFlightMgtResult, MixedFlightSector,
    Movement, StationKey,
};
use crate::tables::ReferenceTables;

/// Resolves the informational mixed-flights tables.
#[derive(Debug, Clone)]
pub struct MixedFlightsResolver {
    tables: Arc<ReferenceTables>,
}

impl MixedFlightsResolver {
    /// Resolver over one shared edition.
    pub fn new(tables: Arc<ReferenceTables>) -> Self {
        Self { tables }
    }

    /// Mixed-flights MGT for a movement at a physical station.
    ///
    /// # Errors
    /// `UnknownMixedFlightSector` when the movement/station pair maps to no
    /// sector, `UnknownAircraftGroupForMixedFlights` when the sector has no
    /// entry for the group.
    pub fn resolve_mixed_flight_mgt(
        &self,
        movement: Movement,
        station: StationKey,
        aircraft_group: AircraftGroup,
    ) -> Result<MixedFlightMgtResult> {
        let sector = MixedFlightSector::for_movement(movement, station)
            .ok_or(GroundTimeError::UnknownMixedFlightSector { movement, station })?;
        self.resolve_sector(sector, aircraft_group)
    }

    /// Mixed-flights MGT for an explicit sector.
    pub fn resolve_sector(
        &self,
        sector: MixedFlightSector,
        aircraft_group: AircraftGroup,
    ) -> Result<MixedFlightMgtResult> {
        let entry = self
            .tables
            .mixed_flights()
            .mgt(sector, aircraft_group)
            .ok_or(GroundTimeError::UnknownAircraftGroupForMixedFlights {
                aircraft_group,
                sector: Some(sector),
            })?;

        debug!(
            "mixed flights {sector} {aircraft_group}: {} min (USA {:?})",
            entry.standard, entry.usa
        );

        Ok(MixedFlightMgtResult {
            sector,
            aircraft_group,
            standard_minutes: entry.standard,
            usa_minutes: entry.usa,
        })
    }

    /// Combined mixed-flights activity breakdown.
    ///
    /// # Errors
    /// `MixedFlightsNotApplicable` for groups authored as `N/A`,
    /// `UnknownAircraftGroupForMixedFlights` for groups with no entry.
    pub fn resolve_combined_mixed_breakdown(
        &self,
        aircraft_group: AircraftGroup,
    ) -> Result<CombinedMixedBreakdownResult> {
        let table = self.tables.mixed_flights();
        let row = table
            .combined(aircraft_group)
            .ok_or(GroundTimeError::UnknownAircraftGroupForMixedFlights {
                aircraft_group,
                sector: None,
            })?
            .ok_or(GroundTimeError::MixedFlightsNotApplicable { aircraft_group })?;

        debug!(
            "combined mixed breakdown {aircraft_group}: minimum {} min",
            row.minimum_ground_time
        );

        Ok(CombinedMixedBreakdownResult {
            aircraft_group,
            activities: row.activities.clone(),
            minimum_ground_time: row.minimum_ground_time,
            assumptions: table.combined_assumptions().to_vec(),
        })
    }
}
