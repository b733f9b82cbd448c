//! Lookup and normalization errors.
//!
//! Every variant names the dimension that failed so the caller can ask a
//! precise follow-up question. None of them is transient.

use thiserror::Error;

use crate::models::{AircraftGroup, MixedFlightSector, Movement, Operation, StationKey};

/// Crate result alias.
pub type Result<T> = std::result::Result<T, GroundTimeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroundTimeError {
    #[error("unknown aircraft group '{aircraft_group}' for {operation} MGT")]
    UnknownAircraftGroup {
        operation: Operation,
        aircraft_group: AircraftGroup,
    },

    #[error(
        "unknown movement '{movement}' for aircraft group '{aircraft_group}' ({operation} MGT)"
    )]
    UnknownMovementForAircraftGroup {
        operation: Operation,
        aircraft_group: AircraftGroup,
        movement: Movement,
    },

    #[error(
        "unknown station '{station}' for {operation} MGT, \
         aircraft group '{aircraft_group}', movement '{movement}'"
    )]
    UnknownStationForMovement {
        operation: Operation,
        aircraft_group: AircraftGroup,
        movement: Movement,
        station: StationKey,
    },

    #[error("no activity breakdown defined for {aircraft_group} / {operation}")]
    UnknownAircraftOperationPair {
        aircraft_group: AircraftGroup,
        operation: Operation,
    },

    #[error(
        "no movement '{movement}' in the activity breakdown for {aircraft_group} / {operation}"
    )]
    UnknownMovementForBreakdown {
        aircraft_group: AircraftGroup,
        operation: Operation,
        movement: Movement,
    },

    #[error("no delivery time found for aircraft group '{aircraft_group}'")]
    UnknownAircraftGroupForDelivery { aircraft_group: AircraftGroup },

    #[error("no mixed-flights sector for movement '{movement}' at station '{station}'")]
    UnknownMixedFlightSector {
        movement: Movement,
        station: StationKey,
    },

    #[error("no mixed-flights entry for aircraft group '{aircraft_group}' in sector {sector:?}")]
    UnknownAircraftGroupForMixedFlights {
        aircraft_group: AircraftGroup,
        sector: Option<MixedFlightSector>,
    },

    #[error("combined mixed-flights breakdown is not applicable to '{aircraft_group}'")]
    MixedFlightsNotApplicable { aircraft_group: AircraftGroup },

    #[error("ambiguous {dimension} '{token}': matches {}", .candidates.join(", "))]
    AmbiguousAliasResolution {
        dimension: &'static str,
        token: String,
        candidates: Vec<String>,
    },
}

impl GroundTimeError {
    /// Name of the query dimension that could not be resolved.
    pub fn dimension(&self) -> &'static str {
        match self {
            GroundTimeError::UnknownAircraftGroup { .. }
            | GroundTimeError::UnknownAircraftOperationPair { .. }
            | GroundTimeError::UnknownAircraftGroupForDelivery { .. }
            | GroundTimeError::UnknownAircraftGroupForMixedFlights { .. }
            | GroundTimeError::MixedFlightsNotApplicable { .. } => "aircraft_group",
            GroundTimeError::UnknownMovementForAircraftGroup { .. }
            | GroundTimeError::UnknownMovementForBreakdown { .. } => "movement",
            GroundTimeError::UnknownStationForMovement { .. }
            | GroundTimeError::UnknownMixedFlightSector { .. } => "station",
            GroundTimeError::AmbiguousAliasResolution { dimension, .. } => *dimension,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failed_dimension() {
        let err = GroundTimeError::UnknownStationForMovement {
            operation: Operation::Transit,
            aircraft_group: AircraftGroup::A321A320,
            movement: Movement::IntlIntl,
            station: StationKey::Lhr,
        };
        assert_eq!(
            err.to_string(),
            "unknown station 'LHR' for TRANSIT MGT, \
             aircraft group 'A321/A320', movement 'INTL-INTL'"
        );
        assert_eq!(err.dimension(), "station");
    }

    #[test]
    fn test_ambiguity_lists_candidates() {
        let err = GroundTimeError::AmbiguousAliasResolution {
            dimension: "aircraft_group",
            token: "B787".into(),
            candidates: vec!["B777-368/B787-10".into(), "A330/B787-9".into()],
        };
        assert_eq!(
            err.to_string(),
            "ambiguous aircraft_group 'B787': matches B777-368/B787-10, A330/B787-9"
        );
        assert_eq!(err.dimension(), "aircraft_group");
    }
}
