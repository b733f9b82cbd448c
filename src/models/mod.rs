//! Ground-handling domain models.
//!
//! Canonical keys, table cells, activity values and the result records the
//! resolvers return.
//!
//! # Dimensions
//!
//! | Key | Values |
//! |-----|--------|
//! | `AircraftGroup` | B777-368/B787-10, A330/B787-9, A321/A320, B757, B777-268/A330 |
//! | `Operation` | TURNAROUND, TRANSIT |
//! | `Movement` | DOM-DOM, DOM-INTL, INTL-DOM, INTL-INTL |
//! | `StationKey` | JED, RUH, DMM, MED, LHR, OTHER_DOM_STN, INT_STNS, LONG_HAUL_STN, AHB_TUU, UK |

mod activity;
mod cell;
mod keys;
mod result;

pub use activity::{ActivityItem, ActivityValue, Footnote, GroundTimeBasis};
pub use cell::{format_hhmm, parse_hhmm, MgtCell};
pub use keys::{AircraftGroup, Destination, MixedFlightSector, Movement, Operation, StationKey};
pub use result::{
    ActivityBreakdownResult, CombinedMixedBreakdownResult, MgtResult, MixedFlightMgtResult,
    RuleTraceEntry,
};
