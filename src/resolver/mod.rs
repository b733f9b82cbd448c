//! Resolvers over the reference tables.
//!
//! Each resolver holds a shared handle to one immutable edition of the
//! tables and answers one kind of query:
//!
//! - [`MgtResolver`]: minimum ground time with the overlay chain and trace
//! - [`BreakdownResolver`]: itemized activity breakdown
//! - [`DeliveryResolver`]: delivery hours before scheduled departure
//! - [`MixedFlightsResolver`]: informational mixed-flights tables
//!
//! Resolvers never call each other. Every call is a pure function of the
//! query and the tables, so resolvers can be cloned and shared across
//! threads freely.

mod breakdown;
mod delivery;
mod mgt;
mod mixed;
pub mod overlay;

#[cfg(test)]
mod proptest_mgt;

pub use breakdown::BreakdownResolver;
pub use delivery::DeliveryResolver;
pub use mgt::{MgtQuery, MgtResolver, MIXED_FLIGHTS_NOTE};
pub use mixed::MixedFlightsResolver;
pub use overlay::{OverlayChain, OverlayRule};
