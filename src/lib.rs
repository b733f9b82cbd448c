//! Ground-handling minimum ground time and activity breakdown rules.
//!
//! Deterministic lookup-and-overlay evaluation over the ramp-handling
//! tables of a ground operations manual. Given an aircraft group, an
//! operation, a movement and a station, the engine returns the minimum
//! ground time together with a trace of every overlay rule that fired,
//! and decomposes ground time into named handling activities.
//!
//! # Modules
//!
//! - **`models`**: Canonical keys (`AircraftGroup`, `Operation`, `Movement`,
//!   `StationKey`, `Destination`), table cells, activity values, result records
//! - **`tables`**: Immutable reference tables (`ReferenceTables`), the
//!   authored manual edition and the overlay configuration
//! - **`resolver`**: MGT resolver with its overlay chain, activity breakdown,
//!   delivery-before-STD and mixed-flights resolvers
//! - **`alias`**: Free-form token normalization onto canonical keys
//! - **`validation`**: Reference table integrity checks
//! - **`error`**: Lookup and normalization errors
//!
//! # Example
//!
//! ```
//! use ground_time::models::{AircraftGroup, Movement, Operation, StationKey};
//! use ground_time::resolver::{MgtQuery, MgtResolver};
//! use ground_time::tables::ReferenceTables;
//!
//! let resolver = MgtResolver::new(ReferenceTables::shared_standard());
//! let query = MgtQuery::new(
//!     Operation::Turnaround,
//!     AircraftGroup::A321A320,
//!     Movement::DomIntl,
//!     StationKey::Jed,
//! )
//! .with_local_towing(true);
//!
//! let result = resolver.resolve_mgt(&query).unwrap();
//! assert_eq!(result.base_duration, 50);
//! assert_eq!(result.adjusted_duration, 70);
//! assert!(result.rule_fired("local_towing"));
//! ```
//!
//! # Concurrency
//!
//! Tables are built once and never mutated. Resolvers share them through an
//! `Arc` and every call is a pure function, so any number of threads may
//! query concurrently without locking.

pub mod alias;
pub mod error;
pub mod models;
pub mod resolver;
pub mod tables;
pub mod validation;

pub use alias::{AliasResolver, Resolution};
pub use error::{GroundTimeError, Result};
pub use resolver::{
    BreakdownResolver, DeliveryResolver, MgtQuery, MgtResolver, MixedFlightsResolver,
};
pub use tables::ReferenceTables;
