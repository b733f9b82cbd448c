//! Delivery-before-S.T.D resolver.

use std::sync::Arc;

use log::debug;

use crate::error::{GroundTimeError, Result};
use crate::models::AircraftGroup;
use crate::tables::ReferenceTables;

/// Resolves delivery hours before departure.
#[derive(Debug, Clone)]
pub struct DeliveryResolver {
    tables: Arc<ReferenceTables>,
}

impl DeliveryResolver {
    /// Resolver over one shared edition.
    pub fn new(tables: Arc<ReferenceTables>) -> Self {
        Self { tables }
    }

    /// Hours before scheduled departure the aircraft must reach the gate.
    ///
    /// Looks up the group's canonical label first, then the label the
    /// manual authored its row under, if one is recorded.
    pub fn resolve_delivery_hours(&self, aircraft_group: AircraftGroup) -> Result<f64> {
        let delivery = self.tables.delivery();
        let hours = delivery.hours(aircraft_group.label()).or_else(|| {
            delivery
                .legacy_label(aircraft_group)
                .and_then(|label| delivery.hours(label))
        });

        match hours {
            Some(hours) => {
                debug!("delivery {aircraft_group}: {hours} h before STD");
                Ok(hours)
            }
            None => Err(GroundTimeError::UnknownAircraftGroupForDelivery { aircraft_group }),
        }
    }
}
