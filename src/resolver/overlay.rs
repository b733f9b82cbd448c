//! MGT overlay rules and the chain that applies them.
//!
//! After the base cell is selected, overlay rules run in a fixed order:
//! 1. Local towing (adds a fixed amount).
//! 2. Turnaround destination floors, each evaluated independently.
//! 3. Long-haul elevation to the row's `LONG_HAUL_STN` value.
//!
//! Every rule sees the running value left by the previous ones and may only
//! raise it. A rule that fires appends one trace entry.

use std::fmt::Debug;
use std::sync::Arc;

use log::trace;

use crate::models::{Destination, Movement, Operation, RuleTraceEntry, StationKey};
use crate::tables::{DestinationFloor, MgtRow, OverlayConfig};

/// What an overlay rule sees of the query.
#[derive(Debug, Clone, Copy)]
pub struct OverlayContext<'a> {
    pub operation: Operation,
    pub movement: Movement,
    pub station: StationKey,
    pub destination: Option<&'a Destination>,
    pub is_security_alert_station: bool,
    pub apply_local_towing_rule: bool,
    /// All station cells of the selected (group, movement) row.
    pub row: &'a MgtRow,
}

/// Value proposed by a rule that fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjustment {
    /// Proposed running value (minutes).
    pub minutes: u32,
    /// Trace message.
    pub message: String,
}

/// A rule that may raise the running MGT value.
pub trait OverlayRule: Send + Sync + Debug {
    /// Identifier recorded in the trace.
    fn id(&self) -> &str;

    /// Returns an adjustment when the rule fires and raises `current`.
    fn apply(&self, ctx: &OverlayContext<'_>, current: u32) -> Option<Adjustment>;
}

/// Adds a fixed towing time for mixed-direction movements at towing stations.
#[derive(Debug, Clone)]
pub struct LocalTowing {
    pub minutes: u32,
    pub stations: Vec<StationKey>,
}

impl OverlayRule for LocalTowing {
    fn id(&self) -> &str {
        "local_towing"
    }

    fn apply(&self, ctx: &OverlayContext<'_>, current: u32) -> Option<Adjustment> {
        if !ctx.apply_local_towing_rule
            || !ctx.movement.is_mixed_direction()
            || !self.stations.contains(&ctx.station)
            || self.minutes == 0
        {
            return None;
        }
        let stations: Vec<&str> = self.stations.iter().map(|s| s.label()).collect();
        Some(Adjustment {
            minutes: current.saturating_add(self.minutes),
            message: format!(
                "Local towing rule: +{} minutes at {} for DOM-INTL or INTL-DOM",
                self.minutes,
                stations.join("/")
            ),
        })
    }
}

/// Raises a turnaround to a minimum when the destination matches.
#[derive(Debug, Clone)]
pub struct DestinationFloorRule {
    pub floor: DestinationFloor,
}

impl OverlayRule for DestinationFloorRule {
    fn id(&self) -> &str {
        &self.floor.id
    }

    fn apply(&self, ctx: &OverlayContext<'_>, current: u32) -> Option<Adjustment> {
        if ctx.operation != Operation::Turnaround {
            return None;
        }
        let destination = ctx.destination?;
        if !self.floor.matches(destination) || current >= self.floor.minutes {
            return None;
        }
        Some(Adjustment {
            minutes: self.floor.minutes,
            message: self.floor.label.clone(),
        })
    }
}

/// Raises a turnaround to the row's `LONG_HAUL_STN` value for long-haul
/// destinations.
#[derive(Debug, Clone)]
pub struct LongHaulElevation {
    pub stations: Vec<String>,
}

impl OverlayRule for LongHaulElevation {
    fn id(&self) -> &str {
        "long_haul_station"
    }

    fn apply(&self, ctx: &OverlayContext<'_>, current: u32) -> Option<Adjustment> {
        if ctx.operation != Operation::Turnaround {
            return None;
        }
        let destination = ctx.destination?;
        if !self.stations.iter().any(|s| s == destination.code()) {
            return None;
        }
        let long_haul = ctx
            .row
            .get(&StationKey::LongHaulStn)?
            .select(ctx.is_security_alert_station);
        if current >= long_haul {
            return None;
        }
        Some(Adjustment {
            minutes: long_haul,
            message: format!(
                "Long-haul station category applied (LONG_HAUL_STN) for {destination}"
            ),
        })
    }
}

/// Ordered overlay rules.
#[derive(Debug, Clone, Default)]
pub struct OverlayChain {
    rules: Vec<Arc<dyn OverlayRule>>,
}

impl OverlayChain {
    /// An empty chain (base value passes through).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the standard rule order from configuration.
    pub fn from_config(config: &OverlayConfig) -> Self {
        let chain = Self::new().with_rule(LocalTowing {
            minutes: config.towing_minutes,
            stations: config.towing_stations.iter().copied().collect(),
        });
        let chain = config
            .destination_floors
            .iter()
            .fold(chain, |c, floor| {
                c.with_rule(DestinationFloorRule {
                    floor: floor.clone(),
                })
            });
        chain.with_rule(LongHaulElevation {
            stations: config.long_haul_stations.iter().cloned().collect(),
        })
    }

    /// Appends a rule at the end of the chain.
    pub fn with_rule<R: OverlayRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    pub fn rule_ids(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Runs every rule in order, returning the final value and the trace.
    pub fn apply(&self, ctx: &OverlayContext<'_>, base: u32) -> (u32, Vec<RuleTraceEntry>) {
        let mut adjusted = base;
        let mut entries = Vec::new();

        for rule in &self.rules {
            let Some(adjustment) = rule.apply(ctx, adjusted) else {
                trace!("overlay {} skipped at {} min", rule.id(), adjusted);
                continue;
            };
            // Rules may only raise the running value.
            let next = adjusted.max(adjustment.minutes);
            trace!("overlay {} fired: {} -> {} min", rule.id(), adjusted, next);
            entries.push(RuleTraceEntry::adjustment(
                rule.id(),
                adjustment.message,
                adjusted,
                next,
            ));
            adjusted = next;
        }

        (adjusted, entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MgtCell;

    fn row() -> MgtRow {
        MgtRow::from([
            (StationKey::Jed, MgtCell::minutes(95)),
            (StationKey::LongHaulStn, MgtCell::with_security_alert(90, 105)),
        ])
    }

    fn ctx<'a>(row: &'a MgtRow, destination: Option<&'a Destination>) -> OverlayContext<'a> {
        OverlayContext {
            operation: Operation::Turnaround,
            movement: Movement::IntlIntl,
            station: StationKey::Jed,
            destination,
            is_security_alert_station: false,
            apply_local_towing_rule: false,
            row,
        }
    }

    #[test]
    fn test_chain_order_from_config() {
        let chain = OverlayChain::from_config(&OverlayConfig::default());
        assert_eq!(
            chain.rule_ids(),
            vec![
                "local_towing",
                "usa_floor",
                "usa_stations_floor",
                "kan_floor",
                "ssh_floor",
                "long_haul_station"
            ]
        );
    }

    #[test]
    fn test_towing_requires_flag_movement_and_station() {
        let row = row();
        let rule = LocalTowing {
            minutes: 20,
            stations: vec![StationKey::Jed, StationKey::Ruh],
        };
        let mut c = ctx(&row, None);
        assert_eq!(rule.apply(&c, 50), None);

        c.apply_local_towing_rule = true;
        assert_eq!(rule.apply(&c, 50), None); // INTL-INTL

        c.movement = Movement::DomIntl;
        assert_eq!(rule.apply(&c, 50).map(|a| a.minutes), Some(70));

        c.station = StationKey::Dmm;
        assert_eq!(rule.apply(&c, 50), None);
    }

    #[test]
    fn test_floor_only_raises() {
        let row = row();
        let rule = DestinationFloorRule {
            floor: DestinationFloor::new("ssh_floor", 75).with_destination("SSH"),
        };
        let ssh = Destination::new("SSH");
        let c = ctx(&row, Some(&ssh));
        assert_eq!(rule.apply(&c, 65).map(|a| a.minutes), Some(75));
        assert_eq!(rule.apply(&c, 80), None);

        let transit = OverlayContext {
            operation: Operation::Transit,
            ..c
        };
        assert_eq!(rule.apply(&transit, 65), None);
    }

    #[test]
    fn test_long_haul_uses_sa_variant() {
        let row = row();
        let rule = LongHaulElevation {
            stations: vec!["JFK".into()],
        };
        let jfk = Destination::new("JFK");
        let mut c = ctx(&row, Some(&jfk));
        assert_eq!(rule.apply(&c, 85).map(|a| a.minutes), Some(90));

        c.is_security_alert_station = true;
        assert_eq!(rule.apply(&c, 85).map(|a| a.minutes), Some(105));
        assert_eq!(rule.apply(&c, 110), None);
    }

    #[test]
    fn test_long_haul_is_turnaround_only() {
        let row = row();
        let rule = LongHaulElevation {
            stations: vec!["MNL".into()],
        };
        let mnl = Destination::new("MNL");
        let transit = OverlayContext {
            operation: Operation::Transit,
            ..ctx(&row, Some(&mnl))
        };
        assert_eq!(rule.apply(&transit, 60), None);
    }

    #[test]
    fn test_chain_records_from_and_to() {
        let row = row();
        let usa = Destination::new("USA");
        let c = ctx(&row, Some(&usa));
        let chain = OverlayChain::from_config(&OverlayConfig::default());

        let (adjusted, trace) = chain.apply(&c, 95);
        assert_eq!(adjusted, 170);
        assert_eq!(trace.len(), 1);
        assert_eq!(trace[0].rule, "usa_floor");
        assert_eq!(trace[0].from_minutes, Some(95));
        assert_eq!(trace[0].to_minutes, Some(170));
    }

    #[test]
    fn test_empty_chain_passes_base_through() {
        let row = row();
        let c = ctx(&row, None);
        assert_eq!(OverlayChain::new().apply(&c, 42), (42, Vec::new()));
    }
}
