//! Resolver result records.
//!
//! Results are created fresh per query, own all their data and hold no
//! reference back into the reference tables.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{
    format_hhmm, ActivityItem, AircraftGroup, GroundTimeBasis, MixedFlightSector, Movement,
    Operation, StationKey,
};

/// One entry of the MGT rule trace.
///
/// Adjustment entries record the running value before and after the rule
/// fired; note entries are informational and carry no minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTraceEntry {
    /// Stable rule identifier (e.g. `"local_towing"`).
    pub rule: String,
    /// Human-readable description.
    pub message: String,
    /// Running value before the rule fired.
    pub from_minutes: Option<u32>,
    /// Running value after the rule fired.
    pub to_minutes: Option<u32>,
}

impl RuleTraceEntry {
    pub fn adjustment(
        rule: impl Into<String>,
        message: impl Into<String>,
        from_minutes: u32,
        to_minutes: u32,
    ) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
            from_minutes: Some(from_minutes),
            to_minutes: Some(to_minutes),
        }
    }

    pub fn note(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
            from_minutes: None,
            to_minutes: None,
        }
    }

    pub fn is_note(&self) -> bool {
        self.to_minutes.is_none()
    }
}

impl fmt::Display for RuleTraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.from_minutes, self.to_minutes) {
            (Some(from), Some(to)) => write!(
                f,
                "{} ({} -> {})",
                self.message,
                format_hhmm(from),
                format_hhmm(to)
            ),
            _ => f.write_str(&self.message),
        }
    }
}

/// Minimum ground time for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MgtResult {
    pub operation: Operation,
    pub aircraft_group: AircraftGroup,
    pub movement: Movement,
    pub station_key: StationKey,
    /// Table value after SA-variant selection (minutes).
    pub base_duration: u32,
    /// Value after all overlay rules (minutes). Never below `base_duration`.
    pub adjusted_duration: u32,
    /// Overlay rules that fired, in evaluation order, then notes.
    pub rule_trace: Vec<RuleTraceEntry>,
}

impl MgtResult {
    pub fn base_hhmm(&self) -> String {
        format_hhmm(self.base_duration)
    }

    pub fn adjusted_hhmm(&self) -> String {
        format_hhmm(self.adjusted_duration)
    }

    /// Trace entries that changed the running value.
    pub fn applied_rules(&self) -> impl Iterator<Item = &RuleTraceEntry> {
        self.rule_trace.iter().filter(|e| !e.is_note())
    }

    /// Whether a rule with the given identifier fired.
    pub fn rule_fired(&self, rule: &str) -> bool {
        self.applied_rules().any(|e| e.rule == rule)
    }

    pub fn was_adjusted(&self) -> bool {
        self.adjusted_duration != self.base_duration
    }
}

/// Itemized ground time for an aircraft / operation / movement triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityBreakdownResult {
    pub aircraft_group: AircraftGroup,
    pub operation: Operation,
    pub movement: Movement,
    /// Activities in manual order.
    pub activities: Vec<ActivityItem>,
    /// Total (turnaround) or minimum (transit) ground time in minutes.
    /// `None` when the manual prints `-` for this movement.
    pub total_or_minimum_ground_time: Option<f64>,
    /// Column the ground time was read from.
    pub ground_time_basis: GroundTimeBasis,
    pub assumptions: Vec<String>,
    pub notes: Vec<String>,
}

impl ActivityBreakdownResult {
    pub fn activity(&self, name: &str) -> Option<&ActivityItem> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn applicable_activities(&self) -> impl Iterator<Item = &ActivityItem> {
        self.activities.iter().filter(|a| a.value.is_applicable())
    }

    /// Whether every activity is authored as not applicable.
    pub fn is_not_applicable(&self) -> bool {
        self.total_or_minimum_ground_time.is_none()
            && self.activities.iter().all(|a| !a.value.is_applicable())
    }
}

/// Mixed-flights MGT for one sector and aircraft group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixedFlightMgtResult {
    pub sector: MixedFlightSector,
    pub aircraft_group: AircraftGroup,
    /// Standard duration (minutes).
    pub standard_minutes: u32,
    /// Duration when the outbound leg goes to the USA (minutes).
    pub usa_minutes: Option<u32>,
}

impl MixedFlightMgtResult {
    /// Applicable duration for the given outbound destination kind.
    pub fn minutes_for(&self, usa_bound: bool) -> u32 {
        match (usa_bound, self.usa_minutes) {
            (true, Some(usa)) => usa,
            _ => self.standard_minutes,
        }
    }
}

/// Combined mixed-flights activity breakdown for one aircraft group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedMixedBreakdownResult {
    pub aircraft_group: AircraftGroup,
    pub activities: Vec<ActivityItem>,
    pub minimum_ground_time: f64,
    pub assumptions: Vec<String>,
}
