//! Alias and normalization layer.
//!
//! Maps free-form tokens (aircraft family mentions, movement phrases,
//! station names, destination names) onto canonical keys. Every lookup
//! ends in exactly one of three outcomes:
//!
//! - `Ok(Resolution::Resolved(key))`: one canonical key matches
//! - `Ok(Resolution::Unresolved)`: nothing matches
//! - `Err(AmbiguousAliasResolution)`: several keys match equally well
//!
//! The resolver never picks among equally plausible keys.
//!
//! # Normalization
//!
//! Tokens are upper-cased and every run of non-alphanumeric characters
//! becomes a single space, so `"Jed-T1"`, `"JED T1"` and `"jed_t1"` are the
//! same token. Aircraft tokens additionally drop manufacturer words.

use std::collections::BTreeMap;
use std::fmt::Display;

use log::{debug, trace};

use crate::error::{GroundTimeError, Result};
use crate::models::{AircraftGroup, Destination, Movement, Operation, StationKey};
use crate::tables::ReferenceTables;

const MANUFACTURER_WORDS: [&str; 2] = ["BOEING", "AIRBUS"];

/// Words ignored in movement phrases.
const MOVEMENT_FILLER: [&str; 5] = ["TO", "FLIGHT", "FLIGHTS", "MOVEMENT", "SECTOR"];

const OPERATION_ALIASES: &[(&str, Operation)] = &[
    ("TURNAROUND", Operation::Turnaround),
    ("TURN AROUND", Operation::Turnaround),
    ("TURNAROUNDS", Operation::Turnaround),
    ("TRANSIT", Operation::Transit),
    ("TRANSITS", Operation::Transit),
];

const STATION_ALIASES: &[(&str, StationKey)] = &[
    ("JEDDAH", StationKey::Jed),
    ("JED T1", StationKey::Jed),
    ("RIYADH", StationKey::Ruh),
    ("DAMMAM", StationKey::Dmm),
    ("MADINAH", StationKey::Med),
    ("MEDINA", StationKey::Med),
    ("HEATHROW", StationKey::Lhr),
    ("LONDON HEATHROW", StationKey::Lhr),
    ("LONDON", StationKey::Lhr),
    ("LONDON", StationKey::Uk),
    ("UNITED KINGDOM", StationKey::Uk),
    ("ABHA", StationKey::AhbTuu),
    ("TABUK", StationKey::AhbTuu),
    ("AHB", StationKey::AhbTuu),
    ("TUU", StationKey::AhbTuu),
    ("OTHER DOMESTIC", StationKey::OtherDomStn),
    ("OTHER DOMESTIC STATION", StationKey::OtherDomStn),
    ("OTHER DOMESTIC STATIONS", StationKey::OtherDomStn),
    ("INTERNATIONAL", StationKey::IntStns),
    ("INTERNATIONAL STATION", StationKey::IntStns),
    ("INTERNATIONAL STATIONS", StationKey::IntStns),
    ("LONG HAUL", StationKey::LongHaulStn),
    ("LONG HAUL STATION", StationKey::LongHaulStn),
    ("LONG HAUL STATIONS", StationKey::LongHaulStn),
];

/// Place names for destination codes. Only codes some overlay knows about
/// are registered.
const DESTINATION_NAMES: &[(&str, &str)] = &[
    ("UNITED STATES", "USA"),
    ("UNITED STATES OF AMERICA", "USA"),
    ("US", "USA"),
    ("AMERICA", "USA"),
    ("KANO", "KAN"),
    ("SHARM EL SHEIKH", "SSH"),
    ("SHARM", "SSH"),
    ("NEW YORK", "JFK"),
    ("LOS ANGELES", "LAX"),
    ("WASHINGTON", "IAD"),
    ("DULLES", "IAD"),
    ("TORONTO", "YYZ"),
    ("MANILA", "MNL"),
    ("GUANGZHOU", "CAN"),
    ("KUALA LUMPUR", "KUL"),
    ("JAKARTA", "CGK"),
    ("SINGAPORE", "SIN"),
];

/// Outcome of a non-ambiguous lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    Resolved(T),
    Unresolved,
}

impl<T> Resolution<T> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Resolution::Resolved(value) => Some(value),
            Resolution::Unresolved => None,
        }
    }
}

/// Upper-cases and collapses separators into single spaces.
pub fn normalize_token(token: &str) -> String {
    token
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_ascii_uppercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize_aircraft(token: &str) -> String {
    normalize_token(token)
        .split(' ')
        .filter(|w| !MANUFACTURER_WORDS.contains(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Exact alias table: normalized alias → every key it names.
#[derive(Debug, Clone)]
struct AliasTable<T> {
    dimension: &'static str,
    entries: BTreeMap<String, Vec<T>>,
}

impl<T: Clone + PartialEq + Display> AliasTable<T> {
    fn new(dimension: &'static str) -> Self {
        Self {
            dimension,
            entries: BTreeMap::new(),
        }
    }

    fn insert(&mut self, alias: &str, key: T) {
        let keys = self.entries.entry(normalize_token(alias)).or_default();
        if !keys.contains(&key) {
            keys.push(key);
        }
    }

    fn lookup(&self, token: &str, normalized: &str) -> Result<Resolution<T>> {
        let candidates = self.entries.get(normalized).map(Vec::as_slice).unwrap_or(&[]);
        pick(self.dimension, token, candidates.to_vec())
    }
}

/// Turns a candidate list into a resolution, refusing to choose.
fn pick<T: Display>(
    dimension: &'static str,
    token: &str,
    candidates: Vec<T>,
) -> Result<Resolution<T>> {
    match <[T; 1]>::try_from(candidates) {
        Ok([key]) => Ok(Resolution::Resolved(key)),
        Err(candidates) if candidates.is_empty() => {
            trace!("{dimension} '{token}' unresolved");
            Ok(Resolution::Unresolved)
        }
        Err(candidates) => {
            let mut labels: Vec<String> = candidates.iter().map(ToString::to_string).collect();
            labels.sort();
            debug!("{dimension} '{token}' is ambiguous: {labels:?}");
            Err(GroundTimeError::AmbiguousAliasResolution {
                dimension,
                token: token.to_string(),
                candidates: labels,
            })
        }
    }
}

/// Immutable alias tables for one edition of the reference tables.
#[derive(Debug, Clone)]
pub struct AliasResolver {
    operations: AliasTable<Operation>,
    stations: AliasTable<StationKey>,
    destinations: AliasTable<Destination>,
}

impl AliasResolver {
    /// Builds the alias tables. Destination aliases follow the codes the
    /// tables' overlay configuration reacts to.
    pub fn new(tables: &ReferenceTables) -> Self {
        let mut operations = AliasTable::new("operation");
        for op in Operation::ALL {
            operations.insert(op.label(), op);
        }
        for (alias, op) in OPERATION_ALIASES {
            operations.insert(alias, *op);
        }

        let mut stations = AliasTable::new("station");
        for station in StationKey::ALL {
            stations.insert(station.label(), station);
        }
        for (alias, station) in STATION_ALIASES {
            stations.insert(alias, *station);
        }

        let mut destinations = AliasTable::new("destination");
        let known = tables.overlays().known_destinations();
        for code in &known {
            destinations.insert(code, Destination::new(code));
        }
        for (name, code) in DESTINATION_NAMES {
            if known.contains(code) {
                destinations.insert(name, Destination::new(code));
            }
        }

        Self {
            operations,
            stations,
            destinations,
        }
    }

    /// Alias tables for the standard manual edition.
    pub fn standard() -> Self {
        Self::new(&ReferenceTables::standard())
    }

    /// Resolves an aircraft family mention.
    ///
    /// Stages, first non-empty wins:
    /// 1. the whole group label (`"A321/A320"`)
    /// 2. a member type exactly (`"A320"`, `"B787-9"`)
    /// 3. a member type containing the token (`"757"`, `"777-368"`)
    ///
    /// A stage matching more than one group is ambiguous.
    pub fn resolve_aircraft_group(&self, token: &str) -> Result<Resolution<AircraftGroup>> {
        let normalized = normalize_aircraft(token);
        if normalized.is_empty() {
            return Ok(Resolution::Unresolved);
        }

        let by_label: Vec<AircraftGroup> = AircraftGroup::ALL
            .into_iter()
            .filter(|g| normalize_aircraft(g.label()) == normalized)
            .collect();
        if !by_label.is_empty() {
            return pick("aircraft_group", token, by_label);
        }

        let member_matches = |exact: bool| -> Vec<AircraftGroup> {
            AircraftGroup::ALL
                .into_iter()
                .filter(|g| {
                    g.members().iter().any(|m| {
                        let m = normalize_aircraft(m);
                        if exact {
                            m == normalized
                        } else {
                            m.contains(normalized.as_str())
                        }
                    })
                })
                .collect()
        };

        let exact = member_matches(true);
        if !exact.is_empty() {
            return pick("aircraft_group", token, exact);
        }
        // Partial family numbers need at least three characters.
        if normalized.len() < 3 {
            return Ok(Resolution::Unresolved);
        }
        pick("aircraft_group", token, member_matches(false))
    }

    /// Resolves a movement phrase such as `"domestic to international"`,
    /// `"INT/DOM"` or `"intl-intl"`.
    ///
    /// The phrase must name exactly two legs, inbound first.
    pub fn resolve_movement(&self, token: &str) -> Result<Resolution<Movement>> {
        let normalized = normalize_token(token);
        let legs: Option<Vec<bool>> = normalized
            .split(' ')
            .filter(|w| !w.is_empty() && !MOVEMENT_FILLER.contains(w))
            .map(|w| match w {
                "DOM" | "DOMESTIC" | "D" => Some(true),
                "INT" | "INTL" | "INTERNATIONAL" | "I" => Some(false),
                _ => None,
            })
            .collect();

        let resolution = match legs.as_deref() {
            Some([inbound, outbound]) => {
                Resolution::Resolved(Movement::from_legs(*inbound, *outbound))
            }
            _ => Resolution::Unresolved,
        };
        trace!("movement '{token}' -> {resolution:?}");
        Ok(resolution)
    }

    pub fn resolve_operation(&self, token: &str) -> Result<Resolution<Operation>> {
        self.operations.lookup(token, &normalize_token(token))
    }

    /// Resolves a station code or name; `"LONDON"` is ambiguous between
    /// `LHR` and `UK`.
    pub fn resolve_station(&self, token: &str) -> Result<Resolution<StationKey>> {
        self.stations.lookup(token, &normalize_token(token))
    }

    /// Resolves a destination code or place name.
    pub fn resolve_destination(&self, token: &str) -> Result<Resolution<Destination>> {
        self.destinations.lookup(token, &normalize_token(token))
    }
}

impl Default for AliasResolver {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{DestinationFloor, OverlayConfig};

    use AircraftGroup::{A321A320, A330B787, B757, B777A330, B777B787};
    use Resolution::{Resolved, Unresolved};

    fn aliases() -> AliasResolver {
        AliasResolver::standard()
    }

    fn ambiguous_candidates<T: std::fmt::Debug>(result: Result<Resolution<T>>) -> Vec<String> {
        match result {
            Err(GroundTimeError::AmbiguousAliasResolution { candidates, .. }) => candidates,
            other => panic!("expected ambiguity, got {other:?}"),
        }
    }

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("  jed-t1 "), "JED T1");
        assert_eq!(normalize_token("Intl/Dom"), "INTL DOM");
        assert_eq!(normalize_token("--"), "");
    }

    #[test]
    fn test_aircraft_exact_labels_and_members() {
        let a = aliases();
        assert_eq!(a.resolve_aircraft_group("A321/A320").unwrap(), Resolved(A321A320));
        assert_eq!(a.resolve_aircraft_group("a320").unwrap(), Resolved(A321A320));
        assert_eq!(a.resolve_aircraft_group("Airbus A321").unwrap(), Resolved(A321A320));
        assert_eq!(a.resolve_aircraft_group("B787-9").unwrap(), Resolved(A330B787));
        assert_eq!(a.resolve_aircraft_group("B787-10").unwrap(), Resolved(B777B787));
        assert_eq!(a.resolve_aircraft_group("b777-268").unwrap(), Resolved(B777A330));
    }

    #[test]
    fn test_aircraft_partial_family_numbers() {
        let a = aliases();
        assert_eq!(a.resolve_aircraft_group("757").unwrap(), Resolved(B757));
        assert_eq!(a.resolve_aircraft_group("Boeing 757").unwrap(), Resolved(B757));
        assert_eq!(a.resolve_aircraft_group("777-368").unwrap(), Resolved(B777B787));
        assert_eq!(a.resolve_aircraft_group("747").unwrap(), Unresolved);
        assert_eq!(a.resolve_aircraft_group("7").unwrap(), Unresolved);
        assert_eq!(a.resolve_aircraft_group("").unwrap(), Unresolved);
    }

    #[test]
    fn test_aircraft_ambiguity_is_surfaced() {
        let a = aliases();
        assert_eq!(
            ambiguous_candidates(a.resolve_aircraft_group("B787")),
            vec!["A330/B787-9", "B777-368/B787-10"]
        );
        assert_eq!(
            ambiguous_candidates(a.resolve_aircraft_group("A330")),
            vec!["A330/B787-9", "B777-268/A330"]
        );
        assert_eq!(
            ambiguous_candidates(a.resolve_aircraft_group("Boeing 777")),
            vec!["B777-268/A330", "B777-368/B787-10"]
        );
    }

    #[test]
    fn test_ambiguity_error_names_dimension() {
        let err = aliases().resolve_aircraft_group("787").unwrap_err();
        assert_eq!(err.dimension(), "aircraft_group");
        assert_eq!(
            err.to_string(),
            "ambiguous aircraft_group '787': matches A330/B787-9, B777-368/B787-10"
        );
    }

    #[test]
    fn test_movement_phrases() {
        let a = aliases();
        assert_eq!(a.resolve_movement("DOM-DOM").unwrap(), Resolved(Movement::DomDom));
        assert_eq!(
            a.resolve_movement("domestic to international").unwrap(),
            Resolved(Movement::DomIntl)
        );
        assert_eq!(a.resolve_movement("INT/DOM").unwrap(), Resolved(Movement::IntlDom));
        assert_eq!(a.resolve_movement("intl-intl").unwrap(), Resolved(Movement::IntlIntl));
        assert_eq!(a.resolve_movement("domestic").unwrap(), Unresolved);
        assert_eq!(a.resolve_movement("dom to cargo").unwrap(), Unresolved);
        assert_eq!(a.resolve_movement("dom dom dom").unwrap(), Unresolved);
    }

    #[test]
    fn test_operations() {
        let a = aliases();
        assert_eq!(a.resolve_operation("turn around").unwrap(), Resolved(Operation::Turnaround));
        assert_eq!(a.resolve_operation("TURNAROUND").unwrap(), Resolved(Operation::Turnaround));
        assert_eq!(a.resolve_operation("Transit").unwrap(), Resolved(Operation::Transit));
        assert_eq!(a.resolve_operation("ferry").unwrap(), Unresolved);
    }

    #[test]
    fn test_stations() {
        let a = aliases();
        assert_eq!(a.resolve_station("Jeddah").unwrap(), Resolved(StationKey::Jed));
        assert_eq!(a.resolve_station("JED-T1").unwrap(), Resolved(StationKey::Jed));
        assert_eq!(a.resolve_station("heathrow").unwrap(), Resolved(StationKey::Lhr));
        assert_eq!(a.resolve_station("Abha").unwrap(), Resolved(StationKey::AhbTuu));
        assert_eq!(a.resolve_station("other domestic").unwrap(), Resolved(StationKey::OtherDomStn));
        assert_eq!(a.resolve_station("OTHER_DOM_STN").unwrap(), Resolved(StationKey::OtherDomStn));
        assert_eq!(a.resolve_station("long-haul").unwrap(), Resolved(StationKey::LongHaulStn));
        assert_eq!(a.resolve_station("Cairo").unwrap(), Unresolved);
    }

    #[test]
    fn test_london_is_ambiguous() {
        assert_eq!(
            ambiguous_candidates(aliases().resolve_station("London")),
            vec!["LHR", "UK"]
        );
    }

    #[test]
    fn test_destinations() {
        let a = aliases();
        assert_eq!(
            a.resolve_destination("United States").unwrap(),
            Resolved(Destination::new("USA"))
        );
        assert_eq!(a.resolve_destination("kano").unwrap(), Resolved(Destination::new("KAN")));
        assert_eq!(
            a.resolve_destination("Sharm El-Sheikh").unwrap(),
            Resolved(Destination::new("SSH"))
        );
        assert_eq!(a.resolve_destination("jfk").unwrap(), Resolved(Destination::new("JFK")));
        assert_eq!(
            a.resolve_destination("Kuala Lumpur").unwrap(),
            Resolved(Destination::new("KUL"))
        );
        assert_eq!(a.resolve_destination("Paris").unwrap(), Unresolved);
    }

    #[test]
    fn test_destinations_follow_overlay_config() {
        let tables = ReferenceTables::builder("kano only")
            .with_overlays(
                OverlayConfig::empty()
                    .with_floor(DestinationFloor::new("kan_floor", 120).with_destination("KAN")),
            )
            .build();
        let a = AliasResolver::new(&tables);
        assert_eq!(a.resolve_destination("Kano").unwrap(), Resolved(Destination::new("KAN")));
        assert_eq!(a.resolve_destination("United States").unwrap(), Unresolved);
        assert_eq!(a.resolve_destination("USA").unwrap(), Unresolved);
    }

    #[test]
    fn test_pick_outcomes() {
        assert_eq!(pick("station", "x", Vec::<StationKey>::new()).unwrap(), Unresolved);
        assert_eq!(pick("station", "x", vec![StationKey::Jed]).unwrap(), Resolved(StationKey::Jed));
        assert_eq!(
            ambiguous_candidates(pick("station", "x", vec![StationKey::Uk, StationKey::Lhr])),
            vec!["LHR", "UK"]
        );
    }

    #[test]
    fn test_resolution_helpers() {
        assert!(Resolved(1).is_resolved());
        assert_eq!(Resolved(1).into_option(), Some(1));
        assert_eq!(Resolution::<u8>::Unresolved.into_option(), None);
    }
}
