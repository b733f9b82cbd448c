//! Overlay rule constants.
//!
//! The MGT overlay chain (towing, destination floors, long-haul elevation)
//! is driven by this configuration rather than by hard-coded constants, so a
//! revised manual edition only needs a different `OverlayConfig`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{Destination, StationKey};

/// Minutes added by the local towing rule.
pub const LOCAL_TOWING_ADD_MINUTES: u32 = 20;
/// Turnaround floor when the outbound leg goes to the USA (02:50).
pub const TURNAROUND_MIN_TO_USA_MINUTES: u32 = 170;
/// Turnaround floor for the listed USA stations (02:00).
pub const TURNAROUND_MIN_TO_USA_STATIONS_MINUTES: u32 = 120;
/// Turnaround floor to KAN (02:00).
pub const TURNAROUND_MIN_TO_KAN_MINUTES: u32 = 120;
/// Turnaround floor to SSH (01:15), security/baggage identification.
pub const TURNAROUND_MIN_TO_SSH_MINUTES: u32 = 75;

const USA_STATIONS: [&str; 4] = ["JFK", "LAX", "IAD", "YYZ"];
const LONG_HAUL_STATIONS: [&str; 9] = [
    "MNL", "CAN", "YYZ", "IAD", "LAX", "JFK", "KUL", "CGK", "SIN",
];

/// A turnaround minimum that applies when the destination is in `destinations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationFloor {
    /// Rule identifier recorded in the trace.
    pub id: String,
    /// Human-readable description recorded in the trace.
    pub label: String,
    /// Destination codes that trigger the floor.
    pub destinations: BTreeSet<String>,
    /// Floor value (minutes).
    pub minutes: u32,
}

impl DestinationFloor {
    pub fn new(id: impl Into<String>, minutes: u32) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            destinations: BTreeSet::new(),
            minutes,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Adds a destination code (normalized to upper case).
    pub fn with_destination(mut self, code: impl AsRef<str>) -> Self {
        self.destinations
            .insert(Destination::new(code).code().to_string());
        self
    }

    pub fn matches(&self, destination: &Destination) -> bool {
        self.destinations.contains(destination.code())
    }
}

/// Constants for the MGT overlay chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Minutes added by the towing rule.
    pub towing_minutes: u32,
    /// Stations where the towing rule applies.
    pub towing_stations: BTreeSet<StationKey>,
    /// Turnaround floors, evaluated in order.
    pub destination_floors: Vec<DestinationFloor>,
    /// Destinations that elevate to the row's `LONG_HAUL_STN` value.
    pub long_haul_stations: BTreeSet<String>,
}

impl OverlayConfig {
    /// An empty configuration: no towing stations, floors or long-haul set.
    pub fn empty() -> Self {
        Self {
            towing_minutes: 0,
            towing_stations: BTreeSet::new(),
            destination_floors: Vec::new(),
            long_haul_stations: BTreeSet::new(),
        }
    }

    pub fn with_towing_minutes(mut self, minutes: u32) -> Self {
        self.towing_minutes = minutes;
        self
    }

    pub fn with_towing_station(mut self, station: StationKey) -> Self {
        self.towing_stations.insert(station);
        self
    }

    /// Appends a floor at the end of the evaluation order.
    pub fn with_floor(mut self, floor: DestinationFloor) -> Self {
        self.destination_floors.push(floor);
        self
    }

    pub fn with_long_haul_station(mut self, code: impl AsRef<str>) -> Self {
        self.long_haul_stations
            .insert(Destination::new(code).code().to_string());
        self
    }

    pub fn is_long_haul(&self, destination: &Destination) -> bool {
        self.long_haul_stations.contains(destination.code())
    }

    /// Every destination code some overlay reacts to.
    pub fn known_destinations(&self) -> BTreeSet<&str> {
        self.destination_floors
            .iter()
            .flat_map(|f| f.destinations.iter())
            .chain(self.long_haul_stations.iter())
            .map(String::as_str)
            .collect()
    }
}

impl Default for OverlayConfig {
    /// Constants of the current manual edition.
    fn default() -> Self {
        let usa_stations = USA_STATIONS.iter().fold(
            DestinationFloor::new("usa_stations_floor", TURNAROUND_MIN_TO_USA_STATIONS_MINUTES)
                .with_label(
                    "Turnaround destination minimum: USA stations (JFK/LAX/IAD/YYZ) => 02:00",
                ),
            |floor, code| floor.with_destination(code),
        );

        let config = Self::empty()
            .with_towing_minutes(LOCAL_TOWING_ADD_MINUTES)
            .with_towing_station(StationKey::Jed)
            .with_towing_station(StationKey::Ruh)
            .with_floor(
                DestinationFloor::new("usa_floor", TURNAROUND_MIN_TO_USA_MINUTES)
                    .with_label("Turnaround destination minimum: USA => 02:50")
                    .with_destination("USA"),
            )
            .with_floor(usa_stations)
            .with_floor(
                DestinationFloor::new("kan_floor", TURNAROUND_MIN_TO_KAN_MINUTES)
                    .with_label("Turnaround destination minimum: KAN => 02:00")
                    .with_destination("KAN"),
            )
            .with_floor(
                DestinationFloor::new("ssh_floor", TURNAROUND_MIN_TO_SSH_MINUTES)
                    .with_label(
                        "Turnaround destination minimum: SSH => 01:15 \
                         (Security/Baggage Identification)",
                    )
                    .with_destination("SSH"),
            );

        LONG_HAUL_STATIONS
            .iter()
            .fold(config, |c, code| c.with_long_haul_station(code))
    }
}
