//! Canonical lookup keys.
//!
//! Every key is a closed set whose serialized form is the label printed in
//! the ground operations manual (`"DOM-INTL"`, `"A330/B787-9"`,
//! `"OTHER_DOM_STN"`). Free-form user tokens are mapped onto these keys by
//! the [`alias`](crate::alias) layer; the resolvers only ever see canonical
//! values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Aircraft category used as the first dimension of every table.
///
/// Groups pair two types whose ground handling is authored together.
/// `B777A330` appears only in the combined mixed-flights breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AircraftGroup {
    /// B777-368 / B787-10.
    #[serde(rename = "B777-368/B787-10")]
    B777B787,
    /// A330 / B787-9.
    #[serde(rename = "A330/B787-9")]
    A330B787,
    /// A321 / A320.
    #[serde(rename = "A321/A320")]
    A321A320,
    /// B757.
    #[serde(rename = "B757")]
    B757,
    /// B777-268 / A330.
    #[serde(rename = "B777-268/A330")]
    B777A330,
}

impl AircraftGroup {
    /// All groups, in manual order.
    pub const ALL: [AircraftGroup; 5] = [
        AircraftGroup::B777B787,
        AircraftGroup::A330B787,
        AircraftGroup::A321A320,
        AircraftGroup::B757,
        AircraftGroup::B777A330,
    ];

    /// Manual label (e.g. `"A321/A320"`).
    pub fn label(&self) -> &'static str {
        match self {
            AircraftGroup::B777B787 => "B777-368/B787-10",
            AircraftGroup::A330B787 => "A330/B787-9",
            AircraftGroup::A321A320 => "A321/A320",
            AircraftGroup::B757 => "B757",
            AircraftGroup::B777A330 => "B777-268/A330",
        }
    }

    /// Individual aircraft types that make up the group.
    pub fn members(&self) -> Vec<&'static str> {
        self.label().split('/').collect()
    }

    /// Parses an exact manual label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.label() == label.trim())
    }
}

/// Ground operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    /// Full cycle: same aircraft inbound and outbound.
    Turnaround,
    /// Intermediate stop at reduced load factor.
    Transit,
}

impl Operation {
    /// Both operations, turnaround first.
    pub const ALL: [Operation; 2] = [Operation::Turnaround, Operation::Transit];

    /// Canonical label as the manual prints it.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Turnaround => "TURNAROUND",
            Operation::Transit => "TRANSIT",
        }
    }

    /// Parses a canonical label; aliases go through the alias resolver.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.label() == label.trim())
    }
}

/// Domestic/international direction of the inbound and outbound legs.
///
/// Directional: `DomIntl` (domestic in, international out) is not `IntlDom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Movement {
    #[serde(rename = "DOM-DOM")]
    DomDom,
    #[serde(rename = "DOM-INTL")]
    DomIntl,
    #[serde(rename = "INTL-DOM")]
    IntlDom,
    #[serde(rename = "INTL-INTL")]
    IntlIntl,
}

impl Movement {
    /// Every movement, in manual column order.
    pub const ALL: [Movement; 4] = [
        Movement::DomDom,
        Movement::DomIntl,
        Movement::IntlDom,
        Movement::IntlIntl,
    ];

    /// Canonical label, e.g. `DOM-INTL`.
    pub fn label(&self) -> &'static str {
        match self {
            Movement::DomDom => "DOM-DOM",
            Movement::DomIntl => "DOM-INTL",
            Movement::IntlDom => "INTL-DOM",
            Movement::IntlIntl => "INTL-INTL",
        }
    }

    /// Builds a movement from the inbound and outbound leg kinds.
    pub fn from_legs(inbound_domestic: bool, outbound_domestic: bool) -> Self {
        match (inbound_domestic, outbound_domestic) {
            (true, true) => Movement::DomDom,
            (true, false) => Movement::DomIntl,
            (false, true) => Movement::IntlDom,
            (false, false) => Movement::IntlIntl,
        }
    }

    /// Whether one leg is domestic and the other international.
    pub fn is_mixed_direction(&self) -> bool {
        matches!(self, Movement::DomIntl | Movement::IntlDom)
    }

    /// Parses a canonical label; aliases go through the alias resolver.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label.trim())
    }
}

/// Station column of an MGT table: a physical airport or a station category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StationKey {
    /// Jeddah.
    Jed,
    /// Riyadh.
    Ruh,
    /// Dammam.
    Dmm,
    /// Madinah.
    Med,
    /// London Heathrow.
    Lhr,
    /// Any other domestic station.
    OtherDomStn,
    /// International stations.
    IntStns,
    /// Long-haul international stations.
    LongHaulStn,
    /// Abha / Tabuk.
    AhbTuu,
    /// United Kingdom stations.
    Uk,
}

impl StationKey {
    /// Every station column, in manual order.
    pub const ALL: [StationKey; 10] = [
        StationKey::Jed,
        StationKey::Ruh,
        StationKey::Dmm,
        StationKey::Med,
        StationKey::Lhr,
        StationKey::OtherDomStn,
        StationKey::IntStns,
        StationKey::LongHaulStn,
        StationKey::AhbTuu,
        StationKey::Uk,
    ];

    /// Canonical column label, e.g. `INT_STNS`.
    pub fn label(&self) -> &'static str {
        match self {
            StationKey::Jed => "JED",
            StationKey::Ruh => "RUH",
            StationKey::Dmm => "DMM",
            StationKey::Med => "MED",
            StationKey::Lhr => "LHR",
            StationKey::OtherDomStn => "OTHER_DOM_STN",
            StationKey::IntStns => "INT_STNS",
            StationKey::LongHaulStn => "LONG_HAUL_STN",
            StationKey::AhbTuu => "AHB_TUU",
            StationKey::Uk => "UK",
        }
    }

    /// Whether this key groups several airports rather than naming one.
    pub fn is_category(&self) -> bool {
        matches!(
            self,
            StationKey::OtherDomStn
                | StationKey::IntStns
                | StationKey::LongHaulStn
                | StationKey::AhbTuu
                | StationKey::Uk
        )
    }

    /// Parses a canonical column label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label.trim())
    }
}

/// Outbound destination used by the turnaround floor overlays.
///
/// Stored as an upper-case code: a country marker (`USA`), a station
/// (`KAN`, `SSH`, `JFK`) or any other code the overlay sets know about.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Destination(String);

impl Destination {
    /// Creates a destination, normalizing the code to upper case.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_uppercase())
    }

    /// Upper-cased destination code.
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Destination {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Sector of the mixed-flights MGT table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MixedFlightSector {
    /// INTL-DOM inbound at JED, RUH, DMM or MED.
    IntlDomInbound,
    /// DOM-INTL outbound from JED.
    DomIntlOutboundJed,
    /// DOM-INTL outbound from RUH, DMM or MED.
    DomIntlOutboundRuhDmmMed,
}

impl MixedFlightSector {
    /// Every sector, inbound first.
    pub const ALL: [MixedFlightSector; 3] = [
        MixedFlightSector::IntlDomInbound,
        MixedFlightSector::DomIntlOutboundJed,
        MixedFlightSector::DomIntlOutboundRuhDmmMed,
    ];

    /// Maps a movement at a physical station onto its sector.
    ///
    /// Returns `None` for pairs the manual does not cover (same-direction
    /// movements, category stations, LHR).
    pub fn for_movement(movement: Movement, station: StationKey) -> Option<Self> {
        use StationKey::{Dmm, Jed, Med, Ruh};
        match (movement, station) {
            (Movement::IntlDom, Jed | Ruh | Dmm | Med) => Some(MixedFlightSector::IntlDomInbound),
            (Movement::DomIntl, Jed) => Some(MixedFlightSector::DomIntlOutboundJed),
            (Movement::DomIntl, Ruh | Dmm | Med) => {
                Some(MixedFlightSector::DomIntlOutboundRuhDmmMed)
            }
            _ => None,
        }
    }

    /// Canonical sector label.
    pub fn label(&self) -> &'static str {
        match self {
            MixedFlightSector::IntlDomInbound => "INTL-DOM_INBOUND_JED_RUH_DMM_MED",
            MixedFlightSector::DomIntlOutboundJed => "DOM-INTL_OUTBOUND_JED",
            MixedFlightSector::DomIntlOutboundRuhDmmMed => "DOM-INTL_OUTBOUND_RUH_DMM_MED",
        }
    }
}

macro_rules! impl_display_via_label {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

impl_display_via_label!(AircraftGroup, Operation, Movement, StationKey, MixedFlightSector);

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
