//! Authored tables of the ground operations manual, ramp handling chapter.
//!
//! Durations are written the way the manual prints them (`hm(1, 10)` for
//! 01:10) and converted once when the reference tables are built. Activity
//! name lists and row literals that the manual repeats across sheets are
//! declared once here and shared.

use crate::models::{
    ActivityItem, ActivityValue, AircraftGroup, Footnote, GroundTimeBasis, MgtCell,
    MixedFlightSector, Movement, Operation, StationKey,
};

use super::{
    BreakdownRow, BreakdownSheet, BreakdownTable, CombinedMixedRow, DeliveryTable, MgtTable,
    MixedFlightMgt, MixedFlightsTable,
};

use AircraftGroup::{A321A320, A330B787, B757, B777A330, B777B787};
use Movement::{DomDom, DomIntl, IntlDom, IntlIntl};
use StationKey::{AhbTuu, Dmm, IntStns, Jed, Lhr, LongHaulStn, Med, OtherDomStn, Ruh, Uk};

/// Manual edition label.
pub const EDITION: &str = "GOPM 13.16";

const fn hm(hours: u32, minutes: u32) -> MgtCell {
    MgtCell::Single(hours * 60 + minutes)
}

/// `(SA)` cell: standard HH:MM, then security-alert HH:MM.
const fn sa(hours: u32, minutes: u32, sa_hours: u32, sa_minutes: u32) -> MgtCell {
    MgtCell::WithSecurityAlert {
        standard: hours * 60 + minutes,
        security_alert: sa_hours * 60 + sa_minutes,
    }
}

type MgtRowSpec = (AircraftGroup, Movement, &'static [(StationKey, MgtCell)]);

// ============================ 13.16.3.1 ============================

#[rustfmt::skip]
const TURNAROUND_MGT: &[MgtRowSpec] = &[
    (B777B787, DomDom, &[(Jed, hm(1, 10)), (Ruh, hm(1, 10)), (Dmm, hm(1, 5)), (Med, hm(1, 5)), (OtherDomStn, hm(1, 0))]),
    (B777B787, DomIntl, &[(Jed, hm(1, 20)), (Ruh, hm(1, 20)), (Dmm, hm(1, 15)), (Med, hm(1, 15))]),
    (B777B787, IntlDom, &[(Jed, hm(1, 30)), (Ruh, hm(1, 30)), (Dmm, hm(1, 25)), (Med, hm(1, 25))]),
    (
        B777B787,
        IntlIntl,
        &[
            (Jed, hm(1, 35)),
            (Ruh, hm(1, 35)),
            (Dmm, hm(1, 30)),
            (Med, hm(1, 30)),
            (IntStns, sa(1, 25, 1, 40)),
            (LongHaulStn, sa(1, 30, 1, 45)),
            (Uk, hm(1, 40)),
        ],
    ),
    (A330B787, DomDom, &[(Jed, hm(1, 5)), (Ruh, hm(1, 5)), (Dmm, hm(0, 55)), (Med, hm(0, 55)), (OtherDomStn, hm(0, 50))]),
    (A330B787, DomIntl, &[(Jed, hm(1, 10)), (Ruh, hm(1, 10)), (Dmm, hm(1, 0)), (Med, hm(1, 0))]),
    (A330B787, IntlDom, &[(Jed, hm(1, 20)), (Ruh, hm(1, 20)), (Dmm, hm(1, 10)), (Med, hm(1, 10))]),
    (
        A330B787,
        IntlIntl,
        &[
            (Jed, hm(1, 25)),
            (Ruh, hm(1, 25)),
            (Dmm, hm(1, 15)),
            (Med, hm(1, 15)),
            (IntStns, sa(1, 15, 1, 30)),
            (LongHaulStn, sa(1, 20, 1, 35)),
            (Uk, hm(1, 30)),
        ],
    ),
    (A321A320, DomDom, &[(Jed, hm(0, 45)), (Ruh, hm(0, 45)), (Dmm, hm(0, 40)), (Med, hm(0, 40)), (OtherDomStn, hm(0, 40))]),
    (A321A320, DomIntl, &[(Jed, hm(0, 50)), (Ruh, hm(0, 50)), (Dmm, hm(0, 45)), (Med, hm(0, 45)), (OtherDomStn, hm(0, 45))]),
    (A321A320, IntlDom, &[(Jed, hm(0, 55)), (Ruh, hm(0, 55)), (Dmm, hm(0, 50)), (Med, hm(0, 50)), (OtherDomStn, hm(0, 50))]),
    (
        A321A320,
        IntlIntl,
        &[(Jed, hm(1, 0)), (Ruh, hm(1, 0)), (Dmm, hm(0, 55)), (Med, hm(0, 55)), (IntStns, sa(0, 55, 1, 5))],
    ),
];

// ============================ 13.16.3.2 ============================

#[rustfmt::skip]
const TRANSIT_MGT: &[MgtRowSpec] = &[
    (
        B777B787,
        DomDom,
        &[(Jed, hm(1, 5)), (Ruh, hm(1, 5)), (Dmm, hm(1, 0)), (Med, hm(1, 0)), (AhbTuu, hm(0, 55)), (OtherDomStn, hm(0, 50))],
    ),
    (B777B787, DomIntl, &[(Jed, hm(1, 15)), (Ruh, hm(1, 15)), (Dmm, hm(1, 0)), (Med, hm(1, 0))]),
    (B777B787, IntlDom, &[(Jed, hm(0, 55)), (Ruh, hm(0, 55)), (Dmm, hm(0, 40)), (Med, hm(0, 40))]),
    (B777B787, IntlIntl, &[(IntStns, sa(1, 0, 1, 15)), (Lhr, hm(1, 0))]),
    (
        A330B787,
        DomDom,
        &[(Jed, hm(1, 0)), (Ruh, hm(1, 0)), (Dmm, hm(0, 45)), (Med, hm(0, 45)), (AhbTuu, hm(0, 55)), (OtherDomStn, hm(0, 50))],
    ),
    (A330B787, DomIntl, &[(Jed, hm(1, 10)), (Ruh, hm(1, 10)), (Dmm, hm(0, 45)), (Med, hm(0, 45))]),
    (A330B787, IntlDom, &[(Jed, hm(0, 45)), (Ruh, hm(0, 45)), (Dmm, hm(0, 35)), (Med, hm(0, 35))]),
    (A330B787, IntlIntl, &[(IntStns, sa(1, 0, 1, 15)), (Lhr, hm(1, 0))]),
    (
        A321A320,
        DomDom,
        &[(Jed, hm(0, 40)), (Ruh, hm(0, 40)), (Dmm, hm(0, 30)), (Med, hm(0, 30)), (AhbTuu, hm(0, 35)), (OtherDomStn, hm(0, 35))],
    ),
    (A321A320, DomIntl, &[(Jed, hm(0, 40)), (Ruh, hm(0, 40)), (Dmm, hm(0, 30)), (Med, hm(0, 30))]),
    (A321A320, IntlDom, &[(Jed, hm(0, 30)), (Ruh, hm(0, 30)), (Dmm, hm(0, 25)), (Med, hm(0, 25))]),
    (A321A320, IntlIntl, &[(IntStns, hm(0, 30))]),
];

// ============================ 13.16.3.3 ============================

/// `(sector, group, standard, USA-bound)`.
const MIXED_FLIGHTS_MGT: &[(MixedFlightSector, AircraftGroup, MgtCell, Option<MgtCell>)] = &[
    (MixedFlightSector::IntlDomInbound, B777B787, hm(1, 15), None),
    (MixedFlightSector::IntlDomInbound, A330B787, hm(1, 0), None),
    (MixedFlightSector::DomIntlOutboundJed, B777B787, hm(1, 15), Some(hm(1, 45))),
    (MixedFlightSector::DomIntlOutboundJed, A330B787, hm(1, 10), Some(hm(1, 30))),
    (MixedFlightSector::DomIntlOutboundRuhDmmMed, B777B787, hm(1, 0), Some(hm(1, 45))),
    (MixedFlightSector::DomIntlOutboundRuhDmmMed, A330B787, hm(0, 50), Some(hm(1, 30))),
];

// ========================= Activity breakdowns =========================

/// Compact cell notation used by the breakdown literals.
#[derive(Debug, Clone, Copy)]
enum V {
    /// Plain minutes.
    M(f64),
    /// `-`
    Na,
    /// `minutes/count*`
    S(f64, u32),
    /// `minutes/count**`
    S2(f64, u32),
}

impl V {
    fn value(self) -> ActivityValue {
        match self {
            V::M(minutes) => ActivityValue::fixed(minutes),
            V::Na => ActivityValue::NotApplicable,
            V::S(minutes, count) => ActivityValue::resourced(minutes, count, Footnote::Single),
            V::S2(minutes, count) => ActivityValue::resourced(minutes, count, Footnote::Double),
        }
    }
}

use V::{Na, M, S, S2};

type Names = [&'static str; 9];
type Cells = [V; 9];

const CABIN_ACTIVITIES: Names = [
    "Blocks IN / Door Opening",
    "PAX deplaning",
    "Custom Clearance",
    "Cabin Cleaning",
    "Galley Service",
    "Cabin Security",
    "Passenger Enplaning",
    "FNLZTN / Door CLSD",
    "BLOCKS OUT",
];

/// The A321/A320 turnaround sheet prints "Galley Services".
const A321_TURNAROUND_ACTIVITIES: Names = [
    "Blocks IN / Door Opening",
    "PAX deplaning",
    "Custom Clearance",
    "Cabin Cleaning",
    "Galley Services",
    "Cabin Security",
    "Passenger Enplaning",
    "FNLZTN / Door CLSD",
    "BLOCKS OUT",
];

const B757_ACTIVITIES: Names = [
    "Dock Jetty/ open Door",
    "PAX Disembarkation",
    "ACFT Customs checks",
    "ACFT Cleaning",
    "Catering Services",
    "Cabin security",
    "PAX Embarkation",
    "FNLZTN / Door CLSD",
    "Pushback",
];

const COMBINED_MIXED_ACTIVITIES: Names = [
    "Dock Jetty/ Open Door",
    "PAX Disembarkation",
    "ACFT Customs Checks",
    "ACFT Cleaning",
    "Catering Services",
    "Cabin security",
    "PAX Embarkation",
    "FNLZTN / Door CLSD",
    "Pushback",
];

/// Transit INTL-INTL rows are authored as `-` throughout.
const ALL_NA: Cells = [Na; 9];

const FULL_LOAD: &str = "100% Load Factor";
const HALF_LOAD: &str = "50% Load Factor";
const SIMULTANEOUS_SERVICES: &str =
    "Cabin cleaning and galley services are done simultaneously (apply for all aircraft types).";

struct SheetSpec {
    aircraft_group: AircraftGroup,
    operation: Operation,
    basis: GroundTimeBasis,
    assumption: &'static str,
    notes: &'static [&'static str],
    names: &'static Names,
    rows: [(Movement, Cells, Option<f64>); 4],
}

#[rustfmt::skip]
const SHEETS: [SheetSpec; 7] = [
    SheetSpec {
        aircraft_group: B777B787,
        operation: Operation::Turnaround,
        basis: GroundTimeBasis::TotalGroundTime,
        assumption: FULL_LOAD,
        notes: &[SIMULTANEOUS_SERVICES],
        names: &CABIN_ACTIVITIES,
        rows: [
            (DomDom, [M(1.0), M(12.0), Na, S(12.0, 20), S2(17.0, 2), M(5.0), M(26.0), M(3.0), M(1.0)], Some(65.0)),
            (DomIntl, [M(1.0), M(12.0), Na, M(20.0), M(25.0), M(5.0), M(28.0), M(3.0), M(1.0)], Some(75.0)),
            (IntlDom, [M(1.0), M(12.0), M(15.0), M(20.0), M(20.0), M(5.0), M(28.0), M(3.0), M(1.0)], Some(85.0)),
            (IntlIntl, [M(1.0), M(12.0), M(15.0), M(25.0), M(25.0), M(5.0), M(28.0), M(3.0), M(1.0)], Some(90.0)),
        ],
    },
    SheetSpec {
        aircraft_group: B777B787,
        operation: Operation::Transit,
        basis: GroundTimeBasis::TotalGroundTime,
        assumption: HALF_LOAD,
        notes: &[],
        names: &CABIN_ACTIVITIES,
        rows: [
            (DomDom, [M(1.0), M(10.0), Na, S(15.0, 20), S2(20.0, 2), Na, M(25.0), M(3.0), M(1.0)], Some(60.0)),
            (DomIntl, [M(1.0), Na, Na, M(20.0), M(30.0), Na, M(25.0), M(3.0), M(1.0)], Some(60.0)),
            (IntlDom, [M(1.0), M(10.0), Na, M(20.0), M(25.0), Na, Na, M(3.0), M(1.0)], Some(40.0)),
            (IntlIntl, ALL_NA, None),
        ],
    },
    SheetSpec {
        aircraft_group: A330B787,
        operation: Operation::Transit,
        basis: GroundTimeBasis::TotalGroundTime,
        assumption: HALF_LOAD,
        notes: &[],
        names: &CABIN_ACTIVITIES,
        rows: [
            (DomDom, [M(1.0), M(5.0), Na, S(15.0, 15), S2(18.0, 2), Na, M(17.0), M(3.0), M(1.0)], Some(45.0)),
            (DomIntl, [M(1.0), Na, Na, M(18.0), M(23.0), Na, M(17.0), M(3.0), M(1.0)], Some(45.0)),
            (IntlDom, [M(1.0), M(5.0), Na, M(18.0), M(25.0), Na, Na, M(3.0), M(1.0)], Some(35.0)),
            (IntlIntl, ALL_NA, None),
        ],
    },
    SheetSpec {
        aircraft_group: A321A320,
        operation: Operation::Turnaround,
        basis: GroundTimeBasis::TotalGroundTime,
        assumption: FULL_LOAD,
        notes: &[],
        names: &A321_TURNAROUND_ACTIVITIES,
        rows: [
            (DomDom, [M(1.0), M(8.0), Na, S(10.0, 8), S2(10.0, 1), M(3.0), M(14.0), M(3.0), M(1.0)], Some(40.0)),
            (DomIntl, [M(1.0), M(8.0), Na, M(15.0), M(15.0), M(3.0), M(14.0), M(3.0), M(1.0)], Some(45.0)),
            (IntlDom, [M(1.0), M(8.0), M(5.0), M(15.0), M(15.0), M(3.0), M(14.0), M(3.0), M(1.0)], Some(50.0)),
            (IntlIntl, [M(1.0), M(8.0), M(5.0), M(20.0), M(20.0), M(3.0), M(14.0), M(3.0), M(1.0)], Some(55.0)),
        ],
    },
    SheetSpec {
        aircraft_group: A321A320,
        operation: Operation::Transit,
        basis: GroundTimeBasis::TotalGroundTime,
        assumption: HALF_LOAD,
        notes: &[],
        names: &CABIN_ACTIVITIES,
        rows: [
            (DomDom, [M(1.0), M(4.0), Na, S(10.0, 8), S2(14.0, 1), Na, M(7.0), M(3.0), M(1.0)], Some(30.0)),
            (DomIntl, [M(1.0), Na, Na, M(13.0), M(18.0), Na, M(7.0), M(3.0), M(1.0)], Some(30.0)),
            (IntlDom, [M(1.0), M(4.0), Na, M(16.0), M(16.0), Na, Na, M(3.0), M(1.0)], Some(25.0)),
            (IntlIntl, ALL_NA, None),
        ],
    },
    SheetSpec {
        aircraft_group: B757,
        operation: Operation::Turnaround,
        basis: GroundTimeBasis::MinGroundTime,
        assumption: FULL_LOAD,
        notes: &[],
        names: &B757_ACTIVITIES,
        rows: [
            (DomDom, [M(1.0), M(7.0), Na, S(12.0, 8), M(15.0), M(3.0), M(15.0), M(3.0), M(1.0)], Some(45.0)),
            (DomIntl, [M(1.0), M(7.0), Na, S(12.0, 8), M(15.0), M(3.0), M(15.0), M(3.0), M(1.0)], Some(45.0)),
            (IntlDom, [M(1.0), M(7.0), M(5.0), S(12.0, 8), M(20.0), M(3.0), M(15.0), M(3.0), M(1.0)], Some(55.0)),
            (IntlIntl, [M(1.0), M(7.0), M(5.0), S(12.0, 8), M(25.0), M(3.0), M(15.0), M(3.0), M(1.0)], Some(60.0)),
        ],
    },
    SheetSpec {
        aircraft_group: B757,
        operation: Operation::Transit,
        basis: GroundTimeBasis::MinGroundTime,
        assumption: HALF_LOAD,
        notes: &[],
        names: &B757_ACTIVITIES,
        rows: [
            (DomDom, [M(1.0), M(7.0), Na, S(5.0, 5), M(12.0), Na, M(15.0), M(3.0), M(1.0)], Some(39.0)),
            (DomIntl, [M(1.0), Na, Na, S(5.0, 5), M(12.0), Na, M(15.0), M(3.0), M(1.0)], Some(32.0)),
            (IntlDom, [M(1.0), M(7.0), Na, S(5.0, 5), M(15.0), Na, Na, M(3.0), M(1.0)], Some(27.0)),
            (IntlIntl, ALL_NA, None),
        ],
    },
];

// ============================ 13.16.10 ============================

#[rustfmt::skip]
const COMBINED_MIXED: [(AircraftGroup, Option<(Cells, f64)>); 3] = [
    (
        B777B787,
        Some(([M(1.0), M(13.0), M(7.0), M(30.0), M(30.0), M(5.0), M(25.0), M(3.0), M(1.0)], 85.0)),
    ),
    (
        B777A330,
        Some(([M(1.0), M(10.0), M(7.0), M(28.0), M(28.0), M(5.0), M(20.0), M(3.0), M(1.0)], 75.0)),
    ),
    (A321A320, None),
];

// ============================ 13.16.13.1 ============================

/// Rows under their authored labels; `A300/B787-9` is the manual's spelling.
const DELIVERY_BEFORE_STD_HOURS: [(&str, f64); 3] = [
    ("B777-368/B787-10", 2.0),
    ("A300/B787-9", 2.0),
    ("A321/A320", 1.0),
];

// ========================= Builders =========================

fn mgt_table(operation: Operation, rows: &[MgtRowSpec]) -> MgtTable {
    rows.iter()
        .flat_map(|(group, movement, cells)| {
            cells
                .iter()
                .map(move |(station, cell)| (*group, *movement, *station, *cell))
        })
        .fold(MgtTable::new(operation), |table, (g, m, s, c)| {
            table.with_cell(g, m, s, c)
        })
}

fn items(names: &Names, cells: &Cells) -> Vec<ActivityItem> {
    names
        .iter()
        .zip(cells.iter())
        .map(|(name, cell)| ActivityItem::new(*name, cell.value()))
        .collect()
}

pub(super) fn turnaround_mgt() -> MgtTable {
    mgt_table(Operation::Turnaround, TURNAROUND_MGT)
}

pub(super) fn transit_mgt() -> MgtTable {
    mgt_table(Operation::Transit, TRANSIT_MGT)
}

pub(super) fn breakdowns() -> BreakdownTable {
    SHEETS.iter().fold(BreakdownTable::new(), |table, spec| {
        let sheet = spec.notes.iter().fold(
            BreakdownSheet::new(spec.aircraft_group, spec.operation, spec.basis)
                .with_assumption(spec.assumption),
            |sheet, note| sheet.with_note(*note),
        );
        let sheet = spec.rows.iter().fold(sheet, |sheet, (movement, cells, total)| {
            sheet.with_row(*movement, BreakdownRow::new(items(spec.names, cells), *total))
        });
        table.with_sheet(sheet)
    })
}

pub(super) fn delivery() -> DeliveryTable {
    DELIVERY_BEFORE_STD_HOURS
        .iter()
        .fold(DeliveryTable::new(), |t, (label, hours)| t.with_row(*label, *hours))
        .with_legacy_label(A330B787, "A300/B787-9")
}

pub(super) fn mixed_flights() -> MixedFlightsTable {
    let table = MIXED_FLIGHTS_MGT.iter().fold(
        MixedFlightsTable::new().with_combined_assumption(FULL_LOAD),
        |t, (sector, group, standard, usa)| {
            t.with_mgt(
                *sector,
                *group,
                MixedFlightMgt {
                    standard: standard.standard(),
                    usa: usa.map(|c| c.standard()),
                },
            )
        },
    );

    COMBINED_MIXED.iter().fold(table, |t, (group, row)| match row {
        Some((cells, minimum)) => t.with_combined_row(
            *group,
            CombinedMixedRow {
                activities: items(&COMBINED_MIXED_ACTIVITIES, cells),
                minimum_ground_time: *minimum,
            },
        ),
        None => t.with_combined_not_applicable(*group),
    })
}
