//! Property-based tests for the MGT overlay chain.
//!
//! Queries are drawn from the full key space; lookups that miss the tables
//! are skipped since the properties only concern resolved values.

use proptest::prelude::*;
use proptest::sample::select;

use super::mgt::{MgtQuery, MgtResolver};
use crate::models::{AircraftGroup, Movement, Operation, StationKey};
use crate::tables::ReferenceTables;

fn resolver() -> MgtResolver {
    MgtResolver::new(ReferenceTables::shared_standard())
}

fn query_strategy() -> impl Strategy<Value = MgtQuery> {
    (
        select(Operation::ALL.to_vec()),
        select(AircraftGroup::ALL.to_vec()),
        select(Movement::ALL.to_vec()),
        select(StationKey::ALL.to_vec()),
        proptest::option::of(select(vec![
            "USA", "KAN", "SSH", "JFK", "LAX", "IAD", "YYZ", "MNL", "CAN", "KUL", "CGK", "SIN",
            "LHR", "CAI",
        ])),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(op, group, movement, station, destination, sa, towing)| {
            let q = MgtQuery::new(op, group, movement, station)
                .with_security_alert(sa)
                .with_local_towing(towing);
            match destination {
                Some(d) => q.with_destination(d),
                None => q,
            }
        })
}

proptest! {
    /// Property: identical queries give identical results.
    #[test]
    fn prop_resolution_is_deterministic(q in query_strategy()) {
        let r = resolver();
        prop_assert_eq!(r.resolve_mgt(&q), r.resolve_mgt(&q));
    }

    /// Property: overlays never lower the base value, and every applied
    /// trace entry raises the running value it starts from.
    #[test]
    fn prop_overlays_only_raise(q in query_strategy()) {
        if let Ok(result) = resolver().resolve_mgt(&q) {
            prop_assert!(result.adjusted_duration >= result.base_duration);
            let mut running = result.base_duration;
            for entry in result.applied_rules() {
                prop_assert_eq!(entry.from_minutes, Some(running));
                let to = entry.to_minutes.unwrap_or(running);
                prop_assert!(to >= running);
                running = to;
            }
            prop_assert_eq!(running, result.adjusted_duration);
        }
    }

    /// Property: a USA destination never yields less than no destination.
    #[test]
    fn prop_usa_floor_is_monotonic(q in query_strategy()) {
        let mut plain = q.clone();
        plain.operation = Operation::Turnaround;
        plain.destination = None;
        let usa = plain.clone().with_destination("USA");

        let r = resolver();
        if let (Ok(without), Ok(with)) = (r.resolve_mgt(&plain), r.resolve_mgt(&usa)) {
            prop_assert!(with.adjusted_duration >= without.adjusted_duration);
            prop_assert!(with.adjusted_duration >= 170);
        }
    }

    /// Property: towing never changes a DOM-DOM result.
    #[test]
    fn prop_towing_scope(q in query_strategy()) {
        let mut base = q.clone();
        base.movement = Movement::DomDom;
        let r = resolver();
        let off = r.resolve_mgt(&base.clone().with_local_towing(false));
        let on = r.resolve_mgt(&base.with_local_towing(true));
        if let (Ok(off), Ok(on)) = (off, on) {
            prop_assert_eq!(off.adjusted_duration, on.adjusted_duration);
        }
    }

    /// Property: the SA flag selects the second element of a pair and has no
    /// effect on single-value cells.
    #[test]
    fn prop_sa_variant_selection(q in query_strategy()) {
        let tables = ReferenceTables::standard();
        let table = tables.mgt(q.operation);
        if let Ok(cell) = table.cell(q.aircraft_group, q.movement, q.station) {
            let r = resolver();
            let plain = MgtQuery { destination: None, apply_local_towing_rule: false, ..q.clone() };
            let off = r.resolve_mgt(&plain.clone().with_security_alert(false)).unwrap();
            let on = r.resolve_mgt(&plain.with_security_alert(true)).unwrap();
            if cell.has_security_alert_variant() {
                prop_assert_eq!(off.base_duration, cell.select(false));
                prop_assert_eq!(on.base_duration, cell.select(true));
            } else {
                prop_assert_eq!(off.base_duration, on.base_duration);
            }
        }
    }
}
