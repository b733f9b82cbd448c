//! Activity breakdown resolver.
//!
//! Sheets print either a "Total Ground Time" or a "Min Ground Time" column;
//! both are returned as `total_or_minimum_ground_time`, with the column
//! recorded in `ground_time_basis`. The value is not reconciled with the MGT
//! tables, which are authored separately and may disagree.

use std::sync::Arc;

use log::debug;

use crate::error::Result;
use crate::models::{ActivityBreakdownResult, AircraftGroup, Movement, Operation};
use crate::tables::ReferenceTables;

/// Resolves itemized activity breakdowns.
#[derive(Debug, Clone)]
pub struct BreakdownResolver {
    tables: Arc<ReferenceTables>,
}

impl BreakdownResolver {
    /// Resolver over one shared edition.
    pub fn new(tables: Arc<ReferenceTables>) -> Self {
        Self { tables }
    }

    /// Itemized ground time for a group, operation and movement.
    ///
    /// Resourced values are returned as authored, never rescaled.
    ///
    /// # Errors
    /// `UnknownAircraftOperationPair` when no sheet exists for the pair,
    /// `UnknownMovementForBreakdown` when the sheet has no such row.
    pub fn resolve_activity_breakdown(
        &self,
        aircraft_group: AircraftGroup,
        operation: Operation,
        movement: Movement,
    ) -> Result<ActivityBreakdownResult> {
        let sheet = self.tables.breakdowns().sheet(aircraft_group, operation)?;
        let row = sheet.row(movement)?;

        debug!(
            "breakdown {aircraft_group} {operation} {movement}: {} activities, ground time {:?}",
            row.activities.len(),
            row.ground_time
        );

        Ok(ActivityBreakdownResult {
            aircraft_group,
            operation,
            movement,
            activities: row.activities.clone(),
            total_or_minimum_ground_time: row.ground_time,
            ground_time_basis: sheet.ground_time_basis,
            assumptions: sheet.assumptions.clone(),
            notes: sheet.notes.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GroundTimeError;
    use crate::models::{ActivityValue, Footnote, GroundTimeBasis, StationKey};
    use crate::resolver::{MgtQuery, MgtResolver};

    use AircraftGroup::{A321A320, A330B787, B757, B777B787};
    use Movement::{DomDom, DomIntl, IntlDom, IntlIntl};
    use Operation::{Transit, Turnaround};

    fn resolver() -> BreakdownResolver {
        BreakdownResolver::new(ReferenceTables::shared_standard())
    }

    #[test]
    fn test_narrowbody_turnaround_dom_dom() {
        let r = resolver()
            .resolve_activity_breakdown(A321A320, Turnaround, DomDom)
            .unwrap();
        assert_eq!(r.total_or_minimum_ground_time, Some(40.0));
        assert_eq!(r.ground_time_basis, GroundTimeBasis::TotalGroundTime);
        assert_eq!(r.assumptions, vec!["100% Load Factor"]);

        let cleaning = r.activity("Cabin Cleaning").unwrap();
        assert_eq!(
            cleaning.value,
            ActivityValue::resourced(10.0, 8, Footnote::Single)
        );
        assert_eq!(cleaning.value.fixed_minutes(), None);

        let galley = r.activity("Galley Services").unwrap();
        assert_eq!(galley.value.resource_count(), Some(1));
        assert_eq!(galley.value.to_string(), "10.00/1**");
    }

    #[test]
    fn test_activities_keep_manual_order() {
        let r = resolver()
            .resolve_activity_breakdown(B777B787, Turnaround, IntlDom)
            .unwrap();
        let names: Vec<&str> = r.activities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names.first(), Some(&"Blocks IN / Door Opening"));
        assert_eq!(names.last(), Some(&"BLOCKS OUT"));
        assert!(!names.contains(&"Total Ground Time"));
        assert_eq!(r.total_or_minimum_ground_time, Some(85.0));
        assert_eq!(r.notes.len(), 1);
    }

    #[test]
    fn test_not_applicable_entries() {
        let r = resolver()
            .resolve_activity_breakdown(B777B787, Transit, DomIntl)
            .unwrap();
        assert_eq!(r.activity("PAX deplaning").unwrap().value, ActivityValue::NotApplicable);
        assert_eq!(r.applicable_activities().count(), 6);
        assert!(!r.is_not_applicable());
    }

    #[test]
    fn test_transit_intl_intl_has_no_ground_time() {
        let r = resolver()
            .resolve_activity_breakdown(A321A320, Transit, IntlIntl)
            .unwrap();
        assert_eq!(r.total_or_minimum_ground_time, None);
        assert!(r.is_not_applicable());
    }

    #[test]
    fn test_min_ground_time_basis() {
        let r = resolver()
            .resolve_activity_breakdown(B757, Transit, DomDom)
            .unwrap();
        assert_eq!(r.total_or_minimum_ground_time, Some(39.0));
        assert_eq!(r.ground_time_basis, GroundTimeBasis::MinGroundTime);
        assert_eq!(r.assumptions, vec!["50% Load Factor"]);
    }

    #[test]
    fn test_unknown_pair() {
        let err = resolver()
            .resolve_activity_breakdown(A330B787, Turnaround, DomDom)
            .unwrap_err();
        assert_eq!(
            err,
            GroundTimeError::UnknownAircraftOperationPair {
                aircraft_group: A330B787,
                operation: Turnaround,
            }
        );
    }

    #[test]
    fn test_unknown_movement_in_sheet() {
        let tables = ReferenceTables::builder("partial")
            .with_breakdowns(crate::tables::BreakdownTable::new().with_sheet(
                crate::tables::BreakdownSheet::new(
                    B757,
                    Transit,
                    GroundTimeBasis::MinGroundTime,
                ),
            ))
            .build();
        let err = BreakdownResolver::new(Arc::new(tables))
            .resolve_activity_breakdown(B757, Transit, DomDom)
            .unwrap_err();
        assert!(matches!(err, GroundTimeError::UnknownMovementForBreakdown { .. }));
    }

    #[test]
    fn test_totals_are_independent_of_mgt() {
        // B777-368/B787-10 turnaround DOM-DOM: breakdown 65, MGT at JED 70.
        let tables = ReferenceTables::shared_standard();
        let breakdown = BreakdownResolver::new(tables.clone())
            .resolve_activity_breakdown(B777B787, Turnaround, DomDom)
            .unwrap();
        let mgt = MgtResolver::new(tables)
            .resolve_mgt(&MgtQuery::new(Turnaround, B777B787, DomDom, StationKey::Jed))
            .unwrap();
        assert_eq!(breakdown.total_or_minimum_ground_time, Some(65.0));
        assert_eq!(mgt.adjusted_duration, 70);
    }

    #[test]
    fn test_deterministic() {
        let r = resolver();
        assert_eq!(
            r.resolve_activity_breakdown(B757, Turnaround, IntlIntl),
            r.resolve_activity_breakdown(B757, Turnaround, IntlIntl)
        );
    }
}
