//! Reference table validation.
//!
//! Checks structural integrity of a table edition before it is served.
//! Detects:
//! - MGT rows without any station cell
//! - Security-alert variants shorter than their standard value
//! - Negative or non-finite activity minutes and ground times
//! - Resourced activities with a zero resource count
//! - Duplicate activity names within a row
//! - Negative or non-finite delivery hours
//! - Mixed-flights USA values shorter than the standard value
//! - Destination floors that name no destination
//!
//! Problems are collected, not reported first-failure.

use log::warn;
use std::collections::HashSet;

use crate::models::{ActivityItem, MgtCell, Operation};
use crate::tables::ReferenceTables;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An MGT (group, movement) row defines no station.
    EmptyRow,
    /// A security-alert value is below its standard value.
    SecurityAlertBelowStandard,
    /// Activity minutes or a ground time is negative or not finite.
    InvalidActivityMinutes,
    /// A resourced activity assumes zero resources.
    ZeroResourceCount,
    /// Two activities in one row share a name.
    DuplicateActivity,
    /// Delivery hours are negative or not finite.
    InvalidDeliveryHours,
    /// A mixed-flights USA value is below the standard value.
    UsaBelowStandard,
    /// A destination floor names no destination.
    EmptyDestinationSet,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn is_valid_minutes(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Validates every table family of an edition.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tables(tables: &ReferenceTables) -> ValidationResult {
    let mut errors = Vec::new();

    // MGT tables
    for operation in Operation::ALL {
        for (group, movement, row) in tables.mgt(operation).rows() {
            if row.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EmptyRow,
                    format!("{operation} MGT row {group} / {movement} defines no station"),
                ));
            }
            for (station, cell) in row {
                if let MgtCell::WithSecurityAlert {
                    standard,
                    security_alert,
                } = cell
                {
                    if security_alert < standard {
                        errors.push(ValidationError::new(
                            ValidationErrorKind::SecurityAlertBelowStandard,
                            format!(
                                "{operation} MGT {group} / {movement} / {station}: \
                                 SA {security_alert} min below standard {standard} min"
                            ),
                        ));
                    }
                }
            }
        }
    }

    // Activity breakdowns
    for sheet in tables.breakdowns().sheets() {
        for (movement, row) in sheet.rows() {
            let context = format!("{} / {} / {}", sheet.aircraft_group, sheet.operation, movement);
            check_activities(&context, &row.activities, &mut errors);
            if let Some(ground_time) = row.ground_time {
                if !is_valid_minutes(ground_time) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidActivityMinutes,
                        format!("{context}: invalid ground time {ground_time}"),
                    ));
                }
            }
        }
    }

    // Delivery
    for (label, hours) in tables.delivery().rows() {
        if !hours.is_finite() || hours < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDeliveryHours,
                format!("Delivery row '{label}' has invalid hours {hours}"),
            ));
        }
    }

    // Mixed flights
    let mixed = tables.mixed_flights();
    for (sector, group, entry) in mixed.mgt_entries() {
        if let Some(usa) = entry.usa {
            if usa < entry.standard {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UsaBelowStandard,
                    format!(
                        "Mixed flights {sector} / {group}: USA {usa} min below standard {} min",
                        entry.standard
                    ),
                ));
            }
        }
    }
    for (group, row) in mixed.combined_rows() {
        let context = format!("combined mixed flights / {group}");
        check_activities(&context, &row.activities, &mut errors);
        if !is_valid_minutes(row.minimum_ground_time) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidActivityMinutes,
                format!("{context}: invalid ground time {}", row.minimum_ground_time),
            ));
        }
    }

    // Overlays
    for floor in &tables.overlays().destination_floors {
        if floor.destinations.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyDestinationSet,
                format!("Destination floor '{}' names no destination", floor.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        warn!(
            "reference tables '{}' failed validation with {} problem(s)",
            tables.edition(),
            errors.len()
        );
        for e in &errors {
            warn!("{:?}: {}", e.kind, e.message);
        }
        Err(errors)
    }
}

fn check_activities(
    context: &str,
    activities: &[ActivityItem],
    errors: &mut Vec<ValidationError>,
) {
    let mut names = HashSet::new();
    for item in activities {
        if !names.insert(item.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateActivity,
                format!("{context}: duplicate activity '{}'", item.name),
            ));
        }
        if let Some(minutes) = item.value.authored_minutes() {
            if !is_valid_minutes(minutes) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidActivityMinutes,
                    format!("{context}: '{}' has invalid minutes {minutes}", item.name),
                ));
            }
        }
        if item.value.resource_count() == Some(0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroResourceCount,
                format!("{context}: '{}' assumes zero resources", item.name),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ActivityValue, AircraftGroup, Footnote, GroundTimeBasis, MixedFlightSector, Movement,
        StationKey,
    };
    use crate::tables::{
        BreakdownRow, BreakdownSheet, BreakdownTable, DeliveryTable, DestinationFloor, MgtTable,
        MixedFlightMgt, MixedFlightsTable, OverlayConfig,
    };

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result.unwrap_err().into_iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_standard_edition_is_valid() {
        assert_eq!(validate_tables(&ReferenceTables::standard()), Ok(()));
    }

    #[test]
    fn test_security_alert_below_standard() {
        let tables = ReferenceTables::builder("bad sa")
            .with_turnaround(MgtTable::new(Operation::Turnaround).with_cell(
                AircraftGroup::B757,
                Movement::IntlIntl,
                StationKey::IntStns,
                MgtCell::with_security_alert(90, 80),
            ))
            .build();
        let errors = validate_tables(&tables).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::SecurityAlertBelowStandard);
        assert!(errors[0].message.contains("INT_STNS"));
    }

    #[test]
    fn test_empty_row() {
        let table: MgtTable = serde_json::from_str(
            r#"{"operation":"TRANSIT","rows":{"B757":{"DOM-DOM":{}}}}"#,
        )
        .unwrap();
        let tables = ReferenceTables::builder("empty row").with_transit(table).build();
        assert_eq!(kinds(validate_tables(&tables)), vec![ValidationErrorKind::EmptyRow]);
    }

    #[test]
    fn test_activity_checks_collect_all_errors() {
        let row = BreakdownRow::new(
            vec![
                ActivityItem::new(
                    "Cabin Cleaning",
                    ActivityValue::resourced(10.0, 0, Footnote::Single),
                ),
                ActivityItem::new("Cabin Cleaning", ActivityValue::fixed(5.0)),
                ActivityItem::new("Catering", ActivityValue::fixed(-1.0)),
                ActivityItem::new("Boarding", ActivityValue::fixed(f64::NAN)),
            ],
            Some(f64::INFINITY),
        );
        let tables = ReferenceTables::builder("bad breakdown")
            .with_breakdowns(BreakdownTable::new().with_sheet(
                BreakdownSheet::new(
                    AircraftGroup::B757,
                    Operation::Transit,
                    GroundTimeBasis::MinGroundTime,
                )
                .with_row(Movement::DomDom, row),
            ))
            .build();

        let found = kinds(validate_tables(&tables));
        assert_eq!(
            found,
            vec![
                ValidationErrorKind::ZeroResourceCount,
                ValidationErrorKind::DuplicateActivity,
                ValidationErrorKind::InvalidActivityMinutes,
                ValidationErrorKind::InvalidActivityMinutes,
                ValidationErrorKind::InvalidActivityMinutes,
            ]
        );
    }

    #[test]
    fn test_delivery_mixed_and_overlays() {
        let tables = ReferenceTables::builder("bad misc")
            .with_delivery(DeliveryTable::new().with_row("A321/A320", -1.0))
            .with_mixed_flights(MixedFlightsTable::new().with_mgt(
                MixedFlightSector::DomIntlOutboundJed,
                AircraftGroup::B777B787,
                MixedFlightMgt {
                    standard: 75,
                    usa: Some(60),
                },
            ))
            .with_overlays(
                OverlayConfig::empty().with_floor(DestinationFloor::new("empty_floor", 60)),
            )
            .build();

        assert_eq!(
            kinds(validate_tables(&tables)),
            vec![
                ValidationErrorKind::InvalidDeliveryHours,
                ValidationErrorKind::UsaBelowStandard,
                ValidationErrorKind::EmptyDestinationSet,
            ]
        );
    }
}
