//! Input validation for rostering problems.
//!
//! Checks a roster before it is handed to the assigner. The assigner
//! itself tolerates every roster; these checks catch input that would
//! produce a misleading schedule:
//! - Empty roster
//! - Duplicate employee IDs or names
//! - Malformed priorities
//! - Rosters too small to ever staff a day
//! - Preferences for shifts that are not scheduled

use crate::config::StaffingConstraints;
use crate::models::Employee;
use std::collections::HashSet;

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
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The roster has no employees.
    EmptyRoster,
    /// Two employees share the same ID.
    DuplicateId,
    /// Two employees share the same name (case-insensitive).
    DuplicateName,
    /// A stated priority is zero.
    InvalidPriority,
    /// Fewer employees than one day's minimum staffing needs.
    RosterTooSmall,
    /// A preference names a shift the constraints do not schedule.
    UnscheduledShiftPreference,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster against the constraints it will be scheduled with.
///
/// Checks:
/// 1. The roster is not empty
/// 2. No duplicate employee IDs
/// 3. No duplicate non-empty names (case-insensitive)
/// 4. Every stated priority is at least 1
/// 5. At least `min_staff_per_shift * shifts` employees
/// 6. No preference names an unscheduled shift
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(employees: &[Employee], constraints: &StaffingConstraints) -> ValidationResult {
    let mut errors = Vec::new();

    if employees.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoster,
            "Roster has no employees",
        ));
    }

    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for employee in employees {
        if !ids.insert(employee.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee ID: {}", employee.id),
            ));
        }

        let name = employee.name.trim().to_lowercase();
        if !name.is_empty() && !names.insert(name) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate employee name: {}", employee.name),
            ));
        }
    }

    for employee in employees {
        for (day, shift, priority) in employee.preferences.iter() {
            if priority.value() == 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidPriority,
                    format!(
                        "Employee '{}' has priority 0 for {day} {shift} (1 is most preferred)",
                        employee.id
                    ),
                ));
            }
            if !constraints.shifts.contains(&shift) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnscheduledShiftPreference,
                    format!(
                        "Employee '{}' ranks {day} {shift}, which is not scheduled",
                        employee.id
                    ),
                ));
            }
        }
    }

    let required = constraints.required_roster_size();
    if !employees.is_empty() && employees.len() < required {
        errors.push(ValidationError::new(
            ValidationErrorKind::RosterTooSmall,
            format!(
                "Need at least {required} employees ({} per shift x {} shifts), got {}",
                constraints.min_staff_per_shift,
                constraints.shifts.len(),
                employees.len()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
