//! Employee model.
//!
//! Employees are the resources a roster assigns to shifts. Each carries
//! its own preference table and the assignment set written by the most
//! recent scheduling run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Day, Preferences, ShiftKind, ShiftSlot};

/// An employee that can be rostered onto shifts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Ranked shift preferences.
    #[serde(default)]
    pub preferences: Preferences,
    /// Shifts assigned by the last scheduling run.
    #[serde(default)]
    pub assignments: Vec<ShiftSlot>,
}

impl Employee {
    /// Creates an employee with no preferences and no assignments.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            preferences: Preferences::new(),
            assignments: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replaces the preference table.
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Adds a single ranked preference.
    pub fn with_preference(mut self, day: Day, shift: ShiftKind, rank: u32) -> Self {
        self.preferences.set(day, shift, rank);
        self
    }

    /// Whether the employee is assigned to any shift on `day`.
    pub fn works_on(&self, day: Day) -> bool {
        self.assignments.iter().any(|s| s.day == day)
    }

    /// The shift assigned on `day`, if any.
    pub fn shift_on(&self, day: Day) -> Option<ShiftKind> {
        self.assignments
            .iter()
            .find(|s| s.day == day)
            .map(|s| s.shift)
    }

    /// Number of distinct days with an assignment.
    pub fn work_days(&self) -> usize {
        self.assignments
            .iter()
            .map(|s| s.day)
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Whether another workday fits under `max_work_days`.
    pub fn is_available(&self, max_work_days: usize) -> bool {
        self.work_days() < max_work_days
    }

    /// Label used in schedule listings: the name, or the id when unnamed.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}
