//! Weekly schedule (solution) model.
//!
//! A weekly schedule maps every (day, shift) cell to the employees staffed
//! on it. Cells below the minimum headcount are not errors; they are
//! reported as [`StaffingGap`]s.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::{Day, ShiftKind, ShiftSlot};

/// A complete weekly roster produced by one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    /// Minimum headcount the schedule was generated against.
    pub min_staff_per_shift: usize,
    /// Scheduled shifts, in per-day order.
    pub shifts: Vec<ShiftKind>,
    /// Day → shift → assigned employee ids.
    cells: BTreeMap<Day, BTreeMap<ShiftKind, Vec<String>>>,
    /// Employee id → display name, for listings.
    #[serde(default)]
    names: BTreeMap<String, String>,
}

/// A cell with fewer employees than the minimum headcount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingGap {
    /// The understaffed cell.
    pub slot: ShiftSlot,
    /// Employees actually assigned.
    pub assigned: usize,
    /// Minimum headcount.
    pub required: usize,
}

impl StaffingGap {
    /// Missing headcount.
    #[inline]
    pub fn shortfall(&self) -> usize {
        self.required.saturating_sub(self.assigned)
    }
}

impl fmt::Display for StaffingGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} understaffed: {}/{}",
            self.slot.day, self.slot.shift, self.assigned, self.required
        )
    }
}

impl WeeklySchedule {
    /// Creates an empty schedule with a cell for every day × shift.
    pub fn new(shifts: &[ShiftKind], min_staff_per_shift: usize) -> Self {
        let cells = Day::ALL
            .iter()
            .map(|&day| {
                let row = shifts.iter().map(|&s| (s, Vec::new())).collect();
                (day, row)
            })
            .collect();
        Self {
            min_staff_per_shift,
            shifts: shifts.to_vec(),
            cells,
            names: BTreeMap::new(),
        }
    }

    /// Records the display name for an employee id.
    pub fn register_name(&mut self, employee_id: impl Into<String>, name: impl Into<String>) {
        self.names.insert(employee_id.into(), name.into());
    }

    /// Adds an employee to a cell. Unscheduled shifts are ignored.
    pub fn assign(&mut self, day: Day, shift: ShiftKind, employee_id: impl Into<String>) {
        if let Some(cell) = self.cells.get_mut(&day).and_then(|row| row.get_mut(&shift)) {
            cell.push(employee_id.into());
        }
    }

    /// Employee ids staffed on a cell (empty for unscheduled shifts).
    pub fn employees(&self, day: Day, shift: ShiftKind) -> &[String] {
        self.cells
            .get(&day)
            .and_then(|row| row.get(&shift))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of employees on a cell.
    pub fn headcount(&self, day: Day, shift: ShiftKind) -> usize {
        self.employees(day, shift).len()
    }

    /// All cells in day order, then in the configured shift order.
    pub fn cells(&self) -> impl Iterator<Item = (ShiftSlot, &[String])> + '_ {
        self.cells.iter().flat_map(move |(&day, row)| {
            self.shifts.iter().filter_map(move |&shift| {
                row.get(&shift)
                    .map(|ids| (ShiftSlot::new(day, shift), ids.as_slice()))
            })
        })
    }

    /// The shift an employee works on `day`, if any.
    pub fn shift_of(&self, employee_id: &str, day: Day) -> Option<ShiftKind> {
        self.cells.get(&day).and_then(|row| {
            row.iter()
                .find(|(_, ids)| ids.iter().any(|id| id == employee_id))
                .map(|(&shift, _)| shift)
        })
    }

    /// Whether an employee works any shift on `day`.
    pub fn is_assigned_on(&self, employee_id: &str, day: Day) -> bool {
        self.shift_of(employee_id, day).is_some()
    }

    /// Every cell an employee is staffed on, in week order.
    pub fn slots_for(&self, employee_id: &str) -> Vec<ShiftSlot> {
        self.cells()
            .filter(|(_, ids)| ids.iter().any(|id| id == employee_id))
            .map(|(slot, _)| slot)
            .collect()
    }

    /// Distinct days an employee works.
    pub fn work_days(&self, employee_id: &str) -> usize {
        Day::ALL
            .iter()
            .filter(|&&day| self.is_assigned_on(employee_id, day))
            .count()
    }

    /// Cells below the minimum headcount, in week order.
    pub fn staffing_gaps(&self) -> Vec<StaffingGap> {
        self.cells()
            .filter(|(_, ids)| ids.len() < self.min_staff_per_shift)
            .map(|(slot, ids)| StaffingGap {
                slot,
                assigned: ids.len(),
                required: self.min_staff_per_shift,
            })
            .collect()
    }

    /// Whether every cell reaches the minimum headcount.
    pub fn is_fully_staffed(&self) -> bool {
        self.staffing_gaps().is_empty()
    }

    /// Number of cells (days × scheduled shifts).
    pub fn cell_count(&self) -> usize {
        self.cells.values().map(BTreeMap::len).sum()
    }

    /// Total employee-shift assignments.
    pub fn assignment_count(&self) -> usize {
        self.cells().map(|(_, ids)| ids.len()).sum()
    }

    fn label<'a>(&'a self, employee_id: &'a str) -> &'a str {
        self.names
            .get(employee_id)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
            .unwrap_or(employee_id)
    }
}

impl fmt::Display for WeeklySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (&day, row) in &self.cells {
            writeln!(f, "=== {day} ===")?;
            for (&shift, ids) in self.shifts.iter().filter_map(|s| row.get_key_value(s)) {
                let flag = if ids.len() < self.min_staff_per_shift {
                    " [UNDERSTAFFED]"
                } else {
                    ""
                };
                writeln!(f, "- {shift} ({}){flag}", shift.time_range())?;
                if ids.is_empty() {
                    writeln!(f, "  * No employees assigned")?;
                }
                for id in ids {
                    writeln!(f, "  * {}", self.label(id))?;
                }
            }
        }
        Ok(())
    }
}
