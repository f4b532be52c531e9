//! Staffing quality metrics.
//!
//! Computes coverage, workload and preference indicators from a
//! completed weekly schedule and the roster it was built from.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Fill Rate | Fraction of cells at or above minimum headcount |
//! | Total Shortfall | Sum of missing headcount across cells |
//! | Workload Spread | Max minus min workdays across employees |
//! | First-Choice Rate | Fraction of assignments on a priority-1 shift |
//! | Ranked Rate | Fraction of assignments on any stated preference |

use std::collections::HashMap;

use crate::models::{Employee, Priority, StaffingGap, WeeklySchedule};

/// Schedule staffing indicators.
#[derive(Debug, Clone)]
pub struct StaffingReport {
    /// Number of (day, shift) cells.
    pub total_cells: usize,
    /// Cells reaching the minimum headcount.
    pub staffed_cells: usize,
    /// Understaffed cells, in week order.
    pub gaps: Vec<StaffingGap>,
    /// Sum of missing headcount.
    pub total_shortfall: usize,
    /// Fraction of staffed cells (0.0..1.0).
    pub fill_rate: f64,
    /// Workdays per employee id.
    pub workdays_by_employee: HashMap<String, usize>,
    /// Largest minus smallest workday count.
    pub workload_spread: usize,
    /// Total employee-shift assignments.
    pub assignments: usize,
    /// Assignments on a priority-1 shift.
    pub first_choice_assignments: usize,
    /// Assignments on any stated preference.
    pub ranked_assignments: usize,
}

impl StaffingReport {
    /// Computes the report from a schedule and its roster.
    pub fn calculate(schedule: &WeeklySchedule, employees: &[Employee]) -> Self {
        let gaps = schedule.staffing_gaps();
        let total_cells = schedule.cell_count();
        let staffed_cells = total_cells - gaps.len();
        let total_shortfall: usize = gaps.iter().map(StaffingGap::shortfall).sum();

        let fill_rate = if total_cells == 0 {
            1.0
        } else {
            staffed_cells as f64 / total_cells as f64
        };

        let mut workdays_by_employee = HashMap::new();
        let mut first_choice_assignments = 0;
        let mut ranked_assignments = 0;

        for employee in employees {
            workdays_by_employee.insert(employee.id.clone(), schedule.work_days(&employee.id));

            for slot in schedule.slots_for(&employee.id) {
                let priority = employee.preferences.priority(slot.day, slot.shift);
                if priority == Priority::MOST_PREFERRED {
                    first_choice_assignments += 1;
                }
                if priority.is_ranked() {
                    ranked_assignments += 1;
                }
            }
        }

        let workload_spread = match (
            workdays_by_employee.values().max(),
            workdays_by_employee.values().min(),
        ) {
            (Some(max), Some(min)) => max - min,
            _ => 0,
        };

        Self {
            total_cells,
            staffed_cells,
            gaps,
            total_shortfall,
            fill_rate,
            workdays_by_employee,
            workload_spread,
            assignments: schedule.assignment_count(),
            first_choice_assignments,
            ranked_assignments,
        }
    }

    /// Fraction of assignments on a priority-1 shift (1.0 when empty).
    pub fn first_choice_rate(&self) -> f64 {
        if self.assignments == 0 {
            1.0
        } else {
            self.first_choice_assignments as f64 / self.assignments as f64
        }
    }

    /// Fraction of assignments on any stated preference (1.0 when empty).
    pub fn ranked_rate(&self) -> f64 {
        if self.assignments == 0 {
            1.0
        } else {
            self.ranked_assignments as f64 / self.assignments as f64
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_gaps: usize, min_fill_rate: f64) -> bool {
        self.gaps.len() <= max_gaps && self.fill_rate >= min_fill_rate
    }
}
