//! Greedy shift assignment and staffing metrics.
//!
//! # Algorithm
//!
//! `ShiftAssigner` runs a preference-driven pass followed by a
//! gap-filling pass. It is a greedy heuristic, not an optimal solver:
//! it is fast and predictable, and never fails for lack of staff.
//!
//! # Report
//!
//! `StaffingReport` computes coverage, workload spread and preference
//! satisfaction for a finished schedule.

mod assigner;
mod report;

pub use assigner::{generate_schedule, ShiftAssigner};
pub use report::StaffingReport;
