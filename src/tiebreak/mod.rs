//! Tie-break policies for gap filling.
//!
//! When a shift is still below its minimum headcount after the
//! preference pass, the engine collects every eligible employee and asks
//! a [`TieBreakPolicy`] to pick one. No preference data is available at
//! that point, so the choice is pure policy.
//!
//! # Usage
//!
//! ```
//! use u_roster::tiebreak::{Candidate, LeastLoaded, TieBreakPolicy};
//! use u_roster::models::{Day, ShiftKind, ShiftSlot};
//!
//! let candidates = [
//!     Candidate::new(0, "E1", 3),
//!     Candidate::new(1, "E2", 1),
//! ];
//! let slot = ShiftSlot::new(Day::Monday, ShiftKind::Night);
//! assert_eq!(LeastLoaded.choose(slot, &candidates), 1);
//! ```

mod rules;

pub use rules::{LeastLoaded, RosterOrder, UniformRandom};

use crate::models::ShiftSlot;
use std::fmt::Debug;

/// An employee eligible to fill an open slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Position in the roster passed to the engine.
    pub roster_index: usize,
    /// Employee id.
    pub employee_id: &'a str,
    /// Distinct days already assigned this week.
    pub days_worked: usize,
}

impl<'a> Candidate<'a> {
    pub fn new(roster_index: usize, employee_id: &'a str, days_worked: usize) -> Self {
        Self {
            roster_index,
            employee_id,
            days_worked,
        }
    }
}

/// Chooses which eligible employee fills an understaffed slot.
///
/// `candidates` is never empty and is ordered by roster position.
/// Implementations return an index into `candidates`.
pub trait TieBreakPolicy: Send + Debug {
    /// Policy name (e.g., "LEAST_LOADED").
    fn name(&self) -> &'static str;

    /// Picks one candidate for `slot`.
    fn choose(&mut self, slot: ShiftSlot, candidates: &[Candidate<'_>]) -> usize;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
