//! Staffing constraints and engine configuration.
//!
//! Constraints can be built in code or loaded from TOML:
//!
//! ```
//! use u_roster::config::{StaffingConstraints, TieBreakKind};
//! use u_roster::models::ShiftKind;
//!
//! let constraints = StaffingConstraints::from_toml_str(r#"
//!     min_staff_per_shift = 3
//!     max_work_days_per_week = 4
//!     shifts = ["morning", "evening"]
//!     tie_break = "random"
//!     seed = 7
//! "#).unwrap();
//!
//! assert_eq!(constraints.min_staff_per_shift, 3);
//! assert_eq!(constraints.shifts, vec![ShiftKind::Morning, ShiftKind::Night]);
//! assert_eq!(constraints.tie_break, TieBreakKind::Random);
//! assert_eq!(constraints.required_roster_size(), 6);
//! ```

use std::collections::HashSet;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};
use crate::models::{Day, ShiftKind};
use crate::tiebreak::{LeastLoaded, RosterOrder, TieBreakPolicy, UniformRandom};

/// Default minimum headcount per (day, shift) cell.
pub const DEFAULT_MIN_STAFF_PER_SHIFT: usize = 2;

/// Default cap on distinct workdays per employee per week.
pub const DEFAULT_MAX_WORK_DAYS_PER_WEEK: usize = 5;

/// Which gap-filling tie-break policy a run uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreakKind {
    /// Fewest days assigned so far, then roster order.
    #[default]
    LeastLoaded,
    /// Uniform choice among eligible employees.
    Random,
    /// First eligible employee in roster order.
    RosterOrder,
}

/// Staffing constraints for a scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct StaffingConstraints {
    /// Minimum employees per (day, shift) cell.
    pub min_staff_per_shift: usize,
    /// Maximum distinct workdays per employee.
    pub max_work_days_per_week: usize,
    /// Shifts to staff each day, in fill order.
    pub shifts: Vec<ShiftKind>,
    /// Gap-filling tie-break policy.
    pub tie_break: TieBreakKind,
    /// Seed for [`TieBreakKind::Random`]. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for StaffingConstraints {
    fn default() -> Self {
        Self {
            min_staff_per_shift: DEFAULT_MIN_STAFF_PER_SHIFT,
            max_work_days_per_week: DEFAULT_MAX_WORK_DAYS_PER_WEEK,
            shifts: ShiftKind::ALL.to_vec(),
            tie_break: TieBreakKind::default(),
            seed: None,
        }
    }
}

impl StaffingConstraints {
    /// Loads constraints from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates constraints from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let constraints: Self = toml::from_str(s)?;
        constraints.validate()?;
        Ok(constraints)
    }

    pub fn with_min_staff_per_shift(mut self, n: usize) -> Self {
        self.min_staff_per_shift = n;
        self
    }

    pub fn with_max_work_days_per_week(mut self, n: usize) -> Self {
        self.max_work_days_per_week = n;
        self
    }

    pub fn with_shifts(mut self, shifts: impl IntoIterator<Item = ShiftKind>) -> Self {
        self.shifts = shifts.into_iter().collect();
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreakKind) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Smallest roster that can structurally staff every shift of a day.
    ///
    /// Saturates at `usize::MAX` for absurd minimums.
    pub fn required_roster_size(&self) -> usize {
        self.min_staff_per_shift.saturating_mul(self.shifts.len())
    }

    /// Validates the constraints.
    pub fn validate(&self) -> Result<()> {
        if self.min_staff_per_shift == 0 {
            return Err(RosterError::InvalidConstraints(
                "min_staff_per_shift must be positive".into(),
            ));
        }
        if self.max_work_days_per_week == 0 {
            return Err(RosterError::InvalidConstraints(
                "max_work_days_per_week must be positive".into(),
            ));
        }
        if self.max_work_days_per_week > Day::ALL.len() {
            return Err(RosterError::InvalidConstraints(format!(
                "max_work_days_per_week must be at most {}, got {}",
                Day::ALL.len(),
                self.max_work_days_per_week
            )));
        }
        if self.shifts.is_empty() {
            return Err(RosterError::InvalidConstraints(
                "at least one shift must be scheduled".into(),
            ));
        }
        let mut seen = HashSet::new();
        for shift in &self.shifts {
            if !seen.insert(shift) {
                return Err(RosterError::InvalidConstraints(format!(
                    "shift {shift} is listed more than once"
                )));
            }
        }
        Ok(())
    }

    /// Builds the tie-break policy this configuration selects.
    pub fn tie_break_policy(&self) -> Box<dyn TieBreakPolicy> {
        match self.tie_break {
            TieBreakKind::LeastLoaded => Box::new(LeastLoaded),
            TieBreakKind::RosterOrder => Box::new(RosterOrder),
            TieBreakKind::Random => {
                let seed = self.seed.unwrap_or_else(rand::random);
                Box::new(UniformRandom::new(StdRng::seed_from_u64(seed)))
            }
        }
    }
}
