//! Built-in tie-break policies.
//!
//! - **Deterministic**: LEAST_LOADED, ROSTER_ORDER
//! - **Seeded**: RANDOM

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Candidate, TieBreakPolicy};
use crate::models::ShiftSlot;

/// Least-loaded first.
///
/// Picks the candidate with the fewest days assigned so far; ties go to
/// the earlier roster position. Spreads gap-filling work evenly and is
/// fully deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastLoaded;

impl TieBreakPolicy for LeastLoaded {
    fn name(&self) -> &'static str {
        "LEAST_LOADED"
    }

    fn choose(&mut self, _slot: ShiftSlot, candidates: &[Candidate<'_>]) -> usize {
        candidates
            .iter()
            .enumerate()
            .min_by_key(|(_, c)| (c.days_worked, c.roster_index))
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn description(&self) -> &'static str {
        "Least Loaded First"
    }
}

/// Uniform random choice among candidates.
///
/// Reproducible for a fixed seed. Does not balance workload.
#[derive(Debug, Clone)]
pub struct UniformRandom {
    rng: StdRng,
}

impl UniformRandom {
    /// Wraps an existing generator.
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    /// Creates a policy seeded for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl TieBreakPolicy for UniformRandom {
    fn name(&self) -> &'static str {
        "RANDOM"
    }

    fn choose(&mut self, _slot: ShiftSlot, candidates: &[Candidate<'_>]) -> usize {
        if candidates.len() <= 1 {
            return 0;
        }
        self.rng.random_range(0..candidates.len())
    }

    fn description(&self) -> &'static str {
        "Uniform Random"
    }
}

/// First candidate in roster order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RosterOrder;

impl TieBreakPolicy for RosterOrder {
    fn name(&self) -> &'static str {
        "ROSTER_ORDER"
    }

    fn choose(&mut self, _slot: ShiftSlot, _candidates: &[Candidate<'_>]) -> usize {
        0
    }

    fn description(&self) -> &'static str {
        "Roster Order"
    }
}
