//! Shift preference model.
//!
//! Each employee ranks (day, shift) pairs with a small positive integer,
//! where 1 is the most preferred. Pairs without a stated rank are
//! "no preference" and compare worse than every stated rank; they never
//! mean "unavailable".

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::{Day, ShiftKind};

/// Preference rank for a (day, shift) pair. Lower = more preferred.
///
/// Stated ranks are `u32`; they are held widened so the unranked sentinel
/// lies outside every value a caller can state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u64")]
pub struct Priority(u64);

impl Priority {
    /// The best possible rank.
    pub const MOST_PREFERRED: Priority = Priority(1);
    /// Sentinel for pairs without a stated rank. Sorts after every stated rank.
    pub const UNRANKED: Priority = Priority(u64::MAX);

    /// Wraps a raw rank.
    pub fn new(rank: u32) -> Self {
        Self(u64::from(rank))
    }

    /// Raw rank value.
    #[inline]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Whether this is a stated rank (not the unranked sentinel).
    #[inline]
    pub fn is_ranked(self) -> bool {
        self != Self::UNRANKED
    }
}

impl From<u32> for Priority {
    fn from(rank: u32) -> Self {
        Self::new(rank)
    }
}

impl From<Priority> for u64 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ranked() {
            write!(f, "Priority {}", self.0)
        } else {
            f.write_str("Not preferred")
        }
    }
}

/// Per-employee preference table: day → shift → rank.
///
/// Serializes as `{"monday": {"morning": 1, "afternoon": 2}, ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences {
    ranks: BTreeMap<Day, BTreeMap<ShiftKind, Priority>>,
}

impl Preferences {
    /// Creates an empty table (no stated preferences).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rank (builder form).
    pub fn with(mut self, day: Day, shift: ShiftKind, rank: u32) -> Self {
        self.set(day, shift, rank);
        self
    }

    /// Sets a rank, replacing any previous one for the pair.
    pub fn set(&mut self, day: Day, shift: ShiftKind, rank: u32) {
        self.ranks
            .entry(day)
            .or_default()
            .insert(shift, Priority::new(rank));
    }

    /// Removes the rank for a pair, returning it to "no preference".
    pub fn clear(&mut self, day: Day, shift: ShiftKind) {
        if let Some(day_ranks) = self.ranks.get_mut(&day) {
            day_ranks.remove(&shift);
            if day_ranks.is_empty() {
                self.ranks.remove(&day);
            }
        }
    }

    /// Rank for a pair. Total: missing entries yield [`Priority::UNRANKED`].
    pub fn priority(&self, day: Day, shift: ShiftKind) -> Priority {
        self.ranks
            .get(&day)
            .and_then(|day_ranks| day_ranks.get(&shift))
            .copied()
            .unwrap_or(Priority::UNRANKED)
    }

    /// Orders `shifts` by this employee's rank for `day`, best first.
    ///
    /// Unranked shifts come last; equal ranks keep their order in `shifts`.
    pub fn ranked(&self, day: Day, shifts: &[ShiftKind]) -> Vec<ShiftKind> {
        let mut order = shifts.to_vec();
        order.sort_by_key(|&shift| self.priority(day, shift));
        order
    }

    /// Stated ranks for a day, best first.
    pub fn stated_for(&self, day: Day) -> Vec<(ShiftKind, Priority)> {
        let mut stated: Vec<(ShiftKind, Priority)> = self
            .ranks
            .get(&day)
            .map(|day_ranks| day_ranks.iter().map(|(&s, &p)| (s, p)).collect())
            .unwrap_or_default();
        stated.sort_by_key(|&(shift, priority)| (priority, shift));
        stated
    }

    /// Iterates every stated (day, shift, rank) entry.
    pub fn iter(&self) -> impl Iterator<Item = (Day, ShiftKind, Priority)> + '_ {
        self.ranks.iter().flat_map(|(&day, day_ranks)| {
            day_ranks
                .iter()
                .map(move |(&shift, &priority)| (day, shift, priority))
        })
    }

    /// Number of stated entries.
    pub fn len(&self) -> usize {
        self.ranks.values().map(BTreeMap::len).sum()
    }

    /// Whether no preference is stated at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Preferences {
        Preferences::new()
            .with(Day::Monday, ShiftKind::Night, 1)
            .with(Day::Monday, ShiftKind::Morning, 2)
            .with(Day::Tuesday, ShiftKind::Afternoon, 1)
    }

    #[test]
    fn test_missing_is_unranked() {
        let prefs = sample();
        assert_eq!(prefs.priority(Day::Monday, ShiftKind::Night), Priority::new(1));
        assert_eq!(
            prefs.priority(Day::Monday, ShiftKind::Afternoon),
            Priority::UNRANKED
        );
        assert_eq!(prefs.priority(Day::Sunday, ShiftKind::Morning), Priority::UNRANKED);
        assert!(Priority::new(1000) < Priority::UNRANKED);
        assert!(!Priority::UNRANKED.is_ranked());
    }

    #[test]
    fn test_ranked_order() {
        let prefs = sample();
        let order = prefs.ranked(Day::Monday, &ShiftKind::ALL);
        assert_eq!(
            order,
            vec![ShiftKind::Night, ShiftKind::Morning, ShiftKind::Afternoon]
        );

        // No stated preferences → configured order preserved
        let order = prefs.ranked(Day::Friday, &ShiftKind::ALL);
        assert_eq!(order, ShiftKind::ALL.to_vec());
    }

    #[test]
    fn test_ranked_ties_keep_shift_order() {
        let prefs = Preferences::new()
            .with(Day::Monday, ShiftKind::Night, 1)
            .with(Day::Monday, ShiftKind::Morning, 1);
        let order = prefs.ranked(Day::Monday, &ShiftKind::ALL);
        assert_eq!(
            order,
            vec![ShiftKind::Morning, ShiftKind::Night, ShiftKind::Afternoon]
        );
    }

    #[test]
    fn test_set_and_clear() {
        let mut prefs = sample();
        assert_eq!(prefs.len(), 3);
        prefs.set(Day::Monday, ShiftKind::Night, 3);
        assert_eq!(prefs.priority(Day::Monday, ShiftKind::Night), Priority::new(3));
        prefs.clear(Day::Tuesday, ShiftKind::Afternoon);
        assert_eq!(prefs.len(), 2);
        assert!(prefs.stated_for(Day::Tuesday).is_empty());
    }

    #[test]
    fn test_stated_for_sorted() {
        let prefs = sample();
        let stated = prefs.stated_for(Day::Monday);
        assert_eq!(
            stated,
            vec![
                (ShiftKind::Night, Priority::new(1)),
                (ShiftKind::Morning, Priority::new(2)),
            ]
        );
    }

    #[test]
    fn test_largest_stated_rank_is_still_ranked() {
        let prefs = Preferences::new().with(Day::Monday, ShiftKind::Night, u32::MAX);
        let stated = prefs.priority(Day::Monday, ShiftKind::Night);

        assert!(Priority::new(u32::MAX) < Priority::UNRANKED);
        assert!(stated.is_ranked());
        assert_ne!(stated, prefs.priority(Day::Monday, ShiftKind::Morning));
        assert_eq!(
            prefs.ranked(Day::Monday, &ShiftKind::ALL),
            vec![ShiftKind::Night, ShiftKind::Morning, ShiftKind::Afternoon]
        );
    }

    #[test]
    fn test_priority_labels() {
        assert_eq!(Priority::new(2).to_string(), "Priority 2");
        assert_eq!(Priority::UNRANKED.to_string(), "Not preferred");
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{"monday": {"morning": 1, "afternoon": 2}, "saturday": {"evening": 1}}"#;
        let prefs: Preferences = serde_json::from_str(json).unwrap();
        assert_eq!(prefs.priority(Day::Monday, ShiftKind::Afternoon), Priority::new(2));
        assert_eq!(prefs.priority(Day::Saturday, ShiftKind::Night), Priority::new(1));

        let back = serde_json::to_value(&prefs).unwrap();
        assert_eq!(back["monday"]["morning"], 1);
        assert_eq!(back["saturday"]["night"], 1);

        // Ranks beyond u32 are rejected rather than colliding with "unranked"
        let too_big = r#"{"monday": {"morning": 18446744073709551615}}"#;
        assert!(serde_json::from_str::<Preferences>(too_big).is_err());
    }
}
