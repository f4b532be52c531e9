//! Week and shift vocabulary.
//!
//! Defines the fixed set of weekdays a roster covers and the named shifts
//! within each day. Ordering of both enums is declaration order, which the
//! engine uses for deterministic iteration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A day of the scheduling week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All days in week order (Monday first).
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Zero-based position in the week.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display name ("Monday").
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named work period within a day.
///
/// The engine only schedules the shifts listed in its constraints, so a
/// deployment can run with a subset (e.g. two-shift days).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftKind {
    /// 06:00 - 14:00.
    Morning,
    /// 14:00 - 22:00.
    Afternoon,
    /// 22:00 - 06:00 (next day).
    #[serde(alias = "evening")]
    Night,
}

impl ShiftKind {
    /// All shifts in day order.
    pub const ALL: [ShiftKind; 3] = [ShiftKind::Morning, ShiftKind::Afternoon, ShiftKind::Night];

    /// Display name ("Morning").
    pub fn name(self) -> &'static str {
        match self {
            ShiftKind::Morning => "Morning",
            ShiftKind::Afternoon => "Afternoon",
            ShiftKind::Night => "Night",
        }
    }

    /// Wall-clock window label, e.g. `"06:00-14:00"`.
    pub fn time_range(self) -> &'static str {
        match self {
            ShiftKind::Morning => "06:00-14:00",
            ShiftKind::Afternoon => "14:00-22:00",
            ShiftKind::Night => "22:00-06:00",
        }
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A (day, shift) cell of the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShiftSlot {
    pub day: Day,
    pub shift: ShiftKind,
}

impl ShiftSlot {
    pub fn new(day: Day, shift: ShiftKind) -> Self {
        Self { day, shift }
    }
}

impl fmt::Display for ShiftSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day: {}, Shift: {}", self.day, self.shift)
    }
}
