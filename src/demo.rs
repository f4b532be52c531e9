//! Sample roster for demos and tests.
//!
//! Eight employees with varied per-day preferences across the three
//! standard shifts. Eight people at five days each give 40 employee-days
//! against 42 required slots, so a default run always leaves a little
//! understaffing to look at.

use crate::models::{Day, Employee, ShiftKind};

use Day::*;
use ShiftKind::*;

type Ranks = &'static [(Day, ShiftKind, u32)];

const SAMPLE: [(&str, &str, Ranks); 8] = [
    (
        "1",
        "Alice Johnson",
        &[
            (Monday, Morning, 1),
            (Monday, Afternoon, 2),
            (Tuesday, Morning, 1),
            (Wednesday, Afternoon, 1),
            (Wednesday, Night, 2),
            (Thursday, Morning, 2),
            (Thursday, Afternoon, 1),
            (Friday, Afternoon, 1),
            (Saturday, Night, 1),
            (Sunday, Morning, 1),
        ],
    ),
    (
        "2",
        "Bob Smith",
        &[
            (Monday, Afternoon, 1),
            (Monday, Night, 2),
            (Tuesday, Night, 1),
            (Wednesday, Morning, 2),
            (Wednesday, Afternoon, 1),
            (Thursday, Night, 1),
            (Friday, Morning, 1),
            (Friday, Afternoon, 2),
            (Saturday, Morning, 1),
            (Sunday, Afternoon, 1),
        ],
    ),
    (
        "3",
        "Carol Davis",
        &[
            (Monday, Night, 1),
            (Tuesday, Morning, 1),
            (Tuesday, Afternoon, 2),
            (Wednesday, Night, 1),
            (Thursday, Morning, 1),
            (Friday, Night, 1),
            (Saturday, Afternoon, 1),
            (Saturday, Night, 2),
            (Sunday, Night, 1),
        ],
    ),
    (
        "4",
        "David Wilson",
        &[
            (Monday, Morning, 2),
            (Monday, Afternoon, 1),
            (Tuesday, Afternoon, 1),
            (Tuesday, Night, 2),
            (Wednesday, Morning, 1),
            (Thursday, Afternoon, 2),
            (Thursday, Night, 1),
            (Friday, Morning, 1),
            (Saturday, Morning, 2),
            (Saturday, Afternoon, 1),
            (Sunday, Afternoon, 2),
            (Sunday, Night, 1),
        ],
    ),
    (
        "5",
        "Emma Brown",
        &[
            (Monday, Morning, 1),
            (Tuesday, Morning, 2),
            (Tuesday, Afternoon, 1),
            (Wednesday, Morning, 1),
            (Wednesday, Afternoon, 2),
            (Thursday, Morning, 1),
            (Friday, Afternoon, 1),
            (Friday, Night, 2),
            (Saturday, Night, 1),
            (Sunday, Morning, 2),
            (Sunday, Afternoon, 1),
        ],
    ),
    (
        "6",
        "Frank Miller",
        &[
            (Monday, Night, 1),
            (Tuesday, Night, 1),
            (Wednesday, Afternoon, 2),
            (Wednesday, Night, 1),
            (Thursday, Night, 1),
            (Friday, Night, 1),
            (Saturday, Morning, 1),
            (Saturday, Night, 2),
            (Sunday, Night, 1),
        ],
    ),
    (
        "7",
        "Grace Lee",
        &[
            (Monday, Afternoon, 1),
            (Monday, Night, 2),
            (Tuesday, Morning, 1),
            (Tuesday, Afternoon, 2),
            (Wednesday, Afternoon, 1),
            (Thursday, Morning, 2),
            (Thursday, Afternoon, 1),
            (Friday, Morning, 1),
            (Saturday, Afternoon, 1),
            (Sunday, Morning, 1),
            (Sunday, Afternoon, 2),
        ],
    ),
    (
        "8",
        "Henry Taylor",
        &[
            (Monday, Morning, 1),
            (Monday, Night, 2),
            (Tuesday, Morning, 1),
            (Wednesday, Morning, 2),
            (Wednesday, Night, 1),
            (Thursday, Morning, 1),
            (Friday, Morning, 2),
            (Friday, Night, 1),
            (Saturday, Morning, 1),
            (Sunday, Night, 1),
        ],
    ),
];

/// The eight-person sample roster.
pub fn sample_roster() -> Vec<Employee> {
    SAMPLE
        .iter()
        .map(|&(id, name, ranks)| {
            ranks
                .iter()
                .fold(Employee::new(id).with_name(name), |e, &(day, shift, rank)| {
                    e.with_preference(day, shift, rank)
                })
        })
        .collect()
}
