//! Weekly shift rostering for the U-Engine ecosystem.
//!
//! Assigns a roster of employees to daily shifts across a week, honoring
//! each employee's ranked shift preferences while keeping every shift at
//! a minimum headcount and every employee under a workday cap.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Day`, `ShiftKind`, `Preferences`,
//!   `Employee`, `WeeklySchedule`, `StaffingGap`
//! - **`config`**: `StaffingConstraints` with TOML loading
//! - **`tiebreak`**: Gap-filling tie-break policies (least-loaded, random)
//! - **`scheduler`**: The two-phase `ShiftAssigner` and `StaffingReport`
//! - **`validation`**: Roster checks run before scheduling
//! - **`demo`**: An eight-person sample roster
//!
//! # Example
//!
//! ```
//! use u_roster::config::StaffingConstraints;
//! use u_roster::demo::sample_roster;
//! use u_roster::scheduler::generate_schedule;
//! use u_roster::validation::validate_roster;
//!
//! let constraints = StaffingConstraints::default();
//! let mut roster = sample_roster();
//! validate_roster(&roster, &constraints).unwrap();
//!
//! let schedule = generate_schedule(&mut roster, &constraints).unwrap();
//! for gap in schedule.staffing_gaps() {
//!     println!("{gap}");
//! }
//! assert!(roster.iter().all(|e| e.work_days() <= 5));
//! ```
//!
//! # Architecture
//!
//! The assigner is a greedy heuristic with no I/O and no global state.
//! Collecting employee data, persisting it and rendering schedules are
//! left to the caller; every model type derives serde for that purpose.

pub mod config;
pub mod demo;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod tiebreak;
pub mod validation;

pub use error::{Result, RosterError};
