//! Rostering domain models.
//!
//! Provides the core data types for representing a weekly rostering
//! problem (employees and their ranked shift preferences) and its
//! solution (a day × shift grid of staffed employees).
//!
//! # Domain Mappings
//!
//! | u-roster | Retail | Healthcare | Call Center |
//! |----------|--------|------------|-------------|
//! | Employee | Clerk | Nurse | Agent |
//! | ShiftKind | Opening/Closing | Day/Night | Early/Late |
//! | Preferences | Availability form | Shift bid | Schedule wish list |
//! | WeeklySchedule | Store rota | Ward roster | Staffing plan |

mod employee;
mod preference;
mod schedule;
mod week;

pub use employee::Employee;
pub use preference::{Preferences, Priority};
pub use schedule::{StaffingGap, WeeklySchedule};
pub use week::{Day, ShiftKind, ShiftSlot};
