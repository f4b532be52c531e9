//! Error types for u-roster.

use thiserror::Error;

/// Errors raised by configuration loading and by contract violations.
///
/// An understaffed schedule is not an error; see
/// [`StaffingGap`](crate::models::StaffingGap).
#[derive(Debug, Error)]
pub enum RosterError {
    /// Constraint values no run can honor (e.g. zero minimum headcount).
    #[error("Invalid constraints: {0}")]
    InvalidConstraints(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for u-roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;
