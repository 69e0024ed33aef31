//! Error types for the shift validation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate,
//! split into two taxonomies: [`Violation`] for business-rule outcomes of a
//! validation pass, and [`ConfigError`] for failures while loading the rule
//! limits configuration.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// A violated business rule, produced by a validation pass.
///
/// The validator returns the first violation encountered and performs no
/// further checks; variants are mutually exclusive per call. Each variant
/// carries a stable payload sufficient for the caller to map the outcome
/// onto its own transport (HTTP status, UI message, ...).
///
/// # Example
///
/// ```
/// use rostercheck::error::Violation;
/// use uuid::Uuid;
///
/// let conflict = Uuid::nil();
/// let violation = Violation::Overlap { conflicting_shift_id: conflict };
/// assert_eq!(
///     violation.to_string(),
///     format!("shift overlaps with existing shift {conflict}")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    /// The candidate interval is not a valid time range.
    #[error("shift end {end} must be after shift start {start}")]
    InvalidTimeRange {
        /// The candidate start time.
        start: DateTime<Utc>,
        /// The candidate end time.
        end: DateTime<Utc>,
    },

    /// The candidate interval collides with an existing shift.
    #[error("shift overlaps with existing shift {conflicting_shift_id}")]
    Overlap {
        /// The id of the first conflicting shift, in repository order.
        conflicting_shift_id: Uuid,
    },

    /// Creating this shift would start one consecutive working day too many.
    #[error("maximum consecutive working days reached: already worked {days_worked} days")]
    ConsecutiveDaysExceeded {
        /// Unbroken working days counted immediately before the shift date.
        days_worked: u32,
    },

    /// Net working hours on the shift's calendar day would exceed the cap.
    #[error("maximum daily working time exceeded: {total_hours} hours in total")]
    DailyHoursExceeded {
        /// The computed net hours for the day, candidate included.
        total_hours: Decimal,
    },
}

/// The outcome of a validation pass: success, or the first violated rule.
pub type ValidationResult = Result<(), Violation>;

/// An error while loading the rule limits configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file was not found at the specified path.
    #[error("configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
