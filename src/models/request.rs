//! Validation request model.
//!
//! A [`ShiftRequest`] describes the candidate interval under validation:
//! who wants to work, from when to when, with how much break. For updates it
//! also names the shift being updated, so that shift is excluded from
//! comparisons against itself.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Violation;

/// A request to validate a candidate shift interval.
///
/// Built with [`ShiftRequest::create`] for new shifts or
/// [`ShiftRequest::update`] when changing an existing one. The presence of
/// `exclude_shift_id` both removes that shift from comparisons and disables
/// the consecutive-day rule, which applies only at creation time.
///
/// # Example
///
/// ```
/// use rostercheck::models::ShiftRequest;
/// use uuid::Uuid;
///
/// let request = ShiftRequest::create(
///     Uuid::new_v4(),
///     "2026-01-15T08:00:00Z".parse().unwrap(),
///     "2026-01-15T16:00:00Z".parse().unwrap(),
///     30,
/// );
/// assert!(request.check_time_range().is_ok());
/// assert_eq!(request.net_hours().to_string(), "7.5");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// The employee the candidate shift belongs to.
    pub employee_id: Uuid,
    /// The candidate start time.
    pub start_time: DateTime<Utc>,
    /// The candidate end time.
    pub end_time: DateTime<Utc>,
    /// Unpaid break minutes planned for the candidate shift.
    #[serde(default)]
    pub break_minutes: u32,
    /// The shift being updated, excluded from comparisons against itself.
    /// Absent for creation requests.
    #[serde(default)]
    pub exclude_shift_id: Option<Uuid>,
}

impl ShiftRequest {
    /// Builds a request for creating a new shift.
    pub fn create(
        employee_id: Uuid,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        break_minutes: u32,
    ) -> Self {
        Self {
            employee_id,
            start_time,
            end_time,
            break_minutes,
            exclude_shift_id: None,
        }
    }

    /// Builds a request for updating the shift identified by `shift_id`.
    pub fn update(
        shift_id: Uuid,
        employee_id: Uuid,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        break_minutes: u32,
    ) -> Self {
        Self {
            employee_id,
            start_time,
            end_time,
            break_minutes,
            exclude_shift_id: Some(shift_id),
        }
    }

    /// Returns `true` if this request updates an existing shift.
    pub fn is_update(&self) -> bool {
        self.exclude_shift_id.is_some()
    }

    /// Checks that the candidate interval is a valid time range.
    ///
    /// The caller's input schema normally enforces this; the engine guards
    /// defensively as well and fails fast instead of dividing by zero later.
    pub fn check_time_range(&self) -> Result<(), Violation> {
        if self.end_time <= self.start_time {
            return Err(Violation::InvalidTimeRange {
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }

    /// Returns the calendar day the candidate shift belongs to: the UTC
    /// date of its start time.
    pub fn shift_date(&self) -> NaiveDate {
        self.start_time.date_naive()
    }

    /// Returns the candidate's own net working hours:
    /// `(end - start) - break`, expressed in hours.
    pub fn net_hours(&self) -> Decimal {
        let duration_minutes = Decimal::from((self.end_time - self.start_time).num_minutes());
        let break_minutes = Decimal::from(self.break_minutes);
        (duration_minutes - break_minutes) / Decimal::from(60)
    }
}
