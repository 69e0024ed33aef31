//! Shift model.
//!
//! This module defines the `Shift` struct representing a single contiguous
//! work interval for one employee, as supplied to the validator as existing
//! context.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A work shift with timing information and an unpaid break.
///
/// All timestamps are timezone-aware and normalized to UTC at the boundary;
/// calendar-day logic throughout the engine interprets days in UTC. A shift
/// without an `end_time` is open (still ongoing): it never participates in
/// overlap or hours computations, but its start still marks a working day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: Uuid,
    /// The employee this shift belongs to.
    pub employee_id: Uuid,
    /// The start time of the shift.
    pub start_time: DateTime<Utc>,
    /// The end time of the shift, absent while the shift is ongoing.
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    /// Unpaid break minutes taken during the shift.
    #[serde(default)]
    pub break_minutes: u32,
}

impl Shift {
    /// Returns the total duration of the shift in minutes, or `None` for an
    /// open shift.
    ///
    /// # Examples
    ///
    /// ```
    /// use rostercheck::models::Shift;
    /// use uuid::Uuid;
    ///
    /// let shift = Shift {
    ///     id: Uuid::new_v4(),
    ///     employee_id: Uuid::new_v4(),
    ///     start_time: "2026-01-15T08:00:00Z".parse().unwrap(),
    ///     end_time: Some("2026-01-15T16:00:00Z".parse().unwrap()),
    ///     break_minutes: 30,
    /// };
    /// assert_eq!(shift.total_minutes(), Some(480));
    /// ```
    pub fn total_minutes(&self) -> Option<i64> {
        self.end_time.map(|end| (end - self.start_time).num_minutes())
    }

    /// Returns the net working minutes of the shift (duration minus break),
    /// floored at zero, or `None` for an open shift.
    pub fn net_minutes(&self) -> Option<Decimal> {
        self.total_minutes().map(|total| {
            let net = Decimal::from(total) - Decimal::from(self.break_minutes);
            net.max(Decimal::ZERO)
        })
    }

    /// Returns the calendar day the shift belongs to: the UTC date of its
    /// start time.
    pub fn shift_date(&self) -> NaiveDate {
        self.start_time.date_naive()
    }

    /// Returns `true` if the shift ends on a later UTC calendar day than it
    /// starts on. Open shifts never report as crossing midnight.
    pub fn crosses_midnight(&self) -> bool {
        self.end_time
            .is_some_and(|end| end.date_naive() > self.start_time.date_naive())
    }
}
