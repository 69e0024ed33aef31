//! Consecutive working-day counting.
//!
//! Counts how many calendar days immediately before a target date already
//! contain at least one shift for the employee, walking backward one day at
//! a time and stopping at the first gap or at the lookback cap.

use chrono::{Days, NaiveDate};
use uuid::Uuid;

use crate::repository::ShiftRepository;

/// Counts the unbroken working days immediately preceding `target_date`.
///
/// Starting at the day before `target_date`, each day is checked for at
/// least one shift *starting* on it; the walk stops at the first day with
/// none, or after `max_lookback` days. The result is in
/// `[0, max_lookback]`.
///
/// Membership is decided by shift start time only: a shift starting at
/// 23:50 counts for that day, and a shift starting just after midnight
/// does not count for the previous day even if most of its hours fall
/// there.
pub fn consecutive_days_before(
    repo: &dyn ShiftRepository,
    employee_id: Uuid,
    target_date: NaiveDate,
    max_lookback: u32,
) -> u32 {
    let mut consecutive_days = 0;
    let mut current_date = target_date - Days::new(1);

    for _ in 0..max_lookback {
        if repo.shifts_starting_on_day(employee_id, current_date).is_empty() {
            break;
        }
        consecutive_days += 1;
        current_date = current_date - Days::new(1);
    }

    consecutive_days
}
