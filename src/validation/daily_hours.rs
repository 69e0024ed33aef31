//! Daily working-time accounting.
//!
//! Computes how many net minutes a shift contributes to one specific UTC
//! calendar day, splitting shifts that cross midnight and pro-rating the
//! break in proportion to the time fraction falling in that day. For a
//! shift spanning several days, the per-day contributions sum exactly to
//! the shift's net minutes: the break is distributed, never duplicated or
//! dropped.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::Shift;
use crate::repository::ShiftRepository;

/// Returns the half-open UTC bounds `[00:00, 24:00)` of a calendar day.
pub fn day_bounds(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let day_start = day.and_hms_opt(0, 0, 0).expect("valid midnight time").and_utc();
    (day_start, day_start + Duration::days(1))
}

fn minutes_between(start: DateTime<Utc>, end: DateTime<Utc>) -> Decimal {
    Decimal::from((end - start).num_seconds()) / Decimal::from(60)
}

/// Computes the net minutes a shift contributes to the calendar day `day`.
///
/// Only the part of the shift falling within `[day 00:00, day+1 00:00)` is
/// counted, and the shift's break is attributed proportionally to that
/// part. Open shifts and shifts not touching the day contribute zero.
///
/// # Examples
///
/// ```
/// use rostercheck::models::Shift;
/// use rostercheck::validation::minutes_on_day;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use uuid::Uuid;
///
/// // 22:00 to 06:00 next day with a 45 minute break (480 minutes total).
/// let shift = Shift {
///     id: Uuid::new_v4(),
///     employee_id: Uuid::new_v4(),
///     start_time: "2026-01-15T22:00:00Z".parse().unwrap(),
///     end_time: Some("2026-01-16T06:00:00Z".parse().unwrap()),
///     break_minutes: 45,
/// };
///
/// // 120 minutes fall on the first day; a quarter of the break with them.
/// let first_day = "2026-01-15".parse().unwrap();
/// assert_eq!(minutes_on_day(&shift, first_day), Decimal::from_str("108.75").unwrap());
///
/// // 360 minutes on the second day, carrying the remaining break.
/// let second_day = "2026-01-16".parse().unwrap();
/// assert_eq!(minutes_on_day(&shift, second_day), Decimal::from_str("326.25").unwrap());
/// ```
pub fn minutes_on_day(shift: &Shift, day: NaiveDate) -> Decimal {
    let Some(end_time) = shift.end_time else {
        return Decimal::ZERO;
    };

    let (day_start, day_end) = day_bounds(day);
    let effective_start = shift.start_time.max(day_start);
    let effective_end = end_time.min(day_end);
    if effective_end <= effective_start {
        return Decimal::ZERO;
    }

    let overlap_minutes = minutes_between(effective_start, effective_end);
    let total_shift_minutes = minutes_between(shift.start_time, end_time);

    // Break is assumed spread evenly over the shift, so the day's share of
    // the break follows the day's share of the shift.
    let pause_ratio = if total_shift_minutes > Decimal::ZERO {
        overlap_minutes / total_shift_minutes
    } else {
        Decimal::ZERO
    };
    let effective_pause = Decimal::from(shift.break_minutes) * pause_ratio;

    overlap_minutes - effective_pause
}

/// Computes the total net working hours of an employee on the calendar day
/// `day`, summing the pro-rated contribution of every existing closed shift
/// touching that day.
///
/// The shift identified by `exclude_shift_id` is skipped, so an update
/// does not count the old version of the shift being changed.
pub fn total_hours_on_day(
    repo: &dyn ShiftRepository,
    employee_id: Uuid,
    day: NaiveDate,
    exclude_shift_id: Option<Uuid>,
) -> Decimal {
    let mut total_minutes = Decimal::ZERO;
    for shift in repo.shifts_overlapping_day(employee_id, day) {
        if exclude_shift_id == Some(shift.id) {
            continue;
        }
        total_minutes += minutes_on_day(&shift, day);
    }
    total_minutes / Decimal::from(60)
}
