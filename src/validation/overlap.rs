//! Interval-overlap detection.
//!
//! Decides whether a candidate interval collides with an existing shift of
//! the same employee. The business rule is a union of three cases, not the
//! generic interval-intersection test, and is reproduced here exactly as
//! specified by the scheduling policy.

use chrono::{DateTime, Utc};

use crate::models::Shift;

/// Returns `true` if the existing shift overlaps the candidate interval
/// `[start, end)`.
///
/// The rule is the union of three cases:
///
/// 1. the candidate starts inside the existing shift,
/// 2. the candidate ends inside the existing shift,
/// 3. the candidate fully encloses the existing shift.
///
/// Touching endpoints are not overlaps: a candidate starting exactly when
/// an existing shift ends (or ending exactly when one starts) passes.
/// Open shifts (no `end_time`) never collide and always return `false`.
///
/// # Examples
///
/// ```
/// use rostercheck::models::Shift;
/// use rostercheck::validation::overlaps;
/// use uuid::Uuid;
///
/// let existing = Shift {
///     id: Uuid::new_v4(),
///     employee_id: Uuid::new_v4(),
///     start_time: "2026-01-15T08:00:00Z".parse().unwrap(),
///     end_time: Some("2026-01-15T16:00:00Z".parse().unwrap()),
///     break_minutes: 30,
/// };
///
/// // Candidate starting inside the existing shift collides.
/// assert!(overlaps(
///     &existing,
///     "2026-01-15T14:00:00Z".parse().unwrap(),
///     "2026-01-15T18:00:00Z".parse().unwrap(),
/// ));
///
/// // Back-to-back candidate starting at the existing end passes.
/// assert!(!overlaps(
///     &existing,
///     "2026-01-15T16:00:00Z".parse().unwrap(),
///     "2026-01-15T20:00:00Z".parse().unwrap(),
/// ));
/// ```
pub fn overlaps(existing: &Shift, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    let Some(existing_end) = existing.end_time else {
        return false;
    };
    let existing_start = existing.start_time;

    // Candidate starts inside the existing shift.
    (existing_start <= start && existing_end > start)
        // Candidate ends inside the existing shift.
        || (existing_start < end && existing_end >= end)
        // Candidate fully encloses the existing shift.
        || (existing_start >= start && existing_end <= end)
}

/// Returns the first shift in `shifts` that overlaps the candidate interval
/// `[start, end)`, in the order supplied.
pub fn find_overlap<'a>(
    shifts: &'a [Shift],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Option<&'a Shift> {
    shifts.iter().find(|shift| overlaps(shift, start, end))
}
