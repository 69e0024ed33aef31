//! Read-only shift repository abstraction.
//!
//! The validation engine owns no persistent state; the shifts that already
//! exist for an employee are supplied through the [`ShiftRepository`] trait.
//! The three queries describe exactly what each rule needs. An
//! implementation may satisfy all of them from a single "all shifts of the
//! employee" lookup filtered in memory, which is what
//! [`InMemoryShiftRepository`] does.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::models::Shift;
use crate::validation::day_bounds;

/// Read-only view of an employee's existing shifts.
///
/// All queries are synchronous snapshot reads; the engine never writes.
/// Shifts are returned in a stable order (as stored), which determines
/// which conflicting shift an overlap violation cites.
pub trait ShiftRepository {
    /// Returns the employee's closed shifts as overlap candidates for the
    /// range `[start, end)`. Open shifts (no `end_time`) are excluded; they
    /// never collide. Implementations may over-approximate and return
    /// every closed shift of the employee; the overlap rule applies its own
    /// exact predicate.
    fn shifts_overlapping_range(
        &self,
        employee_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<Shift>;

    /// Returns the employee's shifts whose start time falls within the UTC
    /// calendar day `day`. Open shifts are included: an ongoing shift still
    /// marks a working day. Any non-empty result marks `day` as worked.
    fn shifts_starting_on_day(&self, employee_id: Uuid, day: NaiveDate) -> Vec<Shift>;

    /// Returns the employee's closed shifts with any time falling within
    /// the UTC calendar day `day`, for daily-hours accounting.
    fn shifts_overlapping_day(&self, employee_id: Uuid, day: NaiveDate) -> Vec<Shift>;
}

/// An in-memory [`ShiftRepository`] backed by a plain shift list.
///
/// Used by the test suites and suitable for embedding callers that already
/// hold an employee's shifts in memory. Queries preserve insertion order.
///
/// # Example
///
/// ```
/// use rostercheck::models::Shift;
/// use rostercheck::repository::{InMemoryShiftRepository, ShiftRepository};
/// use uuid::Uuid;
///
/// let employee_id = Uuid::new_v4();
/// let repo = InMemoryShiftRepository::from_shifts(vec![Shift {
///     id: Uuid::new_v4(),
///     employee_id,
///     start_time: "2026-01-15T08:00:00Z".parse().unwrap(),
///     end_time: Some("2026-01-15T16:00:00Z".parse().unwrap()),
///     break_minutes: 30,
/// }]);
///
/// let day = "2026-01-15".parse().unwrap();
/// assert_eq!(repo.shifts_starting_on_day(employee_id, day).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryShiftRepository {
    shifts: Vec<Shift>,
}

impl InMemoryShiftRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the given shifts, in the given order.
    pub fn from_shifts(shifts: Vec<Shift>) -> Self {
        Self { shifts }
    }

    /// Appends a shift to the repository.
    pub fn insert(&mut self, shift: Shift) {
        self.shifts.push(shift);
    }

    /// Returns all stored shifts.
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }
}

impl ShiftRepository for InMemoryShiftRepository {
    fn shifts_overlapping_range(
        &self,
        employee_id: Uuid,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Vec<Shift> {
        // Over-approximation: every closed shift of the employee. The
        // overlap rule applies the exact three-case predicate itself.
        self.shifts
            .iter()
            .filter(|s| s.employee_id == employee_id && s.end_time.is_some())
            .cloned()
            .collect()
    }

    fn shifts_starting_on_day(&self, employee_id: Uuid, day: NaiveDate) -> Vec<Shift> {
        self.shifts
            .iter()
            .filter(|s| s.employee_id == employee_id && s.shift_date() == day)
            .cloned()
            .collect()
    }

    fn shifts_overlapping_day(&self, employee_id: Uuid, day: NaiveDate) -> Vec<Shift> {
        let (day_start, day_end) = day_bounds(day);
        self.shifts
            .iter()
            .filter(|s| {
                s.employee_id == employee_id
                    && s.end_time
                        .is_some_and(|end| s.start_time < day_end && end > day_start)
            })
            .cloned()
            .collect()
    }
}
