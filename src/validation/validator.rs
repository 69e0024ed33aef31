//! Orchestration of the three shift constraints.
//!
//! [`ShiftValidator`] runs the rules in a fixed order and returns the first
//! violation: overlap first (cheapest and the only hard conflict), then the
//! consecutive-day limit (creation only; an update does not introduce a new
//! working day by itself), then the daily-hours cap last, since it scans
//! and pro-rates every shift of the day.

use tracing::{debug, warn};

use crate::config::RuleLimits;
use crate::error::{ValidationResult, Violation};
use crate::models::{Shift, ShiftRequest};
use crate::repository::ShiftRepository;
use crate::validation::consecutive_days::consecutive_days_before;
use crate::validation::daily_hours::total_hours_on_day;
use crate::validation::overlap::find_overlap;

/// Validates candidate shifts against an employee's existing shifts.
///
/// The validator is a pure, synchronous decision function over a snapshot
/// of repository reads: it holds no mutable state and performs no writes,
/// so validations for different employees may run fully in parallel. It
/// does not serialize concurrent validations for the same employee; the
/// caller is responsible for serializing validate-then-persist per employee
/// if at-most-one-winner semantics are required.
///
/// # Example
///
/// ```
/// use rostercheck::models::ShiftRequest;
/// use rostercheck::repository::InMemoryShiftRepository;
/// use rostercheck::validation::ShiftValidator;
/// use uuid::Uuid;
///
/// let validator = ShiftValidator::with_defaults();
/// let repo = InMemoryShiftRepository::new();
/// let request = ShiftRequest::create(
///     Uuid::new_v4(),
///     "2026-01-15T08:00:00Z".parse().unwrap(),
///     "2026-01-15T16:00:00Z".parse().unwrap(),
///     30,
/// );
/// assert!(validator.validate(&repo, &request).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ShiftValidator {
    limits: RuleLimits,
}

impl ShiftValidator {
    /// Creates a validator enforcing the given rule limits.
    pub fn new(limits: RuleLimits) -> Self {
        Self { limits }
    }

    /// Creates a validator with the default limits (5 consecutive days,
    /// 10.0 daily hours).
    pub fn with_defaults() -> Self {
        Self::new(RuleLimits::default())
    }

    /// Returns the rule limits this validator enforces.
    pub fn limits(&self) -> &RuleLimits {
        &self.limits
    }

    /// Validates a candidate shift, returning `Ok(())` or the first
    /// violated rule.
    ///
    /// Checks run in fixed order with short-circuit on first failure:
    ///
    /// 1. time-range guard (`end` must be after `start`),
    /// 2. overlap against all existing closed shifts of the employee,
    ///    excluding `exclude_shift_id`,
    /// 3. consecutive-day limit, only for creation requests,
    /// 4. daily-hours cap for the candidate's shift date.
    pub fn validate(&self, repo: &dyn ShiftRepository, request: &ShiftRequest) -> ValidationResult {
        request.check_time_range()?;

        let shift_date = request.shift_date();
        debug!(
            employee_id = %request.employee_id,
            %shift_date,
            is_update = request.is_update(),
            "validating candidate shift"
        );

        // 1. Overlap with existing shifts.
        let candidates: Vec<Shift> = repo
            .shifts_overlapping_range(request.employee_id, request.start_time, request.end_time)
            .into_iter()
            .filter(|shift| request.exclude_shift_id != Some(shift.id))
            .collect();
        if let Some(conflict) = find_overlap(&candidates, request.start_time, request.end_time) {
            warn!(
                employee_id = %request.employee_id,
                conflicting_shift_id = %conflict.id,
                "candidate shift overlaps an existing shift"
            );
            return Err(Violation::Overlap {
                conflicting_shift_id: conflict.id,
            });
        }

        // 2. Consecutive working days, creation only.
        if !request.is_update() {
            let days_worked = consecutive_days_before(
                repo,
                request.employee_id,
                shift_date,
                self.limits.max_consecutive_days,
            );
            if days_worked >= self.limits.max_consecutive_days {
                warn!(
                    employee_id = %request.employee_id,
                    days_worked,
                    "consecutive working day limit reached"
                );
                return Err(Violation::ConsecutiveDaysExceeded { days_worked });
            }
        }

        // 3. Daily working-time cap.
        let existing_hours = total_hours_on_day(
            repo,
            request.employee_id,
            shift_date,
            request.exclude_shift_id,
        );
        let total_hours = existing_hours + request.net_hours();
        if total_hours > self.limits.max_daily_hours {
            warn!(
                employee_id = %request.employee_id,
                %total_hours,
                "daily working-time cap exceeded"
            );
            return Err(Violation::DailyHoursExceeded { total_hours });
        }

        debug!(employee_id = %request.employee_id, "candidate shift passed all constraints");
        Ok(())
    }
}

impl Default for ShiftValidator {
    fn default() -> Self {
        Self::with_defaults()
    }
}
