//! End-to-end tests for the shift validation engine.
//!
//! Each scenario drives the full pipeline through [`ShiftValidator`]
//! against an in-memory repository: overlap detection, the consecutive-day
//! limit, the daily-hours cap with midnight pro-ration, and the
//! creation/update asymmetry of the day-count rule.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

use rostercheck::config::{ConfigLoader, RuleLimits};
use rostercheck::error::Violation;
use rostercheck::models::{Shift, ShiftRequest};
use rostercheck::repository::InMemoryShiftRepository;
use rostercheck::validation::{ShiftValidator, minutes_on_day};

// =============================================================================
// Test Helpers
// =============================================================================

fn make_shift(employee_id: Uuid, start: &str, end: &str, break_minutes: u32) -> Shift {
    Shift {
        id: Uuid::new_v4(),
        employee_id,
        start_time: start.parse().unwrap(),
        end_time: Some(end.parse().unwrap()),
        break_minutes,
    }
}

fn create_request(employee_id: Uuid, start: &str, end: &str, break_minutes: u32) -> ShiftRequest {
    ShiftRequest::create(
        employee_id,
        start.parse().unwrap(),
        end.parse().unwrap(),
        break_minutes,
    )
}

/// One 8-hour shift per day on each of the given dates.
fn daily_shifts(employee_id: Uuid, dates: &[&str]) -> Vec<Shift> {
    dates
        .iter()
        .map(|d| {
            let date: NaiveDate = d.parse().unwrap();
            Shift {
                id: Uuid::new_v4(),
                employee_id,
                start_time: date.and_hms_opt(8, 0, 0).unwrap().and_utc(),
                end_time: Some(date.and_hms_opt(16, 0, 0).unwrap().and_utc()),
                break_minutes: 30,
            }
        })
        .collect()
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// =============================================================================
// Scenario: overlapping candidate is rejected with the conflicting shift
// =============================================================================

#[test]
fn test_overlapping_candidate_cites_existing_shift() {
    let employee_id = Uuid::new_v4();
    let existing = make_shift(employee_id, "2026-01-15T08:00:00Z", "2026-01-15T16:00:00Z", 30);
    let repo = InMemoryShiftRepository::from_shifts(vec![existing.clone()]);

    let validator = ShiftValidator::with_defaults();
    let request = create_request(employee_id, "2026-01-15T14:00:00Z", "2026-01-15T18:00:00Z", 30);

    assert_eq!(
        validator.validate(&repo, &request),
        Err(Violation::Overlap {
            conflicting_shift_id: existing.id,
        })
    );
}

#[test]
fn test_other_employees_shifts_do_not_conflict() {
    let employee_id = Uuid::new_v4();
    let repo = InMemoryShiftRepository::from_shifts(vec![make_shift(
        Uuid::new_v4(),
        "2026-01-15T08:00:00Z",
        "2026-01-15T16:00:00Z",
        30,
    )]);

    let validator = ShiftValidator::with_defaults();
    let request = create_request(employee_id, "2026-01-15T14:00:00Z", "2026-01-15T18:00:00Z", 0);

    assert_eq!(validator.validate(&repo, &request), Ok(()));
}

// =============================================================================
// Scenario: back-to-back shifts are allowed
// =============================================================================

#[test]
fn test_back_to_back_candidate_passes() {
    let employee_id = Uuid::new_v4();
    // Net 7.5h existing; candidate starts exactly at its end, net 2h.
    let repo = InMemoryShiftRepository::from_shifts(vec![make_shift(
        employee_id,
        "2026-01-15T08:00:00Z",
        "2026-01-15T16:00:00Z",
        30,
    )]);

    let validator = ShiftValidator::with_defaults();
    let request = create_request(employee_id, "2026-01-15T16:00:00Z", "2026-01-15T18:00:00Z", 0);

    assert_eq!(validator.validate(&repo, &request), Ok(()));
}

// =============================================================================
// Scenario: sixth consecutive working day is rejected at creation
// =============================================================================

#[test]
fn test_sixth_consecutive_day_is_rejected() {
    let employee_id = Uuid::new_v4();
    let repo = InMemoryShiftRepository::from_shifts(daily_shifts(
        employee_id,
        &["2026-01-10", "2026-01-11", "2026-01-12", "2026-01-13", "2026-01-14"],
    ));

    let validator = ShiftValidator::with_defaults();
    let request = create_request(employee_id, "2026-01-15T08:00:00Z", "2026-01-15T16:00:00Z", 30);

    assert_eq!(
        validator.validate(&repo, &request),
        Err(Violation::ConsecutiveDaysExceeded { days_worked: 5 })
    );
}

#[test]
fn test_gap_in_run_resets_the_count() {
    let employee_id = Uuid::new_v4();
    // Free day on the 12th: only two unbroken days adjacent to the target.
    let repo = InMemoryShiftRepository::from_shifts(daily_shifts(
        employee_id,
        &["2026-01-10", "2026-01-11", "2026-01-13", "2026-01-14"],
    ));

    let validator = ShiftValidator::with_defaults();
    let request = create_request(employee_id, "2026-01-15T08:00:00Z", "2026-01-15T16:00:00Z", 30);

    assert_eq!(validator.validate(&repo, &request), Ok(()));
}

// =============================================================================
// Scenario: update bypasses the consecutive-day rule
// =============================================================================

#[test]
fn test_update_bypasses_consecutive_day_rule() {
    let employee_id = Uuid::new_v4();
    let mut shifts = daily_shifts(
        employee_id,
        &["2026-01-10", "2026-01-11", "2026-01-12", "2026-01-13", "2026-01-14"],
    );
    // The shift being updated, on the day that would be the sixth.
    let updated = make_shift(employee_id, "2026-01-15T08:00:00Z", "2026-01-15T16:00:00Z", 30);
    shifts.push(updated.clone());
    let repo = InMemoryShiftRepository::from_shifts(shifts);

    let validator = ShiftValidator::with_defaults();
    let request = ShiftRequest::update(
        updated.id,
        employee_id,
        "2026-01-15T09:00:00Z".parse().unwrap(),
        "2026-01-15T17:00:00Z".parse().unwrap(),
        30,
    );

    assert_eq!(validator.validate(&repo, &request), Ok(()));
}

// =============================================================================
// Scenario: daily-hours cap with a same-day second shift
// =============================================================================

#[test]
fn test_second_shift_pushing_day_over_cap_is_rejected() {
    let employee_id = Uuid::new_v4();
    // Net 7.5h existing.
    let repo = InMemoryShiftRepository::from_shifts(vec![make_shift(
        employee_id,
        "2026-01-15T08:00:00Z",
        "2026-01-15T16:00:00Z",
        30,
    )]);

    let validator = ShiftValidator::with_defaults();
    // Net 3h candidate: 10.5h in total.
    let request = create_request(employee_id, "2026-01-15T16:00:00Z", "2026-01-15T19:00:00Z", 0);

    assert_eq!(
        validator.validate(&repo, &request),
        Err(Violation::DailyHoursExceeded {
            total_hours: dec("10.5"),
        })
    );
}

#[test]
fn test_exactly_ten_hours_passes_and_one_minute_more_fails() {
    let employee_id = Uuid::new_v4();
    // Net 7.5h existing.
    let shifts = vec![make_shift(
        employee_id,
        "2026-01-15T06:00:00Z",
        "2026-01-15T14:00:00Z",
        30,
    )];
    let repo = InMemoryShiftRepository::from_shifts(shifts);
    let validator = ShiftValidator::with_defaults();

    // Net 2.5h: exactly 10.0h in total.
    let at_cap = create_request(employee_id, "2026-01-15T14:00:00Z", "2026-01-15T16:30:00Z", 0);
    assert_eq!(validator.validate(&repo, &at_cap), Ok(()));

    // One minute more tips the day over the cap.
    let over_cap = create_request(employee_id, "2026-01-15T14:00:00Z", "2026-01-15T16:31:00Z", 0);
    assert!(matches!(
        validator.validate(&repo, &over_cap),
        Err(Violation::DailyHoursExceeded { .. })
    ));
}

// =============================================================================
// Scenario: overnight shift pro-ration
// =============================================================================

#[test]
fn test_overnight_shift_contributions_match_pro_ration() {
    let shift = make_shift(
        Uuid::new_v4(),
        "2026-01-15T22:00:00Z",
        "2026-01-16T06:00:00Z",
        45,
    );

    let first_day = minutes_on_day(&shift, "2026-01-15".parse().unwrap());
    let second_day = minutes_on_day(&shift, "2026-01-16".parse().unwrap());

    assert_eq!(first_day, dec("108.75"));
    assert_eq!(second_day, dec("326.25"));
    // Sum equals net minutes: (480 - 45).
    assert_eq!(first_day + second_day, dec("435"));
}

#[test]
fn test_overnight_tail_counts_toward_next_days_cap() {
    let employee_id = Uuid::new_v4();
    // 22:00 to 06:00, 45 minute break: 5.4375h land on the 16th.
    let repo = InMemoryShiftRepository::from_shifts(vec![make_shift(
        employee_id,
        "2026-01-15T22:00:00Z",
        "2026-01-16T06:00:00Z",
        45,
    )]);

    let validator = ShiftValidator::with_defaults();
    // Net 5h on the 16th: 10.4375h in total.
    let request = create_request(employee_id, "2026-01-16T08:00:00Z", "2026-01-16T13:00:00Z", 0);

    assert_eq!(
        validator.validate(&repo, &request),
        Err(Violation::DailyHoursExceeded {
            total_hours: dec("10.4375"),
        })
    );
}

// =============================================================================
// Pipeline order and configuration
// =============================================================================

#[test]
fn test_overlap_reported_before_consecutive_days() {
    let employee_id = Uuid::new_v4();
    let mut shifts = daily_shifts(
        employee_id,
        &["2026-01-10", "2026-01-11", "2026-01-12", "2026-01-13", "2026-01-14"],
    );
    let conflicting = make_shift(employee_id, "2026-01-15T06:00:00Z", "2026-01-15T10:00:00Z", 0);
    shifts.push(conflicting.clone());
    let repo = InMemoryShiftRepository::from_shifts(shifts);

    let validator = ShiftValidator::with_defaults();
    // Overlaps and would also be a sixth consecutive day.
    let request = create_request(employee_id, "2026-01-15T08:00:00Z", "2026-01-15T16:00:00Z", 30);

    assert_eq!(
        validator.validate(&repo, &request),
        Err(Violation::Overlap {
            conflicting_shift_id: conflicting.id,
        })
    );
}

#[test]
fn test_validator_built_from_shipped_rules_file() {
    let limits = ConfigLoader::load("./config/rules.yaml")
        .expect("shipped rules file loads")
        .into_limits();
    assert_eq!(limits, RuleLimits::default());

    let validator = ShiftValidator::new(limits);
    let repo = InMemoryShiftRepository::new();
    let request = create_request(
        Uuid::new_v4(),
        "2026-01-15T08:00:00Z",
        "2026-01-15T16:00:00Z",
        30,
    );
    assert_eq!(validator.validate(&repo, &request), Ok(()));
}
