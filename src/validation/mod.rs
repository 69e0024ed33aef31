//! Constraint validation logic for candidate shifts.
//!
//! This module contains the three business rules and their orchestration:
//! interval-overlap detection against existing shifts, backward counting of
//! consecutive working days, midnight-aware daily-hours accounting with
//! break pro-ration, and the validator that runs them in fixed order with
//! short-circuit on the first violation.

mod consecutive_days;
mod daily_hours;
mod overlap;
mod validator;

pub use consecutive_days::consecutive_days_before;
pub use daily_hours::{day_bounds, minutes_on_day, total_hours_on_day};
pub use overlap::{find_overlap, overlaps};
pub use validator::ShiftValidator;
