//! Configuration types for the validation rule limits.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Default maximum number of consecutive working days.
pub const DEFAULT_MAX_CONSECUTIVE_DAYS: u32 = 5;

/// Default maximum net working hours per calendar day.
pub const DEFAULT_MAX_DAILY_HOURS: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// The numeric limits the validator enforces.
///
/// Missing fields fall back to the defaults, so a rules file may override
/// only one of the limits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuleLimits {
    /// A new shift may not start a working day beyond this many unbroken
    /// days already worked.
    pub max_consecutive_days: u32,
    /// Net working hours on one calendar day may not exceed this value.
    pub max_daily_hours: Decimal,
}

impl Default for RuleLimits {
    fn default() -> Self {
        Self {
            max_consecutive_days: DEFAULT_MAX_CONSECUTIVE_DAYS,
            max_daily_hours: DEFAULT_MAX_DAILY_HOURS,
        }
    }
}

/// Rules file structure: a single `rules` section holding the limits.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesConfig {
    /// The configured rule limits.
    pub rules: RuleLimits,
}
