//! Rule-limit configuration for the shift validation engine.
//!
//! The numeric limits enforced by the validator are policy, not mechanism,
//! so they live in configuration rather than in code. This module provides
//! the typed limits and a loader for a YAML rules file.
//!
//! # Example
//!
//! ```no_run
//! use rostercheck::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/rules.yaml").unwrap();
//! println!("daily cap: {} hours", loader.limits().max_daily_hours);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_MAX_CONSECUTIVE_DAYS, DEFAULT_MAX_DAILY_HOURS, RuleLimits, RulesConfig};
