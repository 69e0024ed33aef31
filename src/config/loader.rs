//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! validation rule limits from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};

use super::types::{RuleLimits, RulesConfig};

/// Loads and provides access to the validation rule limits.
///
/// # File Structure
///
/// ```text
/// rules:
///   max_consecutive_days: 5
///   max_daily_hours: 10.0
/// ```
///
/// # Example
///
/// ```no_run
/// use rostercheck::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/rules.yaml")?;
/// let limits = loader.into_limits();
/// # Ok::<(), rostercheck::error::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    limits: RuleLimits,
}

impl ConfigLoader {
    /// Loads the rule limits from the specified YAML file.
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it contains invalid YAML or wrongly-typed
    /// fields.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let config = Self::load_yaml::<RulesConfig>(path.as_ref())?;
        Ok(Self {
            limits: config.rules,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ConfigResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ConfigError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rule limits.
    pub fn limits(&self) -> &RuleLimits {
        &self.limits
    }

    /// Consumes the loader and returns the rule limits.
    pub fn into_limits(self) -> RuleLimits {
        self.limits
    }
}
