//! Service configuration
//!
//! Settings read from the environment at startup. Bad values fail the
//! startup instead of leaking into availability checks.

use chrono::NaiveDate;
use thiserror::Error;

use crate::availability::{self, ExpiryThresholds};
use crate::models::DEFAULT_CATEGORY;

pub const ENV_EXPIRING_SOON_DAYS: &str = "PANTRY_EXPIRING_SOON_DAYS";
pub const ENV_EXPIRING_LATER_DAYS: &str = "PANTRY_EXPIRING_LATER_DAYS";
pub const ENV_SHOPPING_CATEGORY: &str = "PANTRY_SHOPPING_CATEGORY";
pub const ENV_TODAY: &str = "PANTRY_TODAY";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {name}: '{value}' is not a non-negative number of days")]
    InvalidDays { name: &'static str, value: String },

    #[error("Invalid {name}: '{value}' is not a YYYY-MM-DD date")]
    InvalidDate { name: &'static str, value: String },

    #[error("Expiry windows out of order: soon ({soon}) is longer than later ({later})")]
    ThresholdOrder { soon: i64, later: i64 },
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone)]
pub struct Config {
    pub thresholds: ExpiryThresholds,
    /// Category given to shopping-list items added from a recipe check
    pub shopping_category: String,
    /// Fixed "today", for reproducible runs
    pub today_override: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thresholds: ExpiryThresholds::default(),
            shopping_category: DEFAULT_CATEGORY.to_string(),
            today_override: None,
        }
    }
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ExpiryThresholds::default();
        let soon_days = parse_days(ENV_EXPIRING_SOON_DAYS, lookup(ENV_EXPIRING_SOON_DAYS))?
            .unwrap_or(defaults.soon_days);
        let later_days = parse_days(ENV_EXPIRING_LATER_DAYS, lookup(ENV_EXPIRING_LATER_DAYS))?
            .unwrap_or(defaults.later_days);

        if soon_days > later_days {
            return Err(ConfigError::ThresholdOrder {
                soon: soon_days,
                later: later_days,
            });
        }

        let shopping_category = lookup(ENV_SHOPPING_CATEGORY)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        let today_override = match lookup(ENV_TODAY).filter(|s| !s.trim().is_empty()) {
            Some(value) => Some(
                NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                    .map_err(|_| ConfigError::InvalidDate { name: ENV_TODAY, value })?,
            ),
            None => None,
        };

        Ok(Self {
            thresholds: ExpiryThresholds {
                soon_days,
                later_days,
            },
            shopping_category,
            today_override,
        })
    }

    /// The date availability checks treat as today
    pub fn today(&self) -> NaiveDate {
        self.today_override.unwrap_or_else(availability::today)
    }
}

fn parse_days(name: &'static str, value: Option<String>) -> ConfigResult<Option<i64>> {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };
    match value.trim().parse::<i64>() {
        Ok(days) if days >= 0 => Ok(Some(days)),
        _ => Err(ConfigError::InvalidDays { name, value }),
    }
}
