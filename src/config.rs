use anyhow::{Context, Result};
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_MIN_SERVINGS: f64 = 0.25;
pub const DEFAULT_MAX_SERVINGS: f64 = 50.0;
pub const DEFAULT_EXPIRY_WINDOW_DAYS: i64 = 3;

const MIN_SERVINGS_ENV_VAR: &str = "PANTRY_MIN_SERVINGS";
const MAX_SERVINGS_ENV_VAR: &str = "PANTRY_MAX_SERVINGS";
const EXPIRY_WINDOW_ENV_VAR: &str = "PANTRY_EXPIRY_WINDOW_DAYS";

/// Inclusive serving-count bounds. Callers may tighten these per recipe type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServingBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for ServingBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SERVINGS,
            max: DEFAULT_MAX_SERVINGS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityConfig {
    /// Items expiring between today and this many days from today are flagged.
    /// Already-expired items are not.
    pub expiry_window_days: i64,
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            expiry_window_days: DEFAULT_EXPIRY_WINDOW_DAYS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub serving_bounds: ServingBounds,
    pub availability: AvailabilityConfig,
}

impl EngineConfig {
    /// Defaults overridden by `.env` / process environment variables.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(MIN_SERVINGS_ENV_VAR) {
            config.serving_bounds.min = raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("{} must be a number, got '{}'", MIN_SERVINGS_ENV_VAR, raw))?;
        }
        if let Some(raw) = lookup(MAX_SERVINGS_ENV_VAR) {
            config.serving_bounds.max = raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("{} must be a number, got '{}'", MAX_SERVINGS_ENV_VAR, raw))?;
        }
        if let Some(raw) = lookup(EXPIRY_WINDOW_ENV_VAR) {
            config.availability.expiry_window_days = raw
                .trim()
                .parse::<i64>()
                .with_context(|| format!("{} must be a whole number of days, got '{}'", EXPIRY_WINDOW_ENV_VAR, raw))?;
        }

        if !(config.serving_bounds.min > 0.0 && config.serving_bounds.min <= config.serving_bounds.max) {
            return Err(anyhow::anyhow!(
                "Serving bounds must satisfy 0 < min <= max, got min={} max={}",
                config.serving_bounds.min,
                config.serving_bounds.max
            ));
        }

        Ok(config)
    }
}
