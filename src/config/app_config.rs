// ==========================================
// Air Quality Decision Support Platform - Application Configuration
// ==========================================
// Responsibility: API keys and analysis defaults, loaded from a JSON
// file with environment overrides
// No embedded default secrets: a missing narrative key selects the
// offline provider, a missing weather key fails validation
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment override for the weather provider key.
pub const ENV_WEATHER_API_KEY: &str = "AQDSS_WEATHER_API_KEY";
/// Environment override for the narrative provider key.
pub const ENV_NARRATIVE_API_KEY: &str = "AQDSS_NARRATIVE_API_KEY";
/// Environment override for the forecast horizon.
pub const ENV_FORECAST_DAYS: &str = "AQDSS_FORECAST_DAYS";

/// Widest forecast horizon the provider serves.
pub const MAX_FORECAST_DAYS: u8 = 14;

// ==========================================
// Config errors
// ==========================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Scoring works offline, but a deployment that talks to the live
    /// provider has to supply its key explicitly.
    #[error("weather API key is not configured (set {ENV_WEATHER_API_KEY} or the config file)")]
    MissingWeatherApiKey,

    #[error("forecast_days must be between 1 and {MAX_FORECAST_DAYS}, got {days}")]
    InvalidForecastDays { days: u8 },
}

/// Result alias for the config layer
pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// AppConfig
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Weather provider key, passed through to the deployment's data
    /// source. Never defaulted in code.
    pub weather_api_key: Option<String>,
    /// Narrative provider key. Absence selects the offline provider and
    /// the placeholder path.
    pub narrative_api_key: Option<String>,
    /// Forecast horizon in days (1..=14).
    pub forecast_days: u8,
    /// Crop profile used when the caller does not pick one.
    pub default_crop: String,
    /// Age-group profile used when the caller does not pick one.
    pub default_age_group: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            weather_api_key: None,
            narrative_api_key: None,
            forecast_days: 7,
            default_crop: "wheat".to_string(),
            default_age_group: "adult".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from a JSON file and apply environment overrides.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let mut config: AppConfig = serde_json::from_str(&raw)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from a JSON file, tolerating a missing file (defaults plus
    /// environment overrides). Parse errors in a present file still fail.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(raw) => {
                let mut config: AppConfig = serde_json::from_str(&raw)?;
                config.apply_env_overrides();
                Ok(config)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "config file absent, using defaults");
                let mut config = AppConfig::default();
                config.apply_env_overrides();
                Ok(config)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Environment variables win over file values. An unparseable
    /// forecast-day override is ignored with a warning rather than
    /// silently replacing the configured horizon.
    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(ENV_WEATHER_API_KEY) {
            if !key.trim().is_empty() {
                self.weather_api_key = Some(key);
            }
        }
        if let Ok(key) = std::env::var(ENV_NARRATIVE_API_KEY) {
            if !key.trim().is_empty() {
                self.narrative_api_key = Some(key);
            }
        }
        if let Ok(days) = std::env::var(ENV_FORECAST_DAYS) {
            match days.trim().parse::<u8>() {
                Ok(parsed) => self.forecast_days = parsed,
                Err(_) => {
                    tracing::warn!(value = %days, "ignoring unparseable {ENV_FORECAST_DAYS} override");
                }
            }
        }
    }

    /// Validate for a deployment against the live provider. Offline
    /// fixture runs skip this deliberately.
    pub fn validate(&self) -> ConfigResult<()> {
        if self
            .weather_api_key
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .is_empty()
        {
            return Err(ConfigError::MissingWeatherApiKey);
        }
        if self.forecast_days == 0 || self.forecast_days > MAX_FORECAST_DAYS {
            return Err(ConfigError::InvalidForecastDays {
                days: self.forecast_days,
            });
        }
        Ok(())
    }

    /// True when a narrative key is configured; otherwise deployments
    /// wire up the offline provider.
    pub fn has_narrative_key(&self) -> bool {
        self.narrative_api_key
            .as_deref()
            .map(str::trim)
            .map(|k| !k.is_empty())
            .unwrap_or(false)
    }
}
