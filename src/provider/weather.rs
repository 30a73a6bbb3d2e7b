// ==========================================
// Air Quality Decision Support Platform - Weather Data Source
// ==========================================
// Responsibility: the boundary to the weather/air-quality provider
// Calls are blocking, sequential, and single-attempt; no retry, no
// backoff, no timeout policy lives in this crate
// ==========================================

use crate::provider::payload::{CurrentPayload, ForecastPayload};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

// ==========================================
// Provider errors
// ==========================================

#[derive(Error, Debug)]
pub enum ProviderError {
    /// The upstream service failed. Callers treat this exactly like
    /// missing data: nothing is partially computed from a failed fetch.
    #[error("upstream provider failure: {message}")]
    Upstream { message: String },

    #[error("no payload registered for query: {query}")]
    UnknownQuery { query: String },

    #[error("malformed provider payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("payload file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for the provider layer
pub type ProviderResult<T> = Result<T, ProviderError>;

// ==========================================
// WeatherDataSource Trait
// ==========================================
// Implementors: FixtureWeatherSource (payload dumps); an HTTP-backed
// source belongs to a deployment crate, not here
pub trait WeatherDataSource: Send + Sync {
    /// Current conditions for a location query.
    fn current(&self, query: &str) -> ProviderResult<CurrentPayload>;

    /// Hourly forecast for a location query, capped at `days` days the
    /// way the live provider caps server-side.
    fn forecast(&self, query: &str, days: u8) -> ProviderResult<ForecastPayload>;
}

// ==========================================
// FixtureWeatherSource
// ==========================================

/// Offline data source backed by canned payloads keyed by query.
/// Used by the demo binary and the integration tests; payloads come from
/// registered values, JSON strings, or JSON files.
#[derive(Debug, Default)]
pub struct FixtureWeatherSource {
    current: HashMap<String, CurrentPayload>,
    forecast: HashMap<String, ForecastPayload>,
}

impl FixtureWeatherSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn normalize(query: &str) -> String {
        query.trim().to_ascii_lowercase()
    }

    pub fn with_current(mut self, query: &str, payload: CurrentPayload) -> Self {
        self.current.insert(Self::normalize(query), payload);
        self
    }

    pub fn with_forecast(mut self, query: &str, payload: ForecastPayload) -> Self {
        self.forecast.insert(Self::normalize(query), payload);
        self
    }

    /// Register a current-conditions payload from raw JSON.
    pub fn with_current_json(self, query: &str, json: &str) -> ProviderResult<Self> {
        let payload: CurrentPayload = serde_json::from_str(json)?;
        Ok(self.with_current(query, payload))
    }

    /// Register a forecast payload from raw JSON.
    pub fn with_forecast_json(self, query: &str, json: &str) -> ProviderResult<Self> {
        let payload: ForecastPayload = serde_json::from_str(json)?;
        Ok(self.with_forecast(query, payload))
    }

    /// Register a current-conditions payload from a JSON dump on disk.
    pub fn load_current_file(self, query: &str, path: &Path) -> ProviderResult<Self> {
        let json = std::fs::read_to_string(path)?;
        self.with_current_json(query, &json)
    }

    /// Register a forecast payload from a JSON dump on disk.
    pub fn load_forecast_file(self, query: &str, path: &Path) -> ProviderResult<Self> {
        let json = std::fs::read_to_string(path)?;
        self.with_forecast_json(query, &json)
    }
}

impl WeatherDataSource for FixtureWeatherSource {
    fn current(&self, query: &str) -> ProviderResult<CurrentPayload> {
        self.current
            .get(&Self::normalize(query))
            .cloned()
            .ok_or_else(|| ProviderError::UnknownQuery {
                query: query.to_string(),
            })
    }

    fn forecast(&self, query: &str, days: u8) -> ProviderResult<ForecastPayload> {
        let mut payload = self
            .forecast
            .get(&Self::normalize(query))
            .cloned()
            .ok_or_else(|| ProviderError::UnknownQuery {
                query: query.to_string(),
            })?;
        if let Some(forecast) = payload.forecast.as_mut() {
            forecast.forecastday.truncate(days as usize);
        }
        Ok(payload)
    }
}
