// ==========================================
// Air Quality Decision Support Platform - Assessment API
// ==========================================
// Responsibility: orchestrate provider fetches and the scoring engines
// into per-vertical operations and the integrated report
// Architecture: API layer -> provider seam + engine layer
// Propagation policy: integrated verticals fail into recorded failures,
// never into each other
// ==========================================

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::api::error::{require_location, require_reading, ApiError, ApiResult};
use crate::domain::assessment::{
    CityAirSnapshot, CleanAirDestination, CropImpactAssessment, HealthRiskAssessment,
    HourlyAirProjection, IntegratedReport, RouteAssessment, SiteSuitability, VerticalFailure,
};
use crate::domain::reading::{DailyAggregate, PollutantReading};
use crate::domain::types::{AqiCategory, HealthCondition, Pollutant, Vertical};
use crate::engine::aqi::aqi_from_pm25;
use crate::engine::{forecast, real_estate, travel};
use crate::engine::{AirQualityTrendEngine, CropImpactEngine, HealthRiskEngine};
use crate::provider::weather::WeatherDataSource;

// ==========================================
// ReportOptions
// ==========================================

/// Inputs of an integrated report run.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Crop key for the agriculture vertical (unknown keys fall back to
    /// wheat).
    pub crop: String,
    /// Age-group key for the healthcare vertical (unknown keys fall
    /// back to adult).
    pub age_group: String,
    /// Flagged health condition keys; unknown keys are ignored.
    pub conditions: Vec<String>,
    /// Optional second city for the travel leg.
    pub route_destination: Option<String>,
    /// Forecast horizon in days.
    pub forecast_days: u8,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            crop: "wheat".to_string(),
            age_group: "adult".to_string(),
            conditions: Vec::new(),
            route_destination: None,
            forecast_days: 7,
        }
    }
}

// ==========================================
// AssessmentApi
// ==========================================

/// Per-vertical assessment operations over one weather data source.
///
/// Responsibilities:
/// 1. Fetch and validate provider payloads (section-level MissingData).
/// 2. Delegate scoring to the stateless engines.
/// 3. Assemble the integrated multi-vertical report.
pub struct AssessmentApi {
    source: Arc<dyn WeatherDataSource>,
    crop_engine: CropImpactEngine,
    health_engine: HealthRiskEngine,
    trend_engine: AirQualityTrendEngine,
}

impl AssessmentApi {
    pub fn new(source: Arc<dyn WeatherDataSource>) -> Self {
        Self {
            source,
            crop_engine: CropImpactEngine::new(),
            health_engine: HealthRiskEngine::new(),
            trend_engine: AirQualityTrendEngine::new(),
        }
    }

    // ==========================================
    // Agriculture
    // ==========================================

    /// Crop yield-loss assessment for one location.
    ///
    /// # Arguments
    /// - query: location query string
    /// - crop_key: crop profile key ("wheat", "rice", ...)
    pub fn crop_impact(&self, query: &str, crop_key: &str) -> ApiResult<CropImpactAssessment> {
        validate_query(query)?;
        let reading = self.fetch_reading(query)?;
        Ok(self.crop_engine.assess(&reading, crop_key))
    }

    // ==========================================
    // Healthcare
    // ==========================================

    /// Personal health risk assessment for one location.
    ///
    /// # Arguments
    /// - query: location query string
    /// - age_group_key: "child" / "adult" / "elderly"
    /// - condition_keys: flagged conditions; unknown keys are ignored
    pub fn health_risk(
        &self,
        query: &str,
        age_group_key: &str,
        condition_keys: &[String],
    ) -> ApiResult<HealthRiskAssessment> {
        validate_query(query)?;
        let reading = self.fetch_reading(query)?;
        let conditions = parse_conditions(condition_keys);
        Ok(self.health_engine.assess(&reading, age_group_key, &conditions))
    }

    // ==========================================
    // Real Estate
    // ==========================================

    /// Development-site suitability for one location.
    pub fn site_suitability(&self, query: &str) -> ApiResult<SiteSuitability> {
        validate_query(query)?;
        let reading = self.fetch_reading(query)?;
        Ok(real_estate::assess_site(&reading))
    }

    // ==========================================
    // Travel
    // ==========================================

    /// Pollution assessment of the route between two cities.
    pub fn route_assessment(
        &self,
        start_query: &str,
        end_query: &str,
    ) -> ApiResult<RouteAssessment> {
        validate_query(start_query)?;
        validate_query(end_query)?;

        let start_payload = self.source.current(start_query)?;
        let end_payload = self.source.current(end_query)?;
        let start_reading = require_reading(&start_payload)?;
        let end_reading = require_reading(&end_payload)?;

        let start_aqi = aqi_from_pm25(start_reading.value_or_zero(Pollutant::Pm25));
        let end_aqi = aqi_from_pm25(end_reading.value_or_zero(Pollutant::Pm25));

        Ok(travel::assess_route(
            start_query,
            end_query,
            start_aqi,
            end_aqi,
            start_payload.location.clone(),
            end_payload.location.clone(),
        ))
    }

    /// Catalog cities currently under the clean-air AQI limit. Cities
    /// whose fetch fails or whose payload lacks a reading are skipped
    /// with a warning, never fatal (eco-tourism browsing tolerates
    /// holes).
    pub fn clean_air_destinations(&self, queries: &[String]) -> Vec<CleanAirDestination> {
        let mut destinations = Vec::new();
        for query in queries {
            let Some((payload, reading)) = self.try_fetch_reading(query) else {
                continue;
            };
            let aqi = aqi_from_pm25(reading.value_or_zero(Pollutant::Pm25));
            if travel::is_clean_air_destination(aqi) {
                destinations.push(CleanAirDestination {
                    city: query.clone(),
                    aqi,
                    location: payload.location,
                });
            }
        }
        destinations
    }

    // ==========================================
    // Smart Cities
    // ==========================================

    /// Current-air snapshots for a list of cities, with the same skip
    /// semantics as [`Self::clean_air_destinations`].
    pub fn city_snapshots(&self, queries: &[String]) -> Vec<CityAirSnapshot> {
        let mut snapshots = Vec::new();
        for query in queries {
            let Some((payload, reading)) = self.try_fetch_reading(query) else {
                continue;
            };
            snapshots.push(AirQualityTrendEngine::city_snapshot(
                query,
                &reading,
                payload.location,
            ));
        }
        snapshots
    }

    /// Daily pollutant means over the forecast horizon, one entry per
    /// forecast day (hourless days aggregate to all-absent means).
    pub fn daily_forecast(&self, query: &str, days: u8) -> ApiResult<Vec<DailyAggregate>> {
        validate_query(query)?;
        let payload = self.source.forecast(query, days)?;
        forecast::daily_averages(&payload, days as usize)
            .ok_or(ApiError::MissingData { section: "forecast" })
    }

    /// Hourly air-quality projection over the forecast horizon.
    pub fn hourly_projection(&self, query: &str, days: u8) -> ApiResult<Vec<HourlyAirProjection>> {
        validate_query(query)?;
        let payload = self.source.forecast(query, days)?;
        self.trend_engine
            .project(&payload, days as usize)
            .ok_or(ApiError::MissingData { section: "forecast" })
    }

    // ==========================================
    // Integrated report
    // ==========================================

    /// Run every vertical for one location from one shared reading.
    ///
    /// # Rules
    /// 1. The current fetch, location, and reading are hard requirements;
    ///    without them there is nothing to compute.
    /// 2. The forecast and route legs fail softly into `failures`,
    ///    leaving the other verticals intact.
    pub fn integrated_report(
        &self,
        query: &str,
        options: &ReportOptions,
    ) -> ApiResult<IntegratedReport> {
        validate_query(query)?;
        tracing::info!(query, crop = %options.crop, age_group = %options.age_group, "building integrated report");

        let payload = self.source.current(query)?;
        let location = require_location(&payload)?;
        let reading = require_reading(&payload)?;
        let aqi = aqi_from_pm25(reading.value_or_zero(Pollutant::Pm25));

        let mut failures = Vec::new();

        let agriculture = self.crop_engine.assess(&reading, &options.crop);
        let conditions = parse_conditions(&options.conditions);
        let healthcare = self
            .health_engine
            .assess(&reading, &options.age_group, &conditions);
        let real_estate = real_estate::assess_site(&reading);

        let daily_forecast = match self
            .source
            .forecast(query, options.forecast_days)
            .map_err(ApiError::from)
            .and_then(|p| {
                forecast::daily_averages(&p, options.forecast_days as usize)
                    .ok_or(ApiError::MissingData { section: "forecast" })
            }) {
            Ok(aggregates) => aggregates,
            Err(err) => {
                tracing::warn!(query, %err, "forecast leg failed, report continues without it");
                failures.push(VerticalFailure {
                    vertical: Vertical::SmartCities,
                    reason: err.to_string(),
                });
                Vec::new()
            }
        };

        let route = match options.route_destination.as_deref() {
            Some(destination) if !destination.trim().is_empty() => {
                match self.route_assessment(query, destination) {
                    Ok(route) => Some(route),
                    Err(err) => {
                        tracing::warn!(destination, %err, "route leg failed, report continues without it");
                        failures.push(VerticalFailure {
                            vertical: Vertical::Travel,
                            reason: err.to_string(),
                        });
                        None
                    }
                }
            }
            _ => None,
        };

        Ok(IntegratedReport {
            report_id: Uuid::new_v4().to_string(),
            generated_at: Utc::now().naive_utc(),
            query: query.to_string(),
            location,
            current: reading,
            aqi,
            category: AqiCategory::from_aqi(aqi),
            agriculture,
            healthcare,
            real_estate,
            route,
            daily_forecast,
            failures,
        })
    }

    // ==========================================
    // Internal helpers
    // ==========================================

    fn fetch_reading(&self, query: &str) -> ApiResult<PollutantReading> {
        let payload = self.source.current(query)?;
        require_reading(&payload)
    }

    /// Lenient fetch for multi-city listings: None instead of an error,
    /// with the skip reason logged.
    fn try_fetch_reading(
        &self,
        query: &str,
    ) -> Option<(crate::provider::payload::CurrentPayload, PollutantReading)> {
        match self.source.current(query) {
            Ok(payload) => match require_reading(&payload) {
                Ok(reading) => Some((payload, reading)),
                Err(err) => {
                    tracing::warn!(query, %err, "skipping city without usable reading");
                    None
                }
            },
            Err(err) => {
                tracing::warn!(query, %err, "skipping city after provider failure");
                None
            }
        }
    }
}

fn validate_query(query: &str) -> ApiResult<()> {
    if query.trim().is_empty() {
        return Err(ApiError::InvalidInput(
            "location query must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn parse_conditions(keys: &[String]) -> Vec<HealthCondition> {
    keys.iter()
        .filter_map(|key| {
            let parsed = HealthCondition::from_key(key);
            if parsed.is_none() {
                tracing::debug!(%key, "ignoring unknown health condition key");
            }
            parsed
        })
        .collect()
}
