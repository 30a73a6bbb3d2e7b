// ==========================================
// Air Quality Decision Support Platform - Assessment Records
// ==========================================
// Responsibility: the value records produced by the scoring engines and
// the api facade, consumed by rendering and the narrative builders
// Every record carries the breakdown that produced its score
// ==========================================

use crate::domain::location::Location;
use crate::domain::reading::{DailyAggregate, PollutantReading};
use crate::domain::types::{
    AgeGroup, AqiCategory, CropKind, HealthCondition, HealthRiskLevel, ImpactLevel, MarkerColor,
    Pollutant, RiskProfile, RouteStatus, SuitabilityLevel, Vertical,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// Agriculture
// ==========================================

/// Per-pollutant contribution to the crop yield-loss estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutantImpact {
    pub pollutant: Pollutant,
    /// Concentration that was scored (absent provider fields score as 0).
    pub concentration: f64,
    pub impact_percent: f64,
    pub level: ImpactLevel,
}

/// Crop yield-loss assessment for one location reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropImpactAssessment {
    /// Key as requested by the caller, before fallback resolution.
    pub requested_crop: String,
    /// Profile actually applied (unknown keys resolve to wheat).
    pub crop: CropKind,
    /// Total estimated yield loss, capped at the domain ceiling.
    pub total_yield_loss_pct: f64,
    pub level: ImpactLevel,
    pub impacts: Vec<PollutantImpact>,
}

// ==========================================
// Healthcare
// ==========================================

/// Per-pollutant contribution to the health risk score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutantRisk {
    pub pollutant: Pollutant,
    pub concentration: f64,
    /// Risk score out of 10 for this pollutant alone.
    pub risk_score: f64,
    pub level: HealthRiskLevel,
}

/// Personal health risk assessment for one location reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRiskAssessment {
    pub age_group: AgeGroup,
    pub conditions: Vec<HealthCondition>,
    /// Profile applied after condition/age precedence resolution.
    pub applied_profile: RiskProfile,
    /// Overall risk score out of 10.
    pub overall_risk_score: f64,
    pub overall_level: HealthRiskLevel,
    pub pollutant_risks: Vec<PollutantRisk>,
    /// Rule-based guidance derived from the overall level and profile.
    pub recommendations: Vec<String>,
}

// ==========================================
// Real Estate
// ==========================================

/// Development-site suitability derived from the local AQI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSuitability {
    pub pm2_5: f64,
    pub aqi: u16,
    /// Suitability score in 0..=100 (100 - AQI/3, floored at 0).
    pub score: f64,
    pub level: SuitabilityLevel,
}

// ==========================================
// Travel
// ==========================================

/// Pollution assessment of a route between two resolved cities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteAssessment {
    pub start_city: String,
    pub end_city: String,
    pub start_aqi: u16,
    pub end_aqi: u16,
    /// Mean of the two endpoint AQIs.
    pub route_score: f64,
    pub status: RouteStatus,
    pub start_location: Option<Location>,
    pub end_location: Option<Location>,
}

/// Catalog city currently under the clean-air AQI limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanAirDestination {
    pub city: String,
    pub aqi: u16,
    pub location: Option<Location>,
}

// ==========================================
// Smart Cities
// ==========================================

/// One city's current-air snapshot for multi-city comparison and maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityAirSnapshot {
    pub city: String,
    pub reading: PollutantReading,
    pub aqi: u16,
    pub category: AqiCategory,
    pub marker: MarkerColor,
    pub location: Option<Location>,
}

/// One hour of the air-quality trend projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyAirProjection {
    pub time: NaiveDateTime,
    pub temp_c: f64,
    pub humidity: f64,
    pub wind_kph: f64,
    pub pressure_mb: f64,
    pub pm2_5: f64,
    pub aqi: u16,
    /// True when pm2_5 came from the weather-variable estimator rather
    /// than an observed provider value.
    pub estimated: bool,
}

// ==========================================
// Integrated Report
// ==========================================

/// A vertical that could not be computed in an integrated run. Recording
/// the failure instead of propagating keeps the other verticals visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalFailure {
    pub vertical: Vertical,
    pub reason: String,
}

/// All-vertical assessment of one location from one shared reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegratedReport {
    pub report_id: String,
    pub generated_at: NaiveDateTime,
    /// Query string the caller asked for (the location names what the
    /// provider resolved it to).
    pub query: String,
    pub location: Location,
    pub current: PollutantReading,
    pub aqi: u16,
    pub category: AqiCategory,
    pub agriculture: CropImpactAssessment,
    pub healthcare: HealthRiskAssessment,
    pub real_estate: SiteSuitability,
    /// Present when a route destination was requested and resolvable.
    pub route: Option<RouteAssessment>,
    pub daily_forecast: Vec<DailyAggregate>,
    pub failures: Vec<VerticalFailure>,
}
