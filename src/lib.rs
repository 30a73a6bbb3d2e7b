// ==========================================
// Air Quality Decision Support Platform - Core Library
// ==========================================
// Deterministic pollutant-to-risk scoring for five verticals:
// agriculture, smart cities, healthcare, travel, real estate
// All scoring is pure and synchronous; provider and narrative services
// sit behind traits and never block numeric results
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - value records and label enums
pub mod domain;

// Engine layer - pure scoring logic
pub mod engine;

// Provider layer - collaborator seams (weather data, narrative)
pub mod provider;

// Configuration layer
pub mod config;

// Logging
pub mod logging;

// API layer - orchestration facades
pub mod api;

// ==========================================
// Core type re-exports
// ==========================================

// Domain types
pub use domain::types::{
    AgeGroup, AqiCategory, CropKind, HealthCondition, HealthRiskLevel, ImpactLevel, MarkerColor,
    Pollutant, RiskProfile, RouteStatus, SuitabilityLevel, Vertical,
};

// Domain records
pub use domain::{
    CityAirSnapshot, CleanAirDestination, CropImpactAssessment, DailyAggregate,
    HealthRiskAssessment, HourlyAirProjection, IntegratedReport, Location, PollutantReading,
    RouteAssessment, SiteSuitability, VerticalFailure,
};

// Engines and the shared converter
pub use engine::{aqi_from_pm25, AirQualityTrendEngine, CropImpactEngine, HealthRiskEngine};

// Provider seams
pub use provider::{
    FixtureWeatherSource, NarrativeProvider, NarrativeRequest, OfflineNarrativeProvider,
    WeatherDataSource,
};

// API facades
pub use api::{ApiError, ApiResult, AssessmentApi, NarrativeApi, ReportOptions};

// Configuration
pub use config::AppConfig;

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Application name
pub const APP_NAME: &str = "Air Quality Decision Support Platform";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
