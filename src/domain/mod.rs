// ==========================================
// Air Quality Decision Support Platform - Domain Layer
// ==========================================
// Responsibility: immutable value records, label enums, city catalog
// No provider access and no scoring logic in this layer
// ==========================================

pub mod assessment;
pub mod location;
pub mod reading;
pub mod types;

// Re-export the core records
pub use assessment::{
    CityAirSnapshot, CleanAirDestination, CropImpactAssessment, HealthRiskAssessment,
    HourlyAirProjection, IntegratedReport, PollutantImpact, PollutantRisk, RouteAssessment,
    SiteSuitability, VerticalFailure,
};
pub use location::{monitored_city, CityCoord, Location, MONITORED_CITIES};
pub use reading::{DailyAggregate, PollutantReading};
pub use types::{
    AgeGroup, AqiCategory, CropKind, HealthCondition, HealthRiskLevel, ImpactLevel, MarkerColor,
    Pollutant, RiskProfile, RouteStatus, SuitabilityLevel, Vertical,
};
