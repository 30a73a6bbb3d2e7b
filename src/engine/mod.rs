// ==========================================
// Air Quality Decision Support Platform - Engine Layer
// ==========================================
// Responsibility: the pure scoring logic of every vertical
// No I/O, no shared mutable state; everything here is safe to call
// concurrently and yields the same output for the same input
// ==========================================

pub mod agriculture;
pub mod aqi;
pub mod estimator;
pub mod exposure;
pub mod forecast;
pub mod healthcare;
pub mod real_estate;
pub mod smart_city;
pub mod travel;

// Re-export the engines and the shared converter
pub use agriculture::CropImpactEngine;
pub use aqi::{aqi_from_pm25, AQI_MAX};
pub use healthcare::HealthRiskEngine;
pub use smart_city::AirQualityTrendEngine;
