// ==========================================
// Air Quality Decision Support Platform - Site Suitability
// ==========================================
// Responsibility: development-site suitability score from the local AQI
// ==========================================

use crate::domain::assessment::SiteSuitability;
use crate::domain::reading::PollutantReading;
use crate::domain::types::{Pollutant, SuitabilityLevel};
use crate::engine::aqi::aqi_from_pm25;

/// Assess a development site from one reading.
///
/// # Rules
/// 1. AQI from the reading's PM2.5 (absent scores as 0).
/// 2. Suitability = 100 - AQI/3, floored at 0, so the score stays in
///    0..=100 across the whole AQI scale.
/// 3. Level from the suitability ladder.
pub fn assess_site(reading: &PollutantReading) -> SiteSuitability {
    let pm2_5 = reading.value_or_zero(Pollutant::Pm25);
    let aqi = aqi_from_pm25(pm2_5);
    let score = (100.0 - aqi as f64 / 3.0).max(0.0);

    SiteSuitability {
        pm2_5,
        aqi,
        score,
        level: SuitabilityLevel::from_suitability_score(score),
    }
}
