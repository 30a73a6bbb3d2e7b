// ==========================================
// Air Quality Decision Support Platform - Crop Impact Engine
// ==========================================
// Responsibility: estimate crop yield loss from one pollutant reading
// Stateless; sensitivity tables are fixed per crop kind
// ==========================================

use crate::domain::assessment::{CropImpactAssessment, PollutantImpact};
use crate::domain::reading::PollutantReading;
use crate::domain::types::{CropKind, ImpactLevel, Pollutant};
use crate::engine::exposure;

/// Ceiling for the total estimated yield loss (%).
pub const MAX_YIELD_LOSS_PCT: f64 = 50.0;

// Contribution scale: normalized exposure ratio to impact percent
const IMPACT_SCALE: f64 = 100.0;

/// Pollutant sensitivity coefficients per crop kind. Order matches the
/// reported breakdown order.
fn sensitivity_profile(crop: CropKind) -> &'static [(Pollutant, f64); 4] {
    match crop {
        CropKind::Wheat => &[
            (Pollutant::O3, 0.12),
            (Pollutant::So2, 0.08),
            (Pollutant::No2, 0.05),
            (Pollutant::Pm25, 0.10),
        ],
        CropKind::Rice => &[
            (Pollutant::O3, 0.05),
            (Pollutant::So2, 0.03),
            (Pollutant::No2, 0.02),
            (Pollutant::Pm25, 0.04),
        ],
        CropKind::Corn => &[
            (Pollutant::O3, 0.15),
            (Pollutant::So2, 0.10),
            (Pollutant::No2, 0.07),
            (Pollutant::Pm25, 0.12),
        ],
        CropKind::Soybean => &[
            (Pollutant::O3, 0.18),
            (Pollutant::So2, 0.12),
            (Pollutant::No2, 0.08),
            (Pollutant::Pm25, 0.14),
        ],
        CropKind::Cotton => &[
            (Pollutant::O3, 0.10),
            (Pollutant::So2, 0.06),
            (Pollutant::No2, 0.04),
            (Pollutant::Pm25, 0.08),
        ],
    }
}

// ==========================================
// CropImpactEngine
// ==========================================
pub struct CropImpactEngine;

impl CropImpactEngine {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a crop key, falling back to wheat for unknown keys.
    /// The fallback is silent by design and only logged at debug level.
    pub fn resolve_crop(crop_key: &str) -> CropKind {
        CropKind::from_key(crop_key).unwrap_or_else(|| {
            tracing::debug!(crop_key, "unknown crop key, falling back to wheat profile");
            CropKind::Wheat
        })
    }

    /// Assess yield loss for one reading.
    ///
    /// # Rules
    /// 1. Resolve the sensitivity profile for the requested crop key.
    /// 2. Per profiled pollutant: normalized exposure (clipped at 3.0)
    ///    times the coefficient times 100 gives the impact percent.
    /// 3. The total is capped at [`MAX_YIELD_LOSS_PCT`].
    /// 4. Item and total levels come from the impact ladder.
    ///
    /// Absent fields in the reading score as 0; a missing reading as a
    /// whole is the caller's MissingData case, never fabricated here.
    pub fn assess(&self, reading: &PollutantReading, crop_key: &str) -> CropImpactAssessment {
        let crop = Self::resolve_crop(crop_key);
        let profile = sensitivity_profile(crop);

        let mut total = 0.0;
        let mut impacts = Vec::with_capacity(profile.len());

        for (pollutant, coefficient) in profile {
            let concentration = reading.value_or_zero(*pollutant);
            // reference_level covers every profiled pollutant
            let normalized = exposure::normalized_exposure(*pollutant, concentration)
                .unwrap_or_default();
            let impact_percent = coefficient * normalized * IMPACT_SCALE;

            impacts.push(PollutantImpact {
                pollutant: *pollutant,
                concentration,
                impact_percent,
                level: ImpactLevel::from_impact_percent(impact_percent),
            });
            total += impact_percent;
        }

        let total_yield_loss_pct = total.min(MAX_YIELD_LOSS_PCT);

        CropImpactAssessment {
            requested_crop: crop_key.trim().to_string(),
            crop,
            total_yield_loss_pct,
            level: ImpactLevel::from_impact_percent(total_yield_loss_pct),
            impacts,
        }
    }
}

impl Default for CropImpactEngine {
    fn default() -> Self {
        Self::new()
    }
}
