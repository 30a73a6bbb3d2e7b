// ==========================================
// Air Quality Decision Support Platform - Health Risk Engine
// ==========================================
// Responsibility: personal health risk score (out of 10) from one
// pollutant reading, plus rule-based guidance lines
// Stateless; risk profiles are fixed coefficient tables
// ==========================================

use crate::domain::assessment::{HealthRiskAssessment, PollutantRisk};
use crate::domain::reading::PollutantReading;
use crate::domain::types::{AgeGroup, HealthCondition, HealthRiskLevel, Pollutant, RiskProfile};
use crate::engine::exposure;

/// Ceiling for both the per-pollutant and the overall risk score.
pub const MAX_RISK_SCORE: f64 = 10.0;

// Contribution scale: normalized exposure ratio to risk points
const RISK_SCALE: f64 = 10.0;
// The overall score averages over the four profiled pollutants
const PROFILED_POLLUTANT_COUNT: f64 = 4.0;

/// Risk multipliers per profile, ordered (PM2.5, O3, NO2, SO2) to match
/// the reported breakdown order.
fn risk_coefficients(profile: RiskProfile) -> &'static [(Pollutant, f64); 4] {
    match profile {
        RiskProfile::Child => &[
            (Pollutant::Pm25, 1.5),
            (Pollutant::O3, 1.3),
            (Pollutant::No2, 1.2),
            (Pollutant::So2, 1.4),
        ],
        RiskProfile::Adult => &[
            (Pollutant::Pm25, 1.0),
            (Pollutant::O3, 1.0),
            (Pollutant::No2, 1.0),
            (Pollutant::So2, 1.0),
        ],
        RiskProfile::Elderly => &[
            (Pollutant::Pm25, 1.8),
            (Pollutant::O3, 1.6),
            (Pollutant::No2, 1.4),
            (Pollutant::So2, 1.7),
        ],
        RiskProfile::Asthma => &[
            (Pollutant::Pm25, 2.2),
            (Pollutant::O3, 2.0),
            (Pollutant::No2, 1.8),
            (Pollutant::So2, 2.1),
        ],
        RiskProfile::HeartDisease => &[
            (Pollutant::Pm25, 2.0),
            (Pollutant::O3, 1.7),
            (Pollutant::No2, 1.5),
            (Pollutant::So2, 1.8),
        ],
    }
}

// ==========================================
// HealthRiskEngine
// ==========================================
pub struct HealthRiskEngine;

impl HealthRiskEngine {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the age-group key, falling back to adult for unknown keys.
    pub fn resolve_age_group(age_group_key: &str) -> AgeGroup {
        AgeGroup::from_key(age_group_key).unwrap_or_else(|| {
            tracing::debug!(age_group_key, "unknown age group key, falling back to adult profile");
            AgeGroup::Adult
        })
    }

    /// Profile precedence: asthma overrides everything, then heart
    /// disease, then the age group. Other conditions (diabetes) do not
    /// change the coefficient profile.
    pub fn resolve_profile(age_group: AgeGroup, conditions: &[HealthCondition]) -> RiskProfile {
        if conditions.contains(&HealthCondition::Asthma) {
            RiskProfile::Asthma
        } else if conditions.contains(&HealthCondition::HeartDisease) {
            RiskProfile::HeartDisease
        } else {
            match age_group {
                AgeGroup::Child => RiskProfile::Child,
                AgeGroup::Adult => RiskProfile::Adult,
                AgeGroup::Elderly => RiskProfile::Elderly,
            }
        }
    }

    /// Assess personal health risk for one reading.
    ///
    /// # Rules
    /// 1. Resolve the applied profile (condition precedence, then age).
    /// 2. Per profiled pollutant: normalized exposure times the profile
    ///    coefficient times 10, capped at 10 risk points.
    /// 3. Overall score = total / 4, capped at 10.
    /// 4. Levels come from the health risk ladder; guidance lines from
    ///    the overall score, age group, and flagged conditions.
    pub fn assess(
        &self,
        reading: &PollutantReading,
        age_group_key: &str,
        conditions: &[HealthCondition],
    ) -> HealthRiskAssessment {
        let age_group = Self::resolve_age_group(age_group_key);
        let applied_profile = Self::resolve_profile(age_group, conditions);
        let coefficients = risk_coefficients(applied_profile);

        let mut total = 0.0;
        let mut pollutant_risks = Vec::with_capacity(coefficients.len());

        for (pollutant, coefficient) in coefficients {
            let concentration = reading.value_or_zero(*pollutant);
            let normalized = exposure::normalized_exposure(*pollutant, concentration)
                .unwrap_or_default();
            let risk_score = (normalized * coefficient * RISK_SCALE).min(MAX_RISK_SCORE);

            pollutant_risks.push(PollutantRisk {
                pollutant: *pollutant,
                concentration,
                risk_score,
                level: HealthRiskLevel::from_risk_score(risk_score),
            });
            total += risk_score;
        }

        let overall_risk_score = (total / PROFILED_POLLUTANT_COUNT).min(MAX_RISK_SCORE);

        HealthRiskAssessment {
            age_group,
            conditions: conditions.to_vec(),
            applied_profile,
            overall_risk_score,
            overall_level: HealthRiskLevel::from_risk_score(overall_risk_score),
            pollutant_risks,
            recommendations: Self::basic_recommendations(overall_risk_score, age_group, conditions),
        }
    }

    /// Rule-based guidance lines. The score ladder here is coarser than
    /// the level ladder: everything from 6 upward gets the hazardous
    /// guidance.
    fn basic_recommendations(
        risk_score: f64,
        age_group: AgeGroup,
        conditions: &[HealthCondition],
    ) -> Vec<String> {
        let mut recommendations: Vec<String> = Vec::new();

        if risk_score < 2.0 {
            recommendations.push("Air quality is good. Normal outdoor activities are safe.".to_string());
            recommendations.push("Continue regular exercise routines.".to_string());
        } else if risk_score < 4.0 {
            recommendations.push(
                "Moderate air pollution. Sensitive individuals should limit outdoor activities."
                    .to_string(),
            );
            recommendations.push("Consider indoor exercise on high pollution days.".to_string());
        } else if risk_score < 6.0 {
            recommendations.push(
                "Unhealthy air quality. Limit outdoor activities, especially vigorous exercise."
                    .to_string(),
            );
            recommendations.push("Use air purifiers indoors.".to_string());
            recommendations.push("Wear N95 masks when outdoors.".to_string());
        } else {
            recommendations.push("Hazardous air quality. Avoid outdoor activities.".to_string());
            recommendations.push("Stay indoors with air purification.".to_string());
            recommendations.push(
                "Seek medical attention if experiencing respiratory issues.".to_string(),
            );
        }

        match age_group {
            AgeGroup::Child => recommendations
                .push("Keep children indoors during high pollution periods.".to_string()),
            AgeGroup::Elderly => recommendations
                .push("Elderly individuals should be extra cautious and monitor symptoms.".to_string()),
            AgeGroup::Adult => {}
        }

        if conditions.contains(&HealthCondition::Asthma) {
            recommendations.push("Keep rescue inhalers readily available.".to_string());
        }
        if conditions.contains(&HealthCondition::HeartDisease) {
            recommendations.push("Monitor heart rate and blood pressure regularly.".to_string());
        }

        recommendations
    }
}

impl Default for HealthRiskEngine {
    fn default() -> Self {
        Self::new()
    }
}
