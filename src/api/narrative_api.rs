// ==========================================
// Air Quality Decision Support Platform - Narrative API
// ==========================================
// Responsibility: build per-vertical narrative requests from computed
// assessments and degrade provider failures to a visible placeholder
// Numeric scoring results never depend on this layer succeeding
// ==========================================

use std::sync::Arc;

use serde_json::{json, Value};

use crate::domain::assessment::{
    CityAirSnapshot, CropImpactAssessment, HealthRiskAssessment, IntegratedReport,
    RouteAssessment, SiteSuitability,
};
use crate::domain::reading::DailyAggregate;
use crate::domain::types::Pollutant;
use crate::provider::narrative::{NarrativeProvider, NarrativeRequest};

// ==========================================
// NarrativeApi
// ==========================================

pub struct NarrativeApi {
    provider: Arc<dyn NarrativeProvider>,
}

impl NarrativeApi {
    pub fn new(provider: Arc<dyn NarrativeProvider>) -> Self {
        Self { provider }
    }

    /// The provider's prose, or the placeholder when it fails. The
    /// failure is logged and swallowed here so already-computed scores
    /// stay presentable.
    pub fn narrative_or_placeholder(&self, request: &NarrativeRequest) -> String {
        match self.provider.narrate(request) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(%err, "narrative provider failed, falling back to placeholder");
                format!("AI analysis unavailable: {err}")
            }
        }
    }

    // ==========================================
    // Request builders (one per vertical)
    // ==========================================

    pub fn farming_request(
        assessment: &CropImpactAssessment,
        daily_forecast: &[DailyAggregate],
        forecast_days: u8,
    ) -> NarrativeRequest {
        let context = format!(
            "Agriculture air quality analysis for {} farming in India over the next {} days:\n\
             Provide recommendations based on current and forecasted air quality data for:\n\
             - Precision agriculture strategies\n\
             - Fertilizer application adjustments\n\
             - Crop protection measures\n\
             - Optimal planting/harvesting timing\n\
             - Pollutant-resistant varieties\n\
             - Soil management practices\n\
             Focus on practical, cost-effective solutions tailored for Indian farming conditions.",
            assessment.crop.key(),
            forecast_days
        );
        NarrativeRequest {
            context,
            data: json!({
                "current_impact": to_plain_value(assessment),
                "forecast_data": aggregate_records(daily_forecast),
            }),
        }
    }

    pub fn city_management_request(
        snapshots: &[CityAirSnapshot],
        daily_forecast: &[DailyAggregate],
        forecast_days: u8,
    ) -> NarrativeRequest {
        let context = format!(
            "Smart cities air quality management analysis in India over the next {} days:\n\
             Provide recommendations based on current and forecasted air quality data for:\n\
             - Traffic management strategies\n\
             - Industrial emission controls\n\
             - Public transportation optimization\n\
             - Green infrastructure development\n\
             - Emergency response protocols\n\
             - Citizen health advisories\n\
             Focus on actionable solutions for Indian urban environments.",
            forecast_days
        );
        NarrativeRequest {
            context,
            data: json!({
                "current_data": to_plain_value(&snapshots),
                "forecast_data": aggregate_records(daily_forecast),
            }),
        }
    }

    pub fn health_request(
        assessment: &HealthRiskAssessment,
        daily_forecast: &[DailyAggregate],
        forecast_days: u8,
    ) -> NarrativeRequest {
        let conditions: Vec<&str> = assessment.conditions.iter().map(|c| c.key()).collect();
        let context = format!(
            "Healthcare air quality risk analysis in India over the next {} days:\n\
             Patient profile: {} with conditions: {:?}\n\
             Current risk level: {}\n\
             Provide recommendations based on current and forecasted air quality data for:\n\
             - Daily activity modifications\n\
             - Medication adjustments if needed\n\
             - Protective measures\n\
             - When to seek medical attention\n\
             - Long-term health monitoring\n\
             - Indoor air quality improvements\n\
             Focus on evidence-based medical guidance tailored for Indian conditions.",
            forecast_days,
            assessment.age_group.key(),
            conditions,
            assessment.overall_level
        );
        NarrativeRequest {
            context,
            data: json!({
                "current_risk": to_plain_value(assessment),
                "forecast_data": aggregate_records(daily_forecast),
            }),
        }
    }

    pub fn travel_request(
        route: &RouteAssessment,
        start_forecast: &[DailyAggregate],
        end_forecast: &[DailyAggregate],
        forecast_days: u8,
    ) -> NarrativeRequest {
        let context = format!(
            "Sustainable travel and eco-tourism analysis in India over the next {} days:\n\
             Air pollution can reduce tourist arrivals by 10-15% in heavily polluted urban areas.\n\
             Provide recommendations based on current and forecasted air quality data for:\n\
             - Low-pollution travel routes\n\
             - Eco-tourism destination promotion\n\
             - Real-time pollution hotspot avoidance\n\
             - Sustainable travel policies\n\
             - Community-based tourism initiatives\n\
             - Traveler health and safety measures\n\
             Focus on actionable, India-specific solutions that promote sustainable tourism.",
            forecast_days
        );
        NarrativeRequest {
            context,
            data: json!({
                "current_data": to_plain_value(route),
                "start_city_forecast": aggregate_records(start_forecast),
                "end_city_forecast": aggregate_records(end_forecast),
            }),
        }
    }

    pub fn urban_planning_request(
        suitability: &SiteSuitability,
        daily_forecast: &[DailyAggregate],
        forecast_days: u8,
    ) -> NarrativeRequest {
        let context = format!(
            "Real estate and urban planning analysis in India over the next {} days:\n\
             Provide recommendations based on current and forecasted air quality data for:\n\
             - Pollution-resilient building designs\n\
             - Optimal site selection for real estate\n\
             - Green infrastructure integration\n\
             - Zoning and land-use policies\n\
             - Smart filter deployment in pollution hotspots\n\
             - Community resilience strategies\n\
             Focus on practical solutions for Indian urban environments to mitigate air pollution impacts.",
            forecast_days
        );
        NarrativeRequest {
            context,
            data: json!({
                "current_suitability": to_plain_value(suitability),
                "forecast_data": aggregate_records(daily_forecast),
            }),
        }
    }

    pub fn integrated_request(report: &IntegratedReport, forecast_days: u8) -> NarrativeRequest {
        let context = format!(
            "Integrated multi-domain air quality and pollution impact analysis for {} over the next {} days.\n\
             Provide a summary and actionable recommendations for agriculture, smart cities, healthcare, travel, and real estate.",
            report.location, forecast_days
        );

        let mut highlights = vec![
            json!({
                "module": "Agriculture",
                "metric": format!("{} yield loss", report.agriculture.crop.key()),
                "value": format!("{:.1}%", report.agriculture.total_yield_loss_pct),
            }),
            json!({
                "module": "Smart Cities",
                "metric": "AQI",
                "value": report.aqi,
            }),
            json!({
                "module": "Healthcare",
                "metric": format!("{} risk score", report.healthcare.age_group.key()),
                "value": format!("{:.1}/10", report.healthcare.overall_risk_score),
            }),
            json!({
                "module": "Real Estate",
                "metric": "suitability score",
                "value": format!("{:.1}/100", report.real_estate.score),
            }),
        ];
        if let Some(route) = &report.route {
            highlights.push(json!({
                "module": "Travel",
                "metric": format!("route score to {}", route.end_city),
                "value": format!("{:.1}", route.route_score),
            }));
        }

        NarrativeRequest {
            context,
            data: json!({
                "air_quality": to_plain_value(&report.current),
                "location_info": to_plain_value(&report.location),
                "forecast": aggregate_records(&report.daily_forecast),
                "triggered_values": highlights,
            }),
        }
    }
}

// ==========================================
// Serialization helpers
// ==========================================

/// Assessments serialize to plain key-value data; a serialization
/// failure degrades to null rather than blocking the request.
fn to_plain_value<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Daily aggregates flatten to one record per day with every pollutant
/// present (absent means render as 0, matching the display convention).
fn aggregate_records(daily_forecast: &[DailyAggregate]) -> Value {
    Value::Array(
        daily_forecast
            .iter()
            .map(|aggregate| {
                json!({
                    "date": aggregate.date.to_string(),
                    "pm2_5": aggregate.mean.value_or_zero(Pollutant::Pm25),
                    "pm10": aggregate.mean.value_or_zero(Pollutant::Pm10),
                    "o3": aggregate.mean.value_or_zero(Pollutant::O3),
                    "no2": aggregate.mean.value_or_zero(Pollutant::No2),
                    "so2": aggregate.mean.value_or_zero(Pollutant::So2),
                    "co": aggregate.mean.value_or_zero(Pollutant::Co),
                })
            })
            .collect(),
    )
}
