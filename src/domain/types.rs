// ==========================================
// Air Quality Decision Support Platform - Domain Types
// ==========================================
// Responsibility: pollutant identifiers and the discrete label enums
// used by every vertical (threshold ladders live on the enums)
// All ladders are total and non-overlapping over their score range
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Pollutant
// ==========================================
// Serialized form matches the provider field names (pm2_5, o3, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pollutant {
    #[serde(rename = "pm2_5")]
    Pm25,
    Pm10,
    O3,
    No2,
    So2,
    Co,
}

impl Pollutant {
    /// All pollutants carried by a provider reading, in provider order.
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::O3,
        Pollutant::No2,
        Pollutant::So2,
        Pollutant::Co,
    ];

    /// Provider field name (also the serialized form).
    pub fn key(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "pm2_5",
            Pollutant::Pm10 => "pm10",
            Pollutant::O3 => "o3",
            Pollutant::No2 => "no2",
            Pollutant::So2 => "so2",
            Pollutant::Co => "co",
        }
    }

    /// Human-readable label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::O3 => "O3",
            Pollutant::No2 => "NO2",
            Pollutant::So2 => "SO2",
            Pollutant::Co => "CO",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// AQI Category
// ==========================================
// Coarse banding of the 0..=300 AQI scale for dashboards and maps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AqiCategory {
    Good,      // AQI < 50
    Moderate,  // AQI < 100
    Poor,      // AQI < 200
    Hazardous, // AQI >= 200
}

impl AqiCategory {
    pub fn from_aqi(aqi: u16) -> Self {
        if aqi < 50 {
            AqiCategory::Good
        } else if aqi < 100 {
            AqiCategory::Moderate
        } else if aqi < 200 {
            AqiCategory::Poor
        } else {
            AqiCategory::Hazardous
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::Poor => "Poor",
            AqiCategory::Hazardous => "Hazardous",
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AqiCategory::Good => write!(f, "GOOD"),
            AqiCategory::Moderate => write!(f, "MODERATE"),
            AqiCategory::Poor => write!(f, "POOR"),
            AqiCategory::Hazardous => write!(f, "HAZARDOUS"),
        }
    }
}

// ==========================================
// Map Marker Color
// ==========================================
// Banded directly on raw PM2.5, not on AQI, so markers stay meaningful
// when the AQI conversion is skipped by a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarkerColor {
    Green,  // PM2.5 <= 12
    Yellow, // PM2.5 <= 35
    Orange, // PM2.5 <= 55
    Red,    // above
}

impl MarkerColor {
    pub fn from_pm25(pm25: f64) -> Self {
        if pm25 <= 12.0 {
            MarkerColor::Green
        } else if pm25 <= 35.0 {
            MarkerColor::Yellow
        } else if pm25 <= 55.0 {
            MarkerColor::Orange
        } else {
            MarkerColor::Red
        }
    }
}

impl fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerColor::Green => write!(f, "GREEN"),
            MarkerColor::Yellow => write!(f, "YELLOW"),
            MarkerColor::Orange => write!(f, "ORANGE"),
            MarkerColor::Red => write!(f, "RED"),
        }
    }
}

// ==========================================
// Crop Kind
// ==========================================
// Lookup keys for crop sensitivity profiles; unknown keys fall back to
// wheat at the engine level (silent by design, logged at debug)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropKind {
    Wheat,
    Rice,
    Corn,
    Soybean,
    Cotton,
}

impl CropKind {
    /// Parse a user-facing crop key. Returns None for unknown keys so the
    /// caller can apply its documented fallback.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "wheat" => Some(CropKind::Wheat),
            "rice" => Some(CropKind::Rice),
            "corn" => Some(CropKind::Corn),
            "soybean" => Some(CropKind::Soybean),
            "cotton" => Some(CropKind::Cotton),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            CropKind::Wheat => "wheat",
            CropKind::Rice => "rice",
            CropKind::Corn => "corn",
            CropKind::Soybean => "soybean",
            CropKind::Cotton => "cotton",
        }
    }
}

impl fmt::Display for CropKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CropKind::Wheat => write!(f, "WHEAT"),
            CropKind::Rice => write!(f, "RICE"),
            CropKind::Corn => write!(f, "CORN"),
            CropKind::Soybean => write!(f, "SOYBEAN"),
            CropKind::Cotton => write!(f, "COTTON"),
        }
    }
}

// ==========================================
// Age Group
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Child,
    Adult,
    Elderly,
}

impl AgeGroup {
    /// Parse a user-facing age-group key. Unknown keys resolve to the
    /// adult profile at the engine level.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "child" => Some(AgeGroup::Child),
            "adult" => Some(AgeGroup::Adult),
            "elderly" => Some(AgeGroup::Elderly),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            AgeGroup::Child => "child",
            AgeGroup::Adult => "adult",
            AgeGroup::Elderly => "elderly",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeGroup::Child => write!(f, "CHILD"),
            AgeGroup::Adult => write!(f, "ADULT"),
            AgeGroup::Elderly => write!(f, "ELDERLY"),
        }
    }
}

// ==========================================
// Health Condition
// ==========================================
// Flagged pre-existing conditions; asthma and heart disease override the
// age-group profile, diabetes only affects recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthCondition {
    Asthma,
    HeartDisease,
    Diabetes,
}

impl HealthCondition {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "asthma" => Some(HealthCondition::Asthma),
            "heart_disease" => Some(HealthCondition::HeartDisease),
            "diabetes" => Some(HealthCondition::Diabetes),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            HealthCondition::Asthma => "asthma",
            HealthCondition::HeartDisease => "heart_disease",
            HealthCondition::Diabetes => "diabetes",
        }
    }
}

impl fmt::Display for HealthCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthCondition::Asthma => write!(f, "ASTHMA"),
            HealthCondition::HeartDisease => write!(f, "HEART_DISEASE"),
            HealthCondition::Diabetes => write!(f, "DIABETES"),
        }
    }
}

// ==========================================
// Risk Profile
// ==========================================
// The sensitivity profile actually applied by the health engine after
// condition/age precedence is resolved; recorded on every assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskProfile {
    Child,
    Adult,
    Elderly,
    Asthma,
    HeartDisease,
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskProfile::Child => write!(f, "CHILD"),
            RiskProfile::Adult => write!(f, "ADULT"),
            RiskProfile::Elderly => write!(f, "ELDERLY"),
            RiskProfile::Asthma => write!(f, "ASTHMA"),
            RiskProfile::HeartDisease => write!(f, "HEART_DISEASE"),
        }
    }
}

// ==========================================
// Impact Level (agriculture)
// ==========================================
// Ladder over yield-loss percent: <2 / <5 / <10 / above
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImpactLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl ImpactLevel {
    pub fn from_impact_percent(pct: f64) -> Self {
        if pct < 2.0 {
            ImpactLevel::Low
        } else if pct < 5.0 {
            ImpactLevel::Moderate
        } else if pct < 10.0 {
            ImpactLevel::High
        } else {
            ImpactLevel::Critical
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpactLevel::Low => write!(f, "LOW"),
            ImpactLevel::Moderate => write!(f, "MODERATE"),
            ImpactLevel::High => write!(f, "HIGH"),
            ImpactLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

// ==========================================
// Health Risk Level
// ==========================================
// Ladder over the 0..=10 risk score: <2 / <4 / <6 / <8 / above
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthRiskLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
    Hazardous,
}

impl HealthRiskLevel {
    pub fn from_risk_score(score: f64) -> Self {
        if score < 2.0 {
            HealthRiskLevel::Low
        } else if score < 4.0 {
            HealthRiskLevel::Moderate
        } else if score < 6.0 {
            HealthRiskLevel::High
        } else if score < 8.0 {
            HealthRiskLevel::VeryHigh
        } else {
            HealthRiskLevel::Hazardous
        }
    }
}

impl fmt::Display for HealthRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthRiskLevel::Low => write!(f, "LOW"),
            HealthRiskLevel::Moderate => write!(f, "MODERATE"),
            HealthRiskLevel::High => write!(f, "HIGH"),
            HealthRiskLevel::VeryHigh => write!(f, "VERY_HIGH"),
            HealthRiskLevel::Hazardous => write!(f, "HAZARDOUS"),
        }
    }
}

// ==========================================
// Suitability Level (real estate)
// ==========================================
// Ladder over the 0..=100 suitability score: >80 / >50 / below
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuitabilityLevel {
    High,
    Moderate,
    Low,
}

impl SuitabilityLevel {
    pub fn from_suitability_score(score: f64) -> Self {
        if score > 80.0 {
            SuitabilityLevel::High
        } else if score > 50.0 {
            SuitabilityLevel::Moderate
        } else {
            SuitabilityLevel::Low
        }
    }
}

impl fmt::Display for SuitabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuitabilityLevel::High => write!(f, "HIGH"),
            SuitabilityLevel::Moderate => write!(f, "MODERATE"),
            SuitabilityLevel::Low => write!(f, "LOW"),
        }
    }
}

// ==========================================
// Route Status (travel)
// ==========================================
// Ladder over the route score (mean of endpoint AQIs): <50 / <100 / above
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteStatus {
    LowPollution,
    ModeratePollution,
    HighPollution,
}

impl RouteStatus {
    pub fn from_route_score(score: f64) -> Self {
        if score < 50.0 {
            RouteStatus::LowPollution
        } else if score < 100.0 {
            RouteStatus::ModeratePollution
        } else {
            RouteStatus::HighPollution
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RouteStatus::LowPollution => "Low Pollution",
            RouteStatus::ModeratePollution => "Moderate Pollution",
            RouteStatus::HighPollution => "High Pollution",
        }
    }
}

impl fmt::Display for RouteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteStatus::LowPollution => write!(f, "LOW_POLLUTION"),
            RouteStatus::ModeratePollution => write!(f, "MODERATE_POLLUTION"),
            RouteStatus::HighPollution => write!(f, "HIGH_POLLUTION"),
        }
    }
}

// ==========================================
// Vertical
// ==========================================
// The five decision-support verticals; used to tag per-vertical failures
// in the integrated report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Vertical {
    Agriculture,
    SmartCities,
    Healthcare,
    Travel,
    RealEstate,
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vertical::Agriculture => write!(f, "AGRICULTURE"),
            Vertical::SmartCities => write!(f, "SMART_CITIES"),
            Vertical::Healthcare => write!(f, "HEALTHCARE"),
            Vertical::Travel => write!(f, "TRAVEL"),
            Vertical::RealEstate => write!(f, "REAL_ESTATE"),
        }
    }
}
