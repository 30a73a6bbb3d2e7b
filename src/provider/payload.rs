// ==========================================
// Air Quality Decision Support Platform - Provider Payload Models
// ==========================================
// Responsibility: tolerant models of the weather provider's JSON shapes
// Every field is optional; partially missing payloads parse cleanly and
// the api layer decides which absences are errors
// ==========================================

use crate::domain::location::Location;
use crate::domain::reading::PollutantReading;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// Provider timestamp format
// ==========================================

/// Forecast hours carry local timestamps like "2025-06-01 14:00".
/// Unparseable or absent values degrade to None instead of failing the
/// whole payload.
pub(crate) mod provider_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M";

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.and_then(|s| NaiveDateTime::parse_from_str(&s, FORMAT).ok()))
    }
}

// ==========================================
// Current conditions payload
// ==========================================

/// The "current" block of a current-conditions payload. The air_quality
/// object shares the PollutantReading shape directly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrentBlock {
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub temp_c: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub wind_kph: Option<f64>,
    #[serde(default)]
    pub pressure_mb: Option<f64>,
    #[serde(default)]
    pub air_quality: Option<PollutantReading>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrentPayload {
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub current: Option<CurrentBlock>,
}

impl CurrentPayload {
    /// The pollutant reading, when both the current block and its
    /// air_quality object are present. Absence is for the caller to turn
    /// into its MissingData error; it is never a default reading.
    pub fn reading(&self) -> Option<&PollutantReading> {
        self.current.as_ref()?.air_quality.as_ref()
    }
}

// ==========================================
// Forecast payload
// ==========================================

/// One forecast hour. Weather variables default to absent; a present
/// air_quality object may itself be partial.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HourObservation {
    #[serde(default, with = "provider_time")]
    pub time: Option<NaiveDateTime>,
    #[serde(default)]
    pub temp_c: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub wind_kph: Option<f64>,
    #[serde(default)]
    pub pressure_mb: Option<f64>,
    #[serde(default)]
    pub air_quality: Option<PollutantReading>,
}

/// One forecast day. The date is the only field the models require; a
/// day without its date is structurally unusable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    #[serde(default)]
    pub hour: Vec<HourObservation>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastBlock {
    #[serde(default)]
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastPayload {
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub forecast: Option<ForecastBlock>,
}

impl ForecastPayload {
    /// Flatten the forecast into (calendar day, reading) pairs for the
    /// daily aggregator. None when the forecast section itself is
    /// absent; hours without an air_quality object contribute an empty
    /// reading.
    pub fn dated_hours(&self) -> Option<Vec<(NaiveDate, PollutantReading)>> {
        let forecast = self.forecast.as_ref()?;
        let mut hours = Vec::new();
        for day in &forecast.forecastday {
            for hour in &day.hour {
                hours.push((day.date, hour.air_quality.unwrap_or_default()));
            }
        }
        Some(hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_payload_tolerates_missing_sections() {
        let payload: CurrentPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.location.is_none());
        assert!(payload.reading().is_none());

        let payload: CurrentPayload =
            serde_json::from_str(r#"{"current": {"temp_c": 31.0}}"#).unwrap();
        assert!(payload.reading().is_none());
    }

    #[test]
    fn test_partial_air_quality_parses() {
        let payload: CurrentPayload = serde_json::from_str(
            r#"{"current": {"air_quality": {"pm2_5": 42.5, "o3": 80}}}"#,
        )
        .unwrap();
        let reading = payload.reading().unwrap();
        assert_eq!(reading.pm2_5, Some(42.5));
        assert_eq!(reading.o3, Some(80.0));
        assert_eq!(reading.no2, None);
    }

    #[test]
    fn test_hour_time_parses_provider_format() {
        let hour: HourObservation =
            serde_json::from_str(r#"{"time": "2026-08-01 14:00", "temp_c": 33.5}"#).unwrap();
        let time = hour.time.unwrap();
        assert_eq!(time.format("%Y-%m-%d %H:%M").to_string(), "2026-08-01 14:00");
    }

    #[test]
    fn test_hour_time_degrades_to_none() {
        let hour: HourObservation = serde_json::from_str(r#"{"time": "not a time"}"#).unwrap();
        assert!(hour.time.is_none());
        let hour: HourObservation = serde_json::from_str("{}").unwrap();
        assert!(hour.time.is_none());
    }

    #[test]
    fn test_dated_hours_absent_without_forecast_section() {
        let payload: ForecastPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.dated_hours().is_none());

        let payload: ForecastPayload = serde_json::from_str(
            r#"{"forecast": {"forecastday": [
                {"date": "2026-08-01", "hour": [
                    {"air_quality": {"pm2_5": 20.0}},
                    {}
                ]}
            ]}}"#,
        )
        .unwrap();
        let hours = payload.dated_hours().unwrap();
        assert_eq!(hours.len(), 2);
        assert_eq!(hours[0].1.pm2_5, Some(20.0));
        assert!(hours[1].1.is_empty());
    }
}
