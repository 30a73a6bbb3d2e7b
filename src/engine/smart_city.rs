// ==========================================
// Air Quality Decision Support Platform - Air Quality Trend Engine
// ==========================================
// Responsibility: multi-city current-air snapshots and the hourly trend
// projection over a forecast payload
// Estimation of missing PM2.5 is an explicit engine mode; a present
// value of 0 is an observation and is never re-estimated
// ==========================================

use crate::domain::assessment::{CityAirSnapshot, HourlyAirProjection};
use crate::domain::location::Location;
use crate::domain::reading::PollutantReading;
use crate::domain::types::{AqiCategory, MarkerColor, Pollutant};
use crate::engine::aqi::aqi_from_pm25;
use crate::engine::estimator;
use crate::provider::payload::ForecastPayload;

// ==========================================
// AirQualityTrendEngine
// ==========================================
pub struct AirQualityTrendEngine {
    estimate_missing_pm25: bool,
}

impl AirQualityTrendEngine {
    /// Default mode: estimate PM2.5 from weather variables for hours
    /// where the provider omitted it.
    pub fn new() -> Self {
        Self {
            estimate_missing_pm25: true,
        }
    }

    /// Observed-only mode: hours without an observed PM2.5 are omitted
    /// from the projection.
    pub fn without_estimation() -> Self {
        Self {
            estimate_missing_pm25: false,
        }
    }

    /// Build a current-air snapshot for one city.
    pub fn city_snapshot(
        city: &str,
        reading: &PollutantReading,
        location: Option<Location>,
    ) -> CityAirSnapshot {
        let pm25 = reading.value_or_zero(Pollutant::Pm25);
        let aqi = aqi_from_pm25(pm25);
        CityAirSnapshot {
            city: city.to_string(),
            reading: *reading,
            aqi,
            category: AqiCategory::from_aqi(aqi),
            marker: MarkerColor::from_pm25(pm25),
            location,
        }
    }

    /// Project hourly air quality over the first `days` forecast days.
    ///
    /// # Rules
    /// 1. None when the forecast section is absent (caller's MissingData
    ///    case).
    /// 2. Hours without a parseable timestamp are skipped; other missing
    ///    weather variables default to 0.
    /// 3. PM2.5 comes from the observation when present, otherwise from
    ///    the weather-variable estimator (or the hour is omitted in
    ///    observed-only mode). Rows carry the `estimated` flag.
    pub fn project(
        &self,
        payload: &ForecastPayload,
        days: usize,
    ) -> Option<Vec<HourlyAirProjection>> {
        let forecast = payload.forecast.as_ref()?;

        let mut rows = Vec::new();
        for day in forecast.forecastday.iter().take(days) {
            for hour in &day.hour {
                let Some(time) = hour.time else {
                    tracing::debug!(date = %day.date, "skipping forecast hour without timestamp");
                    continue;
                };

                let temp_c = hour.temp_c.unwrap_or(0.0);
                let humidity = hour.humidity.unwrap_or(0.0);
                let wind_kph = hour.wind_kph.unwrap_or(0.0);
                let pressure_mb = hour.pressure_mb.unwrap_or(0.0);

                let observed = hour.air_quality.and_then(|aq| aq.pm2_5);
                let (pm2_5, estimated) = match observed {
                    Some(value) => (value, false),
                    None if self.estimate_missing_pm25 => {
                        (estimator::estimate_pm25(temp_c, humidity, wind_kph), true)
                    }
                    None => continue,
                };

                rows.push(HourlyAirProjection {
                    time,
                    temp_c,
                    humidity,
                    wind_kph,
                    pressure_mb,
                    pm2_5,
                    aqi: aqi_from_pm25(pm2_5),
                    estimated,
                });
            }
        }
        Some(rows)
    }
}

impl Default for AirQualityTrendEngine {
    fn default() -> Self {
        Self::new()
    }
}
