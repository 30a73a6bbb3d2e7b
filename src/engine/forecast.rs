// ==========================================
// Air Quality Decision Support Platform - Forecast Aggregator
// ==========================================
// Responsibility: reduce hourly pollutant readings to daily means
// Qualifying hours are those where a pollutant is present and non-zero;
// the provider reuses 0 as its own missing marker, so zeros are filtered
// the same way absent fields are
// ==========================================

use crate::domain::reading::{DailyAggregate, PollutantReading};
use crate::domain::types::Pollutant;
use crate::provider::payload::ForecastPayload;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

/// Aggregate timestamped hourly readings into per-day means, capped at
/// `days` entries, in chronological order.
pub fn aggregate_hours(
    hours: &[(NaiveDateTime, PollutantReading)],
    days: usize,
) -> Vec<DailyAggregate> {
    let dated: Vec<(NaiveDate, PollutantReading)> =
        hours.iter().map(|(ts, reading)| (ts.date(), *reading)).collect();
    aggregate_dated(&dated, days)
}

/// Aggregate hourly readings already tagged with their calendar day.
///
/// # Rules
/// 1. Group by calendar day; output is chronological regardless of input
///    order, capped at `days` entries.
/// 2. Per pollutant, average over the qualifying hours only (present and
///    non-zero).
/// 3. A day with zero qualifying hours for a pollutant leaves that
///    pollutant absent in the mean (rendered as 0 downstream), never an
///    error.
pub fn aggregate_dated(
    hours: &[(NaiveDate, PollutantReading)],
    days: usize,
) -> Vec<DailyAggregate> {
    let mut by_day: BTreeMap<NaiveDate, Vec<&PollutantReading>> = BTreeMap::new();
    for (date, reading) in hours {
        by_day.entry(*date).or_default().push(reading);
    }

    by_day
        .into_iter()
        .take(days)
        .map(|(date, readings)| DailyAggregate::new(date, mean_reading(&readings)))
        .collect()
}

/// Walk a forecast payload directly into daily means, one entry per
/// forecast day. A day with no hours (or no qualifying hours) aggregates
/// to an all-absent mean, never an error. None when the forecast section
/// itself is absent (the caller's MissingData case).
pub fn daily_averages(payload: &ForecastPayload, days: usize) -> Option<Vec<DailyAggregate>> {
    let forecast = payload.forecast.as_ref()?;
    Some(
        forecast
            .forecastday
            .iter()
            .take(days)
            .map(|day| {
                let readings: Vec<PollutantReading> = day
                    .hour
                    .iter()
                    .map(|h| h.air_quality.unwrap_or_default())
                    .collect();
                let refs: Vec<&PollutantReading> = readings.iter().collect();
                DailyAggregate::new(day.date, mean_reading(&refs))
            })
            .collect(),
    )
}

fn mean_reading(readings: &[&PollutantReading]) -> PollutantReading {
    let mut mean = PollutantReading::default();
    for pollutant in Pollutant::ALL {
        let values: Vec<f64> = readings
            .iter()
            .filter_map(|r| r.value(pollutant).filter(|v| *v != 0.0))
            .collect();
        if !values.is_empty() {
            mean.set(pollutant, Some(values.iter().sum::<f64>() / values.len() as f64));
        }
    }
    mean
}
