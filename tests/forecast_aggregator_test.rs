// ==========================================
// Forecast Aggregator tests
// ==========================================
// Target: hourly -> daily pollutant means
// Coverage: day grouping, zero filtering, empty days, horizon cap
// ==========================================

use air_quality_dss::domain::reading::PollutantReading;
use air_quality_dss::domain::types::Pollutant;
use air_quality_dss::engine::forecast;
use air_quality_dss::provider::payload::ForecastPayload;
use chrono::{NaiveDate, NaiveDateTime};

// ==========================================
// Test helpers
// ==========================================

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
}

fn hour(day: u32, hour: u32, pm2_5: Option<f64>) -> (NaiveDateTime, PollutantReading) {
    let ts = date(day).and_hms_opt(hour, 0, 0).unwrap();
    (
        ts,
        PollutantReading {
            pm2_5,
            ..Default::default()
        },
    )
}

// ==========================================
// Test case 1: grouping and means per calendar day
// ==========================================

#[test]
fn test_daily_means_group_by_calendar_day() {
    println!("\n=== Test: daily grouping ===");

    let hours = vec![
        hour(1, 6, Some(30.0)),
        hour(1, 12, Some(60.0)),
        hour(2, 6, Some(20.0)),
    ];
    let aggregates = forecast::aggregate_hours(&hours, 7);

    assert_eq!(aggregates.len(), 2);
    assert_eq!(aggregates[0].date, date(1));
    assert_eq!(aggregates[0].mean.pm2_5, Some(45.0));
    assert_eq!(aggregates[1].date, date(2));
    assert_eq!(aggregates[1].mean.pm2_5, Some(20.0));
}

#[test]
fn test_output_is_chronological_regardless_of_input_order() {
    let hours = vec![
        hour(3, 6, Some(10.0)),
        hour(1, 6, Some(30.0)),
        hour(2, 6, Some(20.0)),
    ];
    let aggregates = forecast::aggregate_hours(&hours, 7);
    let dates: Vec<NaiveDate> = aggregates.iter().map(|a| a.date).collect();
    assert_eq!(dates, vec![date(1), date(2), date(3)]);
}

// ==========================================
// Test case 2: horizon cap
// ==========================================

#[test]
fn test_horizon_caps_the_output() {
    let hours = vec![
        hour(1, 6, Some(10.0)),
        hour(2, 6, Some(20.0)),
        hour(3, 6, Some(30.0)),
        hour(4, 6, Some(40.0)),
    ];
    let aggregates = forecast::aggregate_hours(&hours, 2);
    assert_eq!(aggregates.len(), 2, "capped at the requested days");
    assert_eq!(aggregates[1].date, date(2), "the earliest days survive the cap");
}

// ==========================================
// Test case 3: zeros are filtered like absent values
// ==========================================

#[test]
fn test_zero_values_do_not_drag_the_mean() {
    println!("\n=== Test: zero filtering ===");

    // The provider reuses 0 as its own missing marker
    let hours = vec![
        hour(1, 6, Some(0.0)),
        hour(1, 12, Some(30.0)),
        hour(1, 18, None),
        hour(1, 20, Some(60.0)),
    ];
    let aggregates = forecast::aggregate_hours(&hours, 7);

    assert_eq!(
        aggregates[0].mean.pm2_5,
        Some(45.0),
        "only the two qualifying hours count"
    );
}

#[test]
fn test_day_with_no_qualifying_hours_yields_absent_mean() {
    let hours = vec![hour(1, 6, Some(0.0)), hour(1, 12, None)];
    let aggregates = forecast::aggregate_hours(&hours, 7);

    assert_eq!(aggregates.len(), 1, "the day itself still appears");
    assert!(aggregates[0].mean.is_empty());
    assert_eq!(
        aggregates[0].mean.value_or_zero(Pollutant::Pm25),
        0.0,
        "renders as 0 downstream, not an error"
    );
}

#[test]
fn test_empty_input_yields_no_days() {
    assert!(forecast::aggregate_hours(&[], 7).is_empty());
}

// ==========================================
// Test case 4: per-pollutant independence
// ==========================================

#[test]
fn test_pollutants_average_independently() {
    let mut first = PollutantReading::default();
    first.set(Pollutant::Pm25, Some(30.0));
    first.set(Pollutant::O3, Some(80.0));
    let mut second = PollutantReading::default();
    second.set(Pollutant::Pm25, Some(50.0));
    // O3 missing in the second hour

    let ts1 = date(1).and_hms_opt(6, 0, 0).unwrap();
    let ts2 = date(1).and_hms_opt(12, 0, 0).unwrap();
    let aggregates = forecast::aggregate_hours(&[(ts1, first), (ts2, second)], 7);

    assert_eq!(aggregates[0].mean.pm2_5, Some(40.0));
    assert_eq!(aggregates[0].mean.o3, Some(80.0), "one qualifying hour is enough");
}

// ==========================================
// Test case 5: payload-walking variant
// ==========================================

#[test]
fn test_daily_averages_none_without_forecast_section() {
    let payload: ForecastPayload = serde_json::from_str("{}").unwrap();
    assert!(forecast::daily_averages(&payload, 7).is_none());
}

#[test]
fn test_daily_averages_walks_the_payload() {
    let payload: ForecastPayload = serde_json::from_str(
        r#"{"forecast": {"forecastday": [
            {"date": "2026-08-01", "hour": [
                {"air_quality": {"pm2_5": 20.0, "so2": 0.0}},
                {"air_quality": {"pm2_5": 40.0, "so2": 4.0}}
            ]},
            {"date": "2026-08-02", "hour": []}
        ]}}"#,
    )
    .unwrap();

    let aggregates = forecast::daily_averages(&payload, 7).unwrap();
    assert_eq!(aggregates.len(), 2);
    assert_eq!(aggregates[0].mean.pm2_5, Some(30.0));
    assert_eq!(aggregates[0].mean.so2, Some(4.0));
    assert!(aggregates[1].mean.is_empty(), "an hourless day aggregates to absent");
}
