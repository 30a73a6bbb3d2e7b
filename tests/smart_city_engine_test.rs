// ==========================================
// AirQualityTrendEngine tests
// ==========================================
// Target: hourly projection and city snapshots
// Coverage: estimator fallback flag, observed-only mode, timestamp skip
// ==========================================

use air_quality_dss::domain::reading::PollutantReading;
use air_quality_dss::domain::types::{AqiCategory, MarkerColor};
use air_quality_dss::engine::estimator;
use air_quality_dss::engine::AirQualityTrendEngine;
use air_quality_dss::provider::payload::ForecastPayload;

// ==========================================
// Test helpers
// ==========================================

fn projection_payload() -> ForecastPayload {
    serde_json::from_str(
        r#"{"forecast": {"forecastday": [
            {"date": "2026-08-01", "hour": [
                {"time": "2026-08-01 06:00", "temp_c": 30.0, "humidity": 60.0,
                 "wind_kph": 5.0, "pressure_mb": 1002.0,
                 "air_quality": {"pm2_5": 48.0}},
                {"time": "2026-08-01 12:00", "temp_c": 36.0, "humidity": 45.0,
                 "wind_kph": 12.0, "pressure_mb": 1000.0},
                {"temp_c": 33.0, "humidity": 50.0, "wind_kph": 8.0}
            ]}
        ]}}"#,
    )
    .unwrap()
}

// ==========================================
// Test case 1: observed vs estimated hours
// ==========================================

#[test]
fn test_projection_estimates_missing_pm25() {
    println!("\n=== Test: projection with estimation ===");

    let engine = AirQualityTrendEngine::new();
    let rows = engine.project(&projection_payload(), 7).unwrap();

    // The hour without a timestamp is unusable and skipped
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].pm2_5, 48.0);
    assert!(!rows[0].estimated, "observed values keep their flag clear");

    assert!(rows[1].estimated, "the 12:00 hour has no observation");
    assert_eq!(
        rows[1].pm2_5,
        estimator::estimate_pm25(36.0, 45.0, 12.0),
        "estimate comes from the hour's weather variables"
    );
    assert!(rows[1].aqi > 0);
}

#[test]
fn test_observed_only_mode_omits_unobserved_hours() {
    println!("\n=== Test: observed-only mode ===");

    let engine = AirQualityTrendEngine::without_estimation();
    let rows = engine.project(&projection_payload(), 7).unwrap();

    assert_eq!(rows.len(), 1, "only the observed hour survives");
    assert_eq!(rows[0].pm2_5, 48.0);
}

#[test]
fn test_present_zero_is_an_observation() {
    let payload: ForecastPayload = serde_json::from_str(
        r#"{"forecast": {"forecastday": [
            {"date": "2026-08-01", "hour": [
                {"time": "2026-08-01 06:00", "temp_c": 30.0, "humidity": 60.0,
                 "wind_kph": 5.0, "air_quality": {"pm2_5": 0.0}}
            ]}
        ]}}"#,
    )
    .unwrap();

    let rows = AirQualityTrendEngine::new().project(&payload, 7).unwrap();
    assert_eq!(rows[0].pm2_5, 0.0);
    assert!(!rows[0].estimated, "a measured zero is never re-estimated");
}

// ==========================================
// Test case 2: section absence and day cap
// ==========================================

#[test]
fn test_projection_none_without_forecast_section() {
    let payload: ForecastPayload = serde_json::from_str("{}").unwrap();
    assert!(AirQualityTrendEngine::new().project(&payload, 7).is_none());
}

#[test]
fn test_projection_respects_day_cap() {
    let payload: ForecastPayload = serde_json::from_str(
        r#"{"forecast": {"forecastday": [
            {"date": "2026-08-01", "hour": [
                {"time": "2026-08-01 06:00", "air_quality": {"pm2_5": 10.0}}]},
            {"date": "2026-08-02", "hour": [
                {"time": "2026-08-02 06:00", "air_quality": {"pm2_5": 20.0}}]}
        ]}}"#,
    )
    .unwrap();

    let rows = AirQualityTrendEngine::new().project(&payload, 1).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].pm2_5, 10.0);
}

// ==========================================
// Test case 3: city snapshot assembly
// ==========================================

#[test]
fn test_city_snapshot_labels() {
    println!("\n=== Test: city snapshot ===");

    let reading = PollutantReading {
        pm2_5: Some(48.0),
        o3: Some(70.0),
        ..Default::default()
    };
    let snapshot = AirQualityTrendEngine::city_snapshot("Delhi", &reading, None);

    assert_eq!(snapshot.city, "Delhi");
    // 101 + 49/19.9 * (48 - 35.5) = 131.7... -> 131
    assert_eq!(snapshot.aqi, 131);
    assert_eq!(snapshot.category, AqiCategory::Poor);
    assert_eq!(snapshot.marker, MarkerColor::Orange);
    assert_eq!(snapshot.reading, reading);
}
