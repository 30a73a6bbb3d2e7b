// ==========================================
// AQI Converter tests
// ==========================================
// Target: PM2.5 -> AQI piecewise-linear conversion
// Coverage: breakpoint boundaries, monotonicity, top clamp
// ==========================================

use air_quality_dss::engine::aqi::{aqi_from_pm25, AQI_MAX};

// ==========================================
// Test case 1: pinned breakpoint boundaries
// ==========================================

#[test]
fn test_breakpoint_boundary_values() {
    println!("\n=== Test: pinned breakpoint boundaries ===");

    assert_eq!(aqi_from_pm25(0.0), 0, "clean air maps to AQI 0");
    assert_eq!(aqi_from_pm25(12.0), 50, "top of the good band");
    assert_eq!(aqi_from_pm25(35.4), 100, "top of the moderate band");
    assert_eq!(aqi_from_pm25(55.4), 150, "top of the sensitive band");
    assert_eq!(aqi_from_pm25(150.4), 200, "top of the unhealthy band");
    assert_eq!(aqi_from_pm25(250.4), 300, "top of the scale");
    assert_eq!(aqi_from_pm25(300.0), 300, "above the scale clamps to 300");

    println!("all pinned boundaries hold");
}

// ==========================================
// Test case 2: interpolation inside a band
// ==========================================

#[test]
fn test_interpolation_truncates_to_integer() {
    println!("\n=== Test: in-band interpolation ===");

    // Midpoint of the good band: 50/12 * 6 = 25.0
    assert_eq!(aqi_from_pm25(6.0), 25);
    // 51 + 49/23.3 * (20 - 12.1) = 67.61..., truncated
    assert_eq!(aqi_from_pm25(20.0), 67);
    // 151 + 49/94.9 * (100 - 55.5) = 173.97..., truncated
    assert_eq!(aqi_from_pm25(100.0), 173);
}

// ==========================================
// Test case 3: monotonically non-decreasing
// ==========================================

#[test]
fn test_monotonic_over_dense_grid() {
    println!("\n=== Test: monotonicity over a dense grid ===");

    let mut previous = aqi_from_pm25(0.0);
    let mut step = 0;
    while step <= 30_000 {
        let pm25 = step as f64 * 0.01;
        let aqi = aqi_from_pm25(pm25);
        assert!(
            aqi >= previous,
            "AQI decreased at pm2.5={}: {} -> {}",
            pm25,
            previous,
            aqi
        );
        previous = aqi;
        step += 1;
    }

    println!("no decrease over 0..=300 ug/m3 at 0.01 resolution");
}

// ==========================================
// Test case 4: output range
// ==========================================

#[test]
fn test_output_stays_in_scale() {
    for pm25 in [0.0, 11.9, 12.05, 35.45, 55.45, 150.45, 250.4, 1000.0, 1e9] {
        let aqi = aqi_from_pm25(pm25);
        assert!(aqi <= AQI_MAX, "AQI {} out of scale for pm2.5={}", aqi, pm25);
    }
}
