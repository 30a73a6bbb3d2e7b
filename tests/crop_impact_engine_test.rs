// ==========================================
// CropImpactEngine tests
// ==========================================
// Target: crop yield-loss scoring from one pollutant reading
// Coverage: worked wheat example, fallback profile, cap, clip idempotence
// ==========================================

use air_quality_dss::domain::reading::PollutantReading;
use air_quality_dss::domain::types::{CropKind, ImpactLevel, Pollutant};
use air_quality_dss::engine::agriculture::{CropImpactEngine, MAX_YIELD_LOSS_PCT};

// ==========================================
// Test helpers
// ==========================================

/// Reading over the four scored pollutants.
fn scored_reading(pm2_5: f64, o3: f64, no2: f64, so2: f64) -> PollutantReading {
    PollutantReading {
        pm2_5: Some(pm2_5),
        o3: Some(o3),
        no2: Some(no2),
        so2: Some(so2),
        ..Default::default()
    }
}

// ==========================================
// Test case 1: worked wheat example
// ==========================================

#[test]
fn test_wheat_worked_example() {
    println!("\n=== Test: wheat worked example ===");

    let engine = CropImpactEngine::new();
    let reading = scored_reading(10.0, 50.0, 20.0, 5.0);
    let assessment = engine.assess(&reading, "wheat");

    // O3: 0.12 * (50/100) * 100 = 6.0
    // SO2: 0.08 * (5/20) * 100 = 2.0
    // NO2: 0.05 * (20/40) * 100 = 2.5
    // PM2.5: 0.10 * (10/15) * 100 = 6.666...
    let o3 = &assessment.impacts[0];
    assert_eq!(o3.pollutant, Pollutant::O3);
    assert!((o3.impact_percent - 6.0).abs() < 1e-9);

    let so2 = &assessment.impacts[1];
    assert!((so2.impact_percent - 2.0).abs() < 1e-9);

    let no2 = &assessment.impacts[2];
    assert!((no2.impact_percent - 2.5).abs() < 1e-9);

    let pm25 = &assessment.impacts[3];
    assert!((pm25.impact_percent - 10.0 / 15.0 * 0.10 * 100.0).abs() < 1e-9);

    assert!(
        (assessment.total_yield_loss_pct - 17.166666).abs() < 1e-4,
        "total should be ~17.17, got {}",
        assessment.total_yield_loss_pct
    );
    assert_eq!(assessment.level, ImpactLevel::Critical, ">10% is critical");

    println!("total yield loss: {:.2}%", assessment.total_yield_loss_pct);
}

// ==========================================
// Test case 2: unknown crop falls back to wheat
// ==========================================

#[test]
fn test_unknown_crop_matches_wheat() {
    println!("\n=== Test: unknown crop fallback ===");

    let engine = CropImpactEngine::new();
    let reading = scored_reading(22.0, 85.0, 33.0, 11.0);

    let durian = engine.assess(&reading, "durian");
    let wheat = engine.assess(&reading, "wheat");

    assert_eq!(durian.crop, CropKind::Wheat);
    assert_eq!(durian.requested_crop, "durian", "the requested key is kept");
    assert_eq!(durian.total_yield_loss_pct, wheat.total_yield_loss_pct);
    assert_eq!(durian.impacts, wheat.impacts);
}

// ==========================================
// Test case 3: total is capped at the domain ceiling
// ==========================================

#[test]
fn test_extreme_reading_hits_the_cap() {
    println!("\n=== Test: yield-loss cap ===");

    let engine = CropImpactEngine::new();
    // Every ratio clips at 3.0; soybean sums 3 * (18+12+8+14) = 156
    let reading = scored_reading(10_000.0, 10_000.0, 10_000.0, 10_000.0);
    let assessment = engine.assess(&reading, "soybean");

    assert_eq!(assessment.total_yield_loss_pct, MAX_YIELD_LOSS_PCT);
    assert_eq!(assessment.level, ImpactLevel::Critical);
}

#[test]
fn test_total_stays_in_bounds() {
    let engine = CropImpactEngine::new();
    for crop in ["wheat", "rice", "corn", "soybean", "cotton"] {
        for scale in [0.0, 1.0, 10.0, 100.0, 10_000.0] {
            let reading = scored_reading(scale, scale, scale, scale);
            let assessment = engine.assess(&reading, crop);
            assert!(
                (0.0..=MAX_YIELD_LOSS_PCT).contains(&assessment.total_yield_loss_pct),
                "{} out of bounds for {} at {}",
                assessment.total_yield_loss_pct,
                crop,
                scale
            );
        }
    }
}

// ==========================================
// Test case 4: clip idempotence
// ==========================================

#[test]
fn test_contribution_frozen_beyond_clip_point() {
    println!("\n=== Test: clip idempotence ===");

    let engine = CropImpactEngine::new();
    // O3 reference 100, ceiling 3.0: 300 is exactly the clip point
    let at_clip = engine.assess(&scored_reading(0.0, 300.0, 0.0, 0.0), "rice");
    let beyond = engine.assess(&scored_reading(0.0, 5_000.0, 0.0, 0.0), "rice");

    assert_eq!(
        at_clip.impacts[0].impact_percent, beyond.impacts[0].impact_percent,
        "raising O3 past the clip point must not change its contribution"
    );
    assert_eq!(at_clip.total_yield_loss_pct, beyond.total_yield_loss_pct);
}

// ==========================================
// Test case 5: absent fields score as zero
// ==========================================

#[test]
fn test_absent_fields_contribute_nothing() {
    let engine = CropImpactEngine::new();
    let only_o3 = PollutantReading {
        o3: Some(50.0),
        ..Default::default()
    };
    let assessment = engine.assess(&only_o3, "wheat");

    assert!((assessment.total_yield_loss_pct - 6.0).abs() < 1e-9);
    for impact in &assessment.impacts[1..] {
        assert_eq!(impact.impact_percent, 0.0);
        assert_eq!(impact.concentration, 0.0);
    }
}

// ==========================================
// Test case 6: rice is the least sensitive shipped profile
// ==========================================

#[test]
fn test_profile_ordering_on_shared_reading() {
    let engine = CropImpactEngine::new();
    let reading = scored_reading(30.0, 120.0, 50.0, 15.0);

    let rice = engine.assess(&reading, "rice").total_yield_loss_pct;
    let wheat = engine.assess(&reading, "wheat").total_yield_loss_pct;
    let soybean = engine.assess(&reading, "soybean").total_yield_loss_pct;

    assert!(rice < wheat, "rice tolerates more than wheat");
    assert!(wheat < soybean, "soybean is the most sensitive");
}
