// ==========================================
// Air Quality Decision Support Platform - PM2.5 Estimator
// ==========================================
// Responsibility: heuristic PM2.5 fallback from weather variables, used
// only when a forecast hour omits the observed value
// This is an approximate proxy, not a dispersion model; it is kept
// isolated here so a calibrated model can replace it without touching
// the scoring paths
// ==========================================

/// Floor of the estimate (ug/m3).
pub const ESTIMATE_FLOOR: f64 = 5.0;
/// Ceiling of the estimate (ug/m3).
pub const ESTIMATE_CEILING: f64 = 200.0;

const BASE_LEVEL: f64 = 35.0;

/// Estimate a PM2.5 concentration from weather variables.
///
/// # Rules
/// 1. Start from a 35 ug/m3 base level.
/// 2. Heat above 25 C raises particulate accumulation: +5 per 10 C.
/// 3. Humidity pulls the estimate around the 50% midpoint: +-10 per 50pt.
/// 4. Wind below 10 kph reduces dispersion: up to +15 at calm.
/// 5. Clamp to [5, 200].
// TODO: replace with a calibrated regression once monitoring-station
// reference data for the covered cities is available
pub fn estimate_pm25(temp_c: f64, humidity_pct: f64, wind_kph: f64) -> f64 {
    let heat_term = ((temp_c - 25.0) / 10.0).max(0.0) * 5.0;
    let humidity_term = (humidity_pct - 50.0) / 50.0 * 10.0;
    let calm_term = ((10.0 - wind_kph) / 10.0).max(0.0) * 15.0;

    (BASE_LEVEL + heat_term + humidity_term + calm_term).clamp(ESTIMATE_FLOOR, ESTIMATE_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_conditions() {
        // 25 C, 50% humidity, 10 kph wind: every term is zero
        assert_eq!(estimate_pm25(25.0, 50.0, 10.0), 35.0);
    }

    #[test]
    fn test_heat_term_only_above_threshold() {
        assert_eq!(estimate_pm25(35.0, 50.0, 10.0), 40.0);
        // Cold weather does not subtract
        assert_eq!(estimate_pm25(5.0, 50.0, 10.0), 35.0);
    }

    #[test]
    fn test_humidity_term_can_subtract() {
        assert_eq!(estimate_pm25(25.0, 100.0, 10.0), 45.0);
        assert_eq!(estimate_pm25(25.0, 0.0, 10.0), 25.0);
    }

    #[test]
    fn test_calm_term_only_below_threshold() {
        assert_eq!(estimate_pm25(25.0, 50.0, 0.0), 50.0);
        assert_eq!(estimate_pm25(25.0, 50.0, 40.0), 35.0);
    }

    #[test]
    fn test_clamp_bounds() {
        // Dry gale: 35 - 10 + 0 = 25, still above the floor; push harder
        // with an impossible humidity to prove the floor binds
        assert_eq!(estimate_pm25(25.0, -200.0, 40.0), ESTIMATE_FLOOR);
        // Hot, humid, calm extremes hit the ceiling
        assert_eq!(estimate_pm25(400.0, 100.0, 0.0), ESTIMATE_CEILING);
    }
}
