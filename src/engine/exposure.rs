// ==========================================
// Air Quality Decision Support Platform - Exposure Normalization
// ==========================================
// Responsibility: shared normalization step of the scoring skeleton
// Concentration / reference level, clipped so one extreme pollutant
// cannot dominate a summed score unboundedly
// ==========================================

use crate::domain::types::Pollutant;

/// Ceiling for the normalized exposure ratio.
pub const EXPOSURE_RATIO_CEILING: f64 = 3.0;

/// Reference concentration per scored pollutant (ug/m3). Pollutants
/// outside the scored set (PM10, CO) have no reference level.
pub fn reference_level(pollutant: Pollutant) -> Option<f64> {
    match pollutant {
        Pollutant::Pm25 => Some(15.0),
        Pollutant::O3 => Some(100.0),
        Pollutant::No2 => Some(40.0),
        Pollutant::So2 => Some(20.0),
        Pollutant::Pm10 | Pollutant::Co => None,
    }
}

/// Normalized, clipped exposure ratio for one pollutant, or None when the
/// pollutant has no reference level.
pub fn normalized_exposure(pollutant: Pollutant, concentration: f64) -> Option<f64> {
    reference_level(pollutant).map(|reference| (concentration / reference).min(EXPOSURE_RATIO_CEILING))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_denominators() {
        assert_eq!(normalized_exposure(Pollutant::Pm25, 15.0), Some(1.0));
        assert_eq!(normalized_exposure(Pollutant::O3, 50.0), Some(0.5));
        assert_eq!(normalized_exposure(Pollutant::No2, 20.0), Some(0.5));
        assert_eq!(normalized_exposure(Pollutant::So2, 5.0), Some(0.25));
    }

    #[test]
    fn test_ratio_clips_at_ceiling() {
        // 15 * 3 = 45 is exactly the clip point for PM2.5
        assert_eq!(normalized_exposure(Pollutant::Pm25, 45.0), Some(3.0));
        assert_eq!(normalized_exposure(Pollutant::Pm25, 450.0), Some(3.0));
        assert_eq!(normalized_exposure(Pollutant::O3, 10_000.0), Some(3.0));
    }

    #[test]
    fn test_unscored_pollutants_have_no_reference() {
        assert_eq!(normalized_exposure(Pollutant::Pm10, 80.0), None);
        assert_eq!(normalized_exposure(Pollutant::Co, 400.0), None);
    }
}
