// ==========================================
// Air Quality Decision Support Platform - Travel Scoring
// ==========================================
// Responsibility: pollution scoring of city-to-city routes and the
// clean-air destination predicate for eco-tourism
// ==========================================

use crate::domain::assessment::RouteAssessment;
use crate::domain::location::Location;
use crate::domain::types::RouteStatus;

/// AQI below which a city counts as a clean-air destination.
pub const CLEAN_AIR_AQI_LIMIT: u16 = 50;

/// Route score is the mean of the two endpoint AQIs.
pub fn route_score(start_aqi: u16, end_aqi: u16) -> f64 {
    (start_aqi as f64 + end_aqi as f64) / 2.0
}

/// Assemble the route assessment record from resolved endpoint data.
pub fn assess_route(
    start_city: &str,
    end_city: &str,
    start_aqi: u16,
    end_aqi: u16,
    start_location: Option<Location>,
    end_location: Option<Location>,
) -> RouteAssessment {
    let score = route_score(start_aqi, end_aqi);
    RouteAssessment {
        start_city: start_city.to_string(),
        end_city: end_city.to_string(),
        start_aqi,
        end_aqi,
        route_score: score,
        status: RouteStatus::from_route_score(score),
        start_location,
        end_location,
    }
}

pub fn is_clean_air_destination(aqi: u16) -> bool {
    aqi < CLEAN_AIR_AQI_LIMIT
}
