// ==========================================
// Air Quality Decision Support Platform - Locations
// ==========================================
// Responsibility: resolved location labels and the monitored-city catalog
// Coordinates are opaque display values, never computed with
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Location
// ==========================================

/// Location as resolved by the weather provider for a query string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lon: f64,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.region.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}, {}", self.name, self.region)
        }
    }
}

// ==========================================
// Monitored City Catalog
// ==========================================

/// One entry of the built-in monitoring catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CityCoord {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

/// Indian metros covered by the comparison, travel, and demo surfaces.
pub const MONITORED_CITIES: [CityCoord; 10] = [
    CityCoord { name: "Delhi", lat: 28.6139, lon: 77.2090 },
    CityCoord { name: "Mumbai", lat: 19.0760, lon: 72.8777 },
    CityCoord { name: "Bangalore", lat: 12.9716, lon: 77.5946 },
    CityCoord { name: "Chennai", lat: 13.0827, lon: 80.2707 },
    CityCoord { name: "Kolkata", lat: 22.5726, lon: 88.3639 },
    CityCoord { name: "Hyderabad", lat: 17.3850, lon: 78.4867 },
    CityCoord { name: "Pune", lat: 18.5204, lon: 73.8567 },
    CityCoord { name: "Ahmedabad", lat: 23.0225, lon: 72.5714 },
    CityCoord { name: "Jaipur", lat: 26.9124, lon: 75.7873 },
    CityCoord { name: "Lucknow", lat: 26.8467, lon: 80.9462 },
];

/// Catalog lookup by city name (case-insensitive).
pub fn monitored_city(name: &str) -> Option<&'static CityCoord> {
    MONITORED_CITIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
}
