// ==========================================
// Air Quality Decision Support Platform - Pollutant Readings
// ==========================================
// Responsibility: immutable concentration snapshots and their daily means
// Per-pollutant Option keeps "provider omitted the field" distinct from a
// measured zero; scoring paths read through value_or_zero
// ==========================================

use crate::domain::types::Pollutant;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// PollutantReading
// ==========================================

/// One concentration snapshot (one provider hour or one "current" block).
/// All values in ug/m3. `None` means the provider did not report the field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PollutantReading {
    #[serde(default)]
    pub pm2_5: Option<f64>,
    #[serde(default)]
    pub pm10: Option<f64>,
    #[serde(default)]
    pub o3: Option<f64>,
    #[serde(default)]
    pub no2: Option<f64>,
    #[serde(default)]
    pub so2: Option<f64>,
    #[serde(default)]
    pub co: Option<f64>,
}

impl PollutantReading {
    /// Raw value for one pollutant, None when the field was absent.
    pub fn value(&self, pollutant: Pollutant) -> Option<f64> {
        match pollutant {
            Pollutant::Pm25 => self.pm2_5,
            Pollutant::Pm10 => self.pm10,
            Pollutant::O3 => self.o3,
            Pollutant::No2 => self.no2,
            Pollutant::So2 => self.so2,
            Pollutant::Co => self.co,
        }
    }

    /// Scoring view of a field: absent concentrations score as 0.
    pub fn value_or_zero(&self, pollutant: Pollutant) -> f64 {
        self.value(pollutant).unwrap_or(0.0)
    }

    pub fn set(&mut self, pollutant: Pollutant, value: Option<f64>) {
        match pollutant {
            Pollutant::Pm25 => self.pm2_5 = value,
            Pollutant::Pm10 => self.pm10 = value,
            Pollutant::O3 => self.o3 = value,
            Pollutant::No2 => self.no2 = value,
            Pollutant::So2 => self.so2 = value,
            Pollutant::Co => self.co = value,
        }
    }

    /// True when no pollutant was reported at all.
    pub fn is_empty(&self) -> bool {
        Pollutant::ALL.iter().all(|p| self.value(*p).is_none())
    }
}

// ==========================================
// DailyAggregate
// ==========================================

/// Mean pollutant concentrations over one calendar day's qualifying
/// hourly readings. A pollutant with no qualifying hour stays absent in
/// the mean and renders as 0 downstream, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub mean: PollutantReading,
}

impl DailyAggregate {
    pub fn new(date: NaiveDate, mean: PollutantReading) -> Self {
        Self { date, mean }
    }
}
