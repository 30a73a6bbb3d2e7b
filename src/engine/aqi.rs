// ==========================================
// Air Quality Decision Support Platform - AQI Converter
// ==========================================
// Responsibility: PM2.5 concentration to Air Quality Index conversion
// Shared by every vertical; pure, no I/O, no state
// ==========================================

/// Upper end of the reported AQI scale; inputs above the top breakpoint
/// clamp here.
pub const AQI_MAX: u16 = 300;

/// One row of the EPA-style PM2.5 breakpoint table.
struct Breakpoint {
    lo_c: f64,
    hi_c: f64,
    lo_aqi: u16,
    hi_aqi: u16,
}

// Branch selection is by upper concentration bound, so concentrations
// falling between a row's ceiling and the next row's floor interpolate
// slightly below the next row's floor AQI. That keeps the conversion
// monotonically non-decreasing across every seam.
const PM25_SCALE: [Breakpoint; 5] = [
    Breakpoint { lo_c: 0.0, hi_c: 12.0, lo_aqi: 0, hi_aqi: 50 },
    Breakpoint { lo_c: 12.1, hi_c: 35.4, lo_aqi: 51, hi_aqi: 100 },
    Breakpoint { lo_c: 35.5, hi_c: 55.4, lo_aqi: 101, hi_aqi: 150 },
    Breakpoint { lo_c: 55.5, hi_c: 150.4, lo_aqi: 151, hi_aqi: 200 },
    Breakpoint { lo_c: 150.5, hi_c: 250.4, lo_aqi: 201, hi_aqi: 300 },
];

/// Convert a PM2.5 concentration (ug/m3) to an AQI value in 0..=300.
///
/// # Rules
/// 1. Pick the first breakpoint row whose concentration ceiling covers
///    the input.
/// 2. Interpolate linearly inside the row and truncate to integer.
/// 3. Above the top row the result clamps to [`AQI_MAX`].
///
/// Callers are expected to pass non-negative concentrations; a negative
/// input floors at AQI 0 through the integer cast rather than erroring.
pub fn aqi_from_pm25(pm25: f64) -> u16 {
    for row in &PM25_SCALE {
        if pm25 <= row.hi_c {
            let span = (row.hi_aqi - row.lo_aqi) as f64;
            let value = row.lo_aqi as f64 + span / (row.hi_c - row.lo_c) * (pm25 - row.lo_c);
            return (value as u16).min(AQI_MAX);
        }
    }
    AQI_MAX
}
