// ==========================================
// Air Quality Decision Support Platform - Provider Layer
// ==========================================
// Responsibility: payload models and the collaborator seams (weather
// data, narrative recommendations); no HTTP client lives in this crate
// ==========================================

pub mod narrative;
pub mod payload;
pub mod weather;

pub use narrative::{
    NarrativeError, NarrativeProvider, NarrativeRequest, NarrativeResult, OfflineNarrativeProvider,
};
pub use payload::{CurrentBlock, CurrentPayload, ForecastBlock, ForecastDay, ForecastPayload, HourObservation};
pub use weather::{FixtureWeatherSource, ProviderError, ProviderResult, WeatherDataSource};
