// ==========================================
// Air Quality Decision Support Platform - API Layer Errors
// ==========================================
// Responsibility: the error taxonomy of the orchestration layer and the
// payload section validators
// Upstream provider failures and missing payload sections behave the
// same for scoring: no result, never a fabricated zero score
// ==========================================

use crate::domain::location::Location;
use crate::domain::reading::PollutantReading;
use crate::provider::narrative::NarrativeError;
use crate::provider::payload::CurrentPayload;
use crate::provider::weather::ProviderError;
use thiserror::Error;

/// API layer error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // Data availability errors
    // ==========================================
    /// A required payload section (current / location / forecast /
    /// air_quality) was absent.
    #[error("required data section missing: {section}")]
    MissingData { section: &'static str },

    /// The upstream fetch failed; nothing is computed from it.
    #[error("weather provider error: {0}")]
    Provider(#[from] ProviderError),

    // ==========================================
    // Input errors
    // ==========================================
    #[error("invalid input: {0}")]
    InvalidInput(String),

    // ==========================================
    // Narrative degradation
    // ==========================================
    /// Surfaced only when a caller asks for a narrative without the
    /// placeholder path; assessments themselves never carry this.
    #[error("narrative provider error: {0}")]
    Narrative(#[from] NarrativeError),

    // ==========================================
    // Generic errors
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// Payload section validators
// ==========================================

/// Extract the current pollutant reading, naming the first missing
/// section otherwise. Fields absent inside a present reading stay
/// absent; only whole sections are errors.
pub fn require_reading(payload: &CurrentPayload) -> ApiResult<PollutantReading> {
    let current = payload
        .current
        .as_ref()
        .ok_or(ApiError::MissingData { section: "current" })?;
    let reading = current
        .air_quality
        .as_ref()
        .ok_or(ApiError::MissingData { section: "air_quality" })?;
    Ok(*reading)
}

/// Extract the resolved location.
pub fn require_location(payload: &CurrentPayload) -> ApiResult<Location> {
    payload
        .location
        .clone()
        .ok_or(ApiError::MissingData { section: "location" })
}
