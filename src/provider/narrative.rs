// ==========================================
// Air Quality Decision Support Platform - Narrative Provider
// ==========================================
// Responsibility: the boundary to the language-model recommendation
// service; the core hands over pre-computed structured data and treats
// the response as an opaque string
// ==========================================

use serde_json::Value;
use thiserror::Error;

// ==========================================
// Narrative errors
// ==========================================

#[derive(Error, Debug)]
pub enum NarrativeError {
    /// The recommendation service failed or is not configured. Consumers
    /// degrade to a visible placeholder and keep their numeric results.
    #[error("narrative provider unavailable: {message}")]
    Unavailable { message: String },
}

/// Result alias for the narrative layer
pub type NarrativeResult<T> = Result<T, NarrativeError>;

// ==========================================
// NarrativeRequest
// ==========================================

/// A free-form analysis request: a context string describing what to
/// recommend on, plus the assessment data serialized as plain key-value
/// structures.
#[derive(Debug, Clone)]
pub struct NarrativeRequest {
    pub context: String,
    pub data: Value,
}

// ==========================================
// NarrativeProvider Trait
// ==========================================
pub trait NarrativeProvider: Send + Sync {
    fn narrate(&self, request: &NarrativeRequest) -> NarrativeResult<String>;
}

// ==========================================
// OfflineNarrativeProvider
// ==========================================

/// Default provider for deployments without a narrative API key. Always
/// fails, which routes every consumer through the placeholder path.
pub struct OfflineNarrativeProvider;

impl NarrativeProvider for OfflineNarrativeProvider {
    fn narrate(&self, _request: &NarrativeRequest) -> NarrativeResult<String> {
        Err(NarrativeError::Unavailable {
            message: "no narrative provider configured".to_string(),
        })
    }
}
