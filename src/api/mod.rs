// ==========================================
// Air Quality Decision Support Platform - API Layer
// ==========================================
// Responsibility: orchestration facades over the provider seams and the
// scoring engines, consumed by rendering and the demo binary
// ==========================================

pub mod assessment_api;
pub mod error;
pub mod narrative_api;

// Re-export the facades and the error taxonomy
pub use assessment_api::{AssessmentApi, ReportOptions};
pub use error::{ApiError, ApiResult};
pub use narrative_api::NarrativeApi;
