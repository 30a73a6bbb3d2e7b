// ==========================================
// Air Quality Decision Support Platform - Configuration Layer
// ==========================================
// Responsibility: application configuration (API keys, analysis
// defaults) from file and environment
// ==========================================

pub mod app_config;

// Re-export the configuration record
pub use app_config::{AppConfig, ConfigError, ConfigResult};
