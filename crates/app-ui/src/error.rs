//! Error types for theme ingestion
//!
//! Token resolution itself never fails. These errors only surface at the
//! boundary where a persisted payload or a user-supplied mode string is
//! turned into typed input.

use thiserror::Error;

/// Theme ingestion error types
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Payload was not valid JSON or not shaped like a theme document
    #[error("Theme parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Mode string was neither `light` nor `dark`
    #[error("Unknown theme mode: {0}")]
    InvalidMode(String),
}

/// Result type for theme ingestion
pub type Result<T> = std::result::Result<T, ThemeError>;
