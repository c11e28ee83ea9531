//! Common request/response types and the application error enum.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= API Request/Response Types =============

/// Request body for `POST /research`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResearchRequest {
    /// The topic to research. Must be non-blank.
    pub topic: String,
}

/// Response body for `POST /research`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResearchResponse {
    /// The final Markdown report.
    pub report: String,
    /// The sources the accepted report was built from.
    pub sources: Vec<SourceRecord>,
    /// Number of research passes the workflow needed.
    pub passes: u8,
    /// Wall-clock duration of the run in milliseconds.
    pub duration_ms: u64,
}

// ============= Workflow Types =============

/// A single gathered reference: title, URL, and content snippet.
///
/// The URL is kept as a plain string; the quality gate extracts the host
/// component at evaluation time and treats malformed URLs as having an
/// empty host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SourceRecord {
    /// Title of the referenced page.
    pub title: String,
    /// URL of the referenced page.
    pub url: String,
    /// Content snippet; empty when the search backend returned none.
    pub content: String,
}

// ============= Error Types =============

/// Application-wide error enum.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or invalid configuration; fatal at startup.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Caller-supplied input was rejected at the boundary.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The search capability failed.
    #[error("Search error: {0}")]
    Search(String),

    /// The text-generation capability failed.
    #[error("LLM error: {0}")]
    LLM(String),

    /// The workflow terminated without an accepted report.
    #[error("Workflow error: {0}")]
    Workflow(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Configuration(msg) => {
                (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::InvalidInput(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
            AppError::Search(msg) => (axum::http::StatusCode::BAD_GATEWAY, msg),
            AppError::LLM(msg) => (axum::http::StatusCode::BAD_GATEWAY, msg),
            AppError::Workflow(msg) => (axum::http::StatusCode::UNPROCESSABLE_ENTITY, msg),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AppError>;
