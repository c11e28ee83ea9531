//! Request handlers.

use crate::types::{AppError, ResearchRequest, ResearchResponse, Result};
use crate::workflow::{QualityGate, ResearchWorkflow, WorkflowOptions};
use crate::AppState;
use axum::{extract::State, Json};
use std::time::Instant;

/// Liveness check.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Server is running")
    ),
    tag = "health"
)]
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "running" }))
}

/// Run the research workflow for a topic and return the vetted report.
#[utoipa::path(
    post,
    path = "/research",
    request_body = ResearchRequest,
    responses(
        (status = 200, description = "Report composed", body = ResearchResponse),
        (status = 400, description = "Blank topic"),
        (status = 422, description = "Quality gate never satisfied"),
        (status = 502, description = "Search or generation capability failed")
    ),
    tag = "research"
)]
pub async fn research(
    State(state): State<AppState>,
    Json(payload): Json<ResearchRequest>,
) -> Result<Json<ResearchResponse>> {
    // Topic validation happens here, at the boundary; the workflow core
    // does not check it.
    if payload.topic.trim().is_empty() {
        return Err(AppError::InvalidInput("Topic cannot be empty".to_string()));
    }

    let start = Instant::now();

    let workflow = ResearchWorkflow::new(
        state.search.clone(),
        state.summarizer.clone(),
        QualityGate::new(state.config.workflow.blocked_domains.iter().cloned()),
        WorkflowOptions {
            max_passes: state.config.workflow.max_passes,
            max_results: state.config.search.max_results,
        },
    );

    let outcome = workflow.run(&payload.topic).await?;
    let duration = start.elapsed();

    Ok(Json(ResearchResponse {
        report: outcome.report,
        sources: outcome.sources,
        passes: outcome.passes,
        duration_ms: duration.as_millis() as u64,
    }))
}
