//! Router construction.

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Build the application router.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(crate::api::handlers::health))
        .route("/research", post(crate::api::handlers::research))
}
