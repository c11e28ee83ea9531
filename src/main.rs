//! `scribe-server` binary: load config, wire capabilities, serve.

use anyhow::Context;
use scribe::llm::OpenAiSummarizer;
use scribe::search::TavilySearch;
use scribe::utils::config::Config;
use scribe::AppState;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scribe=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing credentials are fatal; refuse to start rather than run
    // degraded.
    let config = Config::from_env().context("configuration error")?;

    let summarizer = Arc::new(OpenAiSummarizer::new(
        config.summarizer.api_key.clone(),
        config.summarizer.api_base.clone(),
        config.summarizer.model.clone(),
    ));
    let search = Arc::new(TavilySearch::new(config.search.api_key.clone()));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        config: Arc::new(config),
        search,
        summarizer,
    };

    let app = scribe::api::create_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(%addr, "scribe-server listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
