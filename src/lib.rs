//! # Scribe - Quality-Gated Research Report Server
//!
//! A two-agent research service built in Rust. A Researcher node gathers
//! web sources and condenses them into notes; a Writer node applies a
//! deterministic quality gate to the gathered sources and either feeds
//! the rejection reason back into the next research pass or composes the
//! final Markdown report.
//!
//! ## Overview
//!
//! Scribe can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `scribe-server` binary
//! 2. **As a library** - Drive the workflow from your own Rust project
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use scribe::llm::OpenAiSummarizer;
//! use scribe::search::TavilySearch;
//! use scribe::workflow::{QualityGate, ResearchWorkflow, WorkflowOptions};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let search = Arc::new(TavilySearch::new("tvly-...".to_string()));
//!     let summarizer = Arc::new(OpenAiSummarizer::new(
//!         "sk-...".to_string(),
//!         "https://api.openai.com/v1".to_string(),
//!         "gpt-4o-mini".to_string(),
//!     ));
//!
//!     let workflow = ResearchWorkflow::new(
//!         search,
//!         summarizer,
//!         QualityGate::default(),
//!         WorkflowOptions::default(),
//!     );
//!
//!     let outcome = workflow.run("rust async runtimes").await?;
//!     println!("{}", outcome.report);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`workflow`] - The orchestration core: state machine, nodes, quality gate
//! - [`llm`] - Summarizer capability (trait + OpenAI-compatible client)
//! - [`search`] - SearchProvider capability (trait + Tavily client)
//! - [`api`] - REST API handlers and routes
//! - [`types`] - Common types and error handling
//! - [`utils`] - Configuration utilities
//!
//! ## Architecture
//!
//! The workflow core performs no network I/O of its own. The two external
//! capabilities - web search and text generation - are injected as trait
//! objects at construction time, so the whole loop can be exercised with
//! deterministic fakes in tests.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// LLM client implementations (the Summarizer capability).
pub mod llm;
/// Web search clients (the SearchProvider capability).
pub mod search;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;
/// The research workflow: state machine, nodes, and quality gate.
pub mod workflow;

// Re-export commonly used types
pub use llm::{OpenAiSummarizer, Summarizer};
pub use search::{SearchHit, SearchProvider, TavilySearch};
pub use types::{AppError, Result, SourceRecord};
pub use utils::config::Config;
pub use workflow::{
    QualityGate, ResearchOutcome, ResearchState, ResearchWorkflow, StatePatch, Verdict,
    WorkflowOptions,
};

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Environment-driven configuration
    pub config: Arc<Config>,
    /// Web search capability
    pub search: Arc<dyn SearchProvider>,
    /// Text generation capability
    pub summarizer: Arc<dyn Summarizer>,
}
