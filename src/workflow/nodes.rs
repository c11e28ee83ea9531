//! The two workflow nodes: Researcher and Writer.
//!
//! Nodes read the shared state and return a [`StatePatch`]; they never
//! mutate the state directly. Capability failures are not retried here;
//! they propagate to the engine via `?`.

use crate::llm::Summarizer;
use crate::search::SearchProvider;
use crate::types::{Result, SourceRecord};
use crate::workflow::prompts;
use crate::workflow::state::{ResearchState, StatePatch};
use crate::workflow::QualityGate;
use std::sync::Arc;

/// Gathers sources for the topic and condenses them into notes.
pub struct Researcher {
    search: Arc<dyn SearchProvider>,
    summarizer: Arc<dyn Summarizer>,
    max_results: usize,
}

impl Researcher {
    /// Build a researcher over the injected capabilities.
    pub fn new(
        search: Arc<dyn SearchProvider>,
        summarizer: Arc<dyn Summarizer>,
        max_results: usize,
    ) -> Self {
        Self {
            search,
            summarizer,
            max_results,
        }
    }

    /// Run one research pass.
    ///
    /// The returned patch always replaces `sources` and `notes` and
    /// explicitly clears `feedback`, regardless of the input state.
    pub async fn run(&self, state: &ResearchState) -> Result<StatePatch> {
        let query = prompts::search_query(&state.topic, state.feedback.as_deref());
        tracing::info!(query = %query, "researcher: searching for information");

        let hits = self.search.search(&query, self.max_results).await?;

        let sources: Vec<SourceRecord> = hits
            .into_iter()
            .map(|hit| SourceRecord {
                title: hit.title,
                url: hit.url,
                content: hit.content.unwrap_or_default(),
            })
            .collect();

        let notes = self
            .summarizer
            .generate(&prompts::summary_prompt(&sources))
            .await?;
        tracing::debug!(sources = sources.len(), "researcher: notes condensed");

        Ok(StatePatch {
            sources: Some(sources),
            notes: Some(notes),
            feedback: Some(None),
            ..Default::default()
        })
    }
}

/// Vets the gathered sources and either rejects with feedback or
/// composes the final report.
pub struct Writer {
    summarizer: Arc<dyn Summarizer>,
    gate: QualityGate,
}

impl Writer {
    /// Build a writer over the injected summarizer and gate.
    pub fn new(summarizer: Arc<dyn Summarizer>, gate: QualityGate) -> Self {
        Self { summarizer, gate }
    }

    /// Run one writing pass.
    ///
    /// On rejection the patch carries the gate's reason and leaves
    /// `report` untouched. On acceptance it carries the composed report
    /// and does not mention `feedback`.
    pub async fn run(&self, state: &ResearchState) -> Result<StatePatch> {
        tracing::info!("writer: evaluating research quality");

        match self.gate.evaluate(&state.sources) {
            crate::workflow::Verdict::Rejected { reason } => {
                tracing::info!(reason = %reason, "writer: rejected");
                Ok(StatePatch {
                    accepted: Some(false),
                    feedback: Some(Some(reason)),
                    ..Default::default()
                })
            }
            crate::workflow::Verdict::Accepted => {
                tracing::info!("writer: accepted, composing report");
                let report = self
                    .summarizer
                    .generate(&prompts::report_prompt(&state.topic, &state.notes))
                    .await?;

                Ok(StatePatch {
                    accepted: Some(true),
                    report: Some(Some(report)),
                    ..Default::default()
                })
            }
        }
    }
}
