//! The orchestration state machine.
//!
//! An explicit three-phase machine drives the Researcher/Writer loop:
//! research, write, and either terminate on acceptance or loop back
//! with the rejection reason as feedback. A configurable pass cap turns
//! a never-satisfied gate into an explicit error instead of an
//! unbounded loop.

use crate::llm::Summarizer;
use crate::search::SearchProvider;
use crate::types::{AppError, Result, SourceRecord};
use crate::workflow::nodes::{Researcher, Writer};
use crate::workflow::state::ResearchState;
use crate::workflow::QualityGate;
use std::sync::Arc;
use uuid::Uuid;

/// Named phases of the workflow state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The researcher gathers sources and notes.
    Researching,
    /// The writer vets the sources and possibly composes the report.
    Writing,
    /// Terminal: an accepted report exists.
    Done,
}

impl Phase {
    /// Pure transition function over the merged state.
    pub fn next(self, state: &ResearchState) -> Phase {
        match self {
            Phase::Researching => Phase::Writing,
            Phase::Writing => {
                if state.accepted {
                    Phase::Done
                } else {
                    Phase::Researching
                }
            }
            Phase::Done => Phase::Done,
        }
    }
}

/// Tunable knobs for a workflow run.
#[derive(Debug, Clone)]
pub struct WorkflowOptions {
    /// Maximum research passes before the run fails with
    /// [`AppError::Workflow`].
    pub max_passes: u8,
    /// Result cap handed to the search capability.
    pub max_results: usize,
}

impl Default for WorkflowOptions {
    fn default() -> Self {
        Self {
            max_passes: 3,
            max_results: 5,
        }
    }
}

/// Terminal output of an accepted run.
#[derive(Debug, Clone)]
pub struct ResearchOutcome {
    /// The accepted Markdown report.
    pub report: String,
    /// The sources the report was built from.
    pub sources: Vec<SourceRecord>,
    /// Research passes the run needed.
    pub passes: u8,
}

/// Drives one research/write loop per call to [`ResearchWorkflow::run`].
///
/// Capabilities are injected at construction so the whole machine runs
/// against deterministic fakes in tests. Each run owns its own
/// [`ResearchState`]; nothing is shared across runs.
pub struct ResearchWorkflow {
    researcher: Researcher,
    writer: Writer,
    max_passes: u8,
}

impl ResearchWorkflow {
    /// Build a workflow over the injected capabilities.
    pub fn new(
        search: Arc<dyn SearchProvider>,
        summarizer: Arc<dyn Summarizer>,
        gate: QualityGate,
        options: WorkflowOptions,
    ) -> Self {
        Self {
            researcher: Researcher::new(search, summarizer.clone(), options.max_results),
            writer: Writer::new(summarizer, gate),
            max_passes: options.max_passes.max(1),
        }
    }

    /// Execute the workflow for `topic` and return the accepted report.
    ///
    /// Topic validation is the caller's responsibility; this method does
    /// not reject blank topics. Capability failures abort the run
    /// unrecovered. A gate that is still unsatisfied after the pass cap
    /// fails with [`AppError::Workflow`] carrying the last rejection
    /// reason; no partial report is returned.
    pub async fn run(&self, topic: &str) -> Result<ResearchOutcome> {
        let run_id = Uuid::new_v4();
        let mut state = ResearchState::new(topic);
        let mut phase = Phase::Researching;

        loop {
            match phase {
                Phase::Researching => {
                    if state.passes >= self.max_passes {
                        let reason = state
                            .feedback
                            .as_deref()
                            .unwrap_or("no rejection reason recorded");
                        tracing::warn!(%run_id, passes = state.passes, "research passes exhausted");
                        return Err(AppError::Workflow(format!(
                            "quality gate not satisfied after {} research passes: {}",
                            state.passes, reason
                        )));
                    }
                    state.passes += 1;
                    tracing::info!(
                        %run_id,
                        pass = state.passes,
                        max_passes = self.max_passes,
                        "research pass started"
                    );
                    let patch = self.researcher.run(&state).await?;
                    state.apply(patch);
                }
                Phase::Writing => {
                    let patch = self.writer.run(&state).await?;
                    state.apply(patch);
                }
                Phase::Done => {
                    tracing::info!(%run_id, passes = state.passes, "run accepted");
                    let report = state.report.take().ok_or_else(|| {
                        AppError::Workflow("accepted run produced no report".to_string())
                    })?;
                    return Ok(ResearchOutcome {
                        report,
                        sources: state.sources,
                        passes: state.passes,
                    });
                }
            }
            phase = phase.next(&state);
        }
    }
}
