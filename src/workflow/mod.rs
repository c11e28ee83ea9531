//! Researcher/Writer orchestration
//!
//! This module is the core of the crate: a small state machine that
//! alternates between information gathering and a deterministic quality
//! gate, feeding rejection reasons back into the next gathering pass
//! until the gate is satisfied or the pass cap is hit.
//!
//! # Architecture
//!
//! - [`state`] - the shared per-run state and the patch merge algebra
//! - [`gate`] - the pure accept/reject function over gathered sources
//! - [`nodes`] - the Researcher and Writer nodes
//! - [`prompts`] - deterministic prompt construction
//! - [`engine`] - the phase machine driving the loop
//!
//! # Control flow
//!
//! ```text
//! Researching -> Writing -> (accepted? Done : Researching)
//! ```
//!
//! Execution is strictly sequential: one node runs at a time and each
//! capability call blocks the run until it returns. The engine owns the
//! state; nodes only read it and return patches.

/// The phase machine driving the loop.
pub mod engine;
/// The deterministic source quality gate.
pub mod gate;
/// Researcher and Writer nodes.
pub mod nodes;
/// Deterministic prompt construction.
pub mod prompts;
/// Per-run shared state and patch merging.
pub mod state;

pub use engine::{Phase, ResearchOutcome, ResearchWorkflow, WorkflowOptions};
pub use gate::{QualityGate, Verdict, DEFAULT_BLOCKED_DOMAINS};
pub use nodes::{Researcher, Writer};
pub use state::{ResearchState, StatePatch};
