//! Shared run state and the patch merge algebra.
//!
//! One `ResearchState` instance is owned by exactly one workflow run.
//! Nodes never mutate the state directly; they return a [`StatePatch`]
//! that the engine applies with shallow field replacement.

use crate::types::SourceRecord;

/// The shared state threaded through one workflow run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchState {
    /// The research topic. Immutable for the lifetime of the run.
    pub topic: String,
    /// Gathered sources. Replaced wholesale on each research pass.
    pub sources: Vec<SourceRecord>,
    /// Condensed research notes. Replaced on each research pass.
    pub notes: String,
    /// Rejection reason from the previous writer pass, if any. Consumed
    /// and cleared by the next research pass.
    pub feedback: Option<String>,
    /// The final report. Set exactly once, on gate acceptance.
    pub report: Option<String>,
    /// True only in the terminal state.
    pub accepted: bool,
    /// Completed research passes. Maintained by the engine, not by node
    /// patches; used to enforce the pass cap.
    pub passes: u8,
}

impl ResearchState {
    /// Construct the initial state for a run on `topic`.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            sources: Vec::new(),
            notes: String::new(),
            feedback: None,
            report: None,
            accepted: false,
            passes: 0,
        }
    }

    /// Apply a node patch with shallow field replacement.
    ///
    /// A field the patch omits keeps its previous value; a field the
    /// patch names is overwritten, including overwrites with `None`
    /// (that is how the researcher clears stale feedback).
    pub fn apply(&mut self, patch: StatePatch) {
        if let Some(sources) = patch.sources {
            self.sources = sources;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(feedback) = patch.feedback {
            self.feedback = feedback;
        }
        if let Some(report) = patch.report {
            self.report = report;
        }
        if let Some(accepted) = patch.accepted {
            self.accepted = accepted;
        }
    }
}

/// The partial field set a node returns.
///
/// Each field is tri-state: `None` means "leave the previous value",
/// `Some(value)` means "replace". The nullable state fields (`feedback`,
/// `report`) are doubly wrapped so a patch can distinguish "untouched"
/// from "explicitly set to null".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatePatch {
    /// Replacement source list.
    pub sources: Option<Vec<SourceRecord>>,
    /// Replacement notes text.
    pub notes: Option<String>,
    /// Replacement feedback value, including an explicit clear.
    pub feedback: Option<Option<String>>,
    /// Replacement report value, including an explicit clear.
    pub report: Option<Option<String>>,
    /// Replacement acceptance flag.
    pub accepted: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(url: &str) -> SourceRecord {
        SourceRecord {
            title: "t".to_string(),
            url: url.to_string(),
            content: "c".to_string(),
        }
    }

    #[test]
    fn initial_state_is_empty() {
        let state = ResearchState::new("rust async");
        assert_eq!(state.topic, "rust async");
        assert!(state.sources.is_empty());
        assert!(state.notes.is_empty());
        assert_eq!(state.feedback, None);
        assert_eq!(state.report, None);
        assert!(!state.accepted);
        assert_eq!(state.passes, 0);
    }

    #[test]
    fn empty_patch_is_identity() {
        let mut state = ResearchState::new("topic");
        state.sources = vec![source("https://a.example/1")];
        state.notes = "notes".to_string();
        state.feedback = Some("fix it".to_string());

        let before = state.clone();
        state.apply(StatePatch::default());
        assert_eq!(state, before);
    }

    #[test]
    fn patch_with_explicit_null_clears_feedback() {
        let mut state = ResearchState::new("topic");
        state.feedback = Some("Too few sources. Find at least 3.".to_string());

        state.apply(StatePatch {
            feedback: Some(None),
            ..Default::default()
        });
        assert_eq!(state.feedback, None);
    }

    #[test]
    fn omitted_fields_are_retained() {
        let mut state = ResearchState::new("topic");
        state.feedback = Some("stale".to_string());
        state.notes = "old notes".to_string();

        // An acceptance patch that does not mention feedback leaves the
        // stale value in place.
        state.apply(StatePatch {
            accepted: Some(true),
            report: Some(Some("# Report".to_string())),
            ..Default::default()
        });

        assert!(state.accepted);
        assert_eq!(state.report.as_deref(), Some("# Report"));
        assert_eq!(state.feedback.as_deref(), Some("stale"));
        assert_eq!(state.notes, "old notes");
    }

    #[test]
    fn sources_are_replaced_wholesale() {
        let mut state = ResearchState::new("topic");
        state.sources = vec![source("https://a.example/1"), source("https://a.example/2")];

        state.apply(StatePatch {
            sources: Some(vec![source("https://b.example/1")]),
            ..Default::default()
        });
        assert_eq!(state.sources, vec![source("https://b.example/1")]);
    }
}
