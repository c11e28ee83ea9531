//! Mock capability implementations for testing.
//!
//! Deterministic fakes for the two injected capabilities, so workflow
//! and API tests run without network access. Both record their inputs
//! for assertions on query/prompt construction.

use async_trait::async_trait;
use scribe::llm::Summarizer;
use scribe::search::{SearchHit, SearchProvider};
use scribe::types::{AppError, Result};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Build a search hit with a content snippet derived from the URL.
pub fn hit(url: &str) -> SearchHit {
    SearchHit {
        title: format!("Page at {url}"),
        url: url.to_string(),
        content: Some(format!("Snippet from {url}")),
    }
}

/// Build a batch of hits from URLs.
pub fn hits_from(urls: &[&str]) -> Vec<SearchHit> {
    urls.iter().map(|u| hit(u)).collect()
}

/// A batch of five hits across four distinct, non-blocklisted hosts.
pub fn clean_hits() -> Vec<SearchHit> {
    hits_from(&[
        "https://tokio.rs/blog",
        "https://rust-lang.org/what/networking",
        "https://docs.rs/axum/latest/axum/",
        "https://crates.io/crates/tower",
        "https://tokio.rs/tokio/tutorial",
    ])
}

/// Scripted search provider.
///
/// Returns the scripted batches in order; once the script is exhausted
/// the last batch repeats, which keeps a never-improving researcher
/// stuck for retry-cap tests.
pub struct MockSearch {
    batches: Vec<Vec<SearchHit>>,
    calls: Mutex<usize>,
    queries: Mutex<Vec<String>>,
    fail: bool,
}

impl MockSearch {
    /// Return each batch in turn, repeating the last one.
    pub fn scripted(batches: Vec<Vec<SearchHit>>) -> Self {
        assert!(!batches.is_empty(), "scripted search needs at least one batch");
        Self {
            batches,
            calls: Mutex::new(0),
            queries: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Return the same batch on every call.
    pub fn fixed(batch: Vec<SearchHit>) -> Self {
        Self::scripted(vec![batch])
    }

    /// Fail every call.
    pub fn failing() -> Self {
        Self {
            batches: vec![Vec::new()],
            calls: Mutex::new(0),
            queries: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Queries received so far, in call order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    /// Number of completed calls.
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl SearchProvider for MockSearch {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>> {
        if self.fail {
            return Err(AppError::Search("mock search failure".to_string()));
        }

        self.queries.lock().unwrap().push(query.to_string());

        let mut calls = self.calls.lock().unwrap();
        let index = (*calls).min(self.batches.len() - 1);
        *calls += 1;

        Ok(self.batches[index]
            .iter()
            .cloned()
            .take(max_results)
            .collect())
    }
}

/// Scripted summarizer.
///
/// Pops one response per call; once the script is exhausted the last
/// response repeats. Records every prompt it receives.
pub struct MockSummarizer {
    responses: Mutex<VecDeque<String>>,
    fallback: String,
    prompts: Mutex<Vec<String>>,
    fail: bool,
}

impl MockSummarizer {
    /// Return the same response on every call.
    pub fn new(response: &str) -> Self {
        Self::scripted(vec![response.to_string()])
    }

    /// Return each response in turn, repeating the last one.
    pub fn scripted(responses: Vec<String>) -> Self {
        assert!(
            !responses.is_empty(),
            "scripted summarizer needs at least one response"
        );
        let fallback = responses.last().cloned().unwrap_or_default();
        Self {
            responses: Mutex::new(responses.into()),
            fallback,
            prompts: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Fail every call.
    pub fn failing() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            fallback: String::new(),
            prompts: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn generate(&self, prompt: &str) -> Result<String> {
        if self.fail {
            return Err(AppError::LLM("mock summarizer failure".to_string()));
        }

        self.prompts.lock().unwrap().push(prompt.to_string());

        let mut responses = self.responses.lock().unwrap();
        Ok(responses.pop_front().unwrap_or_else(|| self.fallback.clone()))
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
