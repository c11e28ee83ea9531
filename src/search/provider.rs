//! The SearchProvider trait and raw result type.

use crate::types::Result;
use async_trait::async_trait;

/// A raw search result before it becomes a
/// [`SourceRecord`](crate::types::SourceRecord).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Title of the result page.
    pub title: String,
    /// URL of the result page.
    pub url: String,
    /// Content snippet, when the backend returned one.
    pub content: Option<String>,
}

/// Web search capability.
///
/// Implementations must return at most `max_results` hits; an empty
/// result set is valid and simply fails the quality gate's size rule
/// downstream.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Search for `query`, returning at most `max_results` hits.
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>>;
}
