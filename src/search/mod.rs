//! SearchProvider capability: trait abstraction and the Tavily client.

/// Trait abstraction for web search.
pub mod provider;
/// Tavily search API client.
pub mod tavily;

pub use provider::{SearchHit, SearchProvider};
pub use tavily::TavilySearch;
