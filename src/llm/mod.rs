//! Summarizer capability: trait abstraction and concrete clients
//!
//! The workflow core depends only on the [`Summarizer`] trait; the
//! concrete client here speaks the OpenAI-compatible chat-completions
//! wire format over `reqwest`, with a configurable API base so
//! Azure-style deployments and local gateways work unchanged.

/// Trait abstraction for text generation.
pub mod client;
/// OpenAI-compatible chat-completions client.
pub mod openai;

pub use client::Summarizer;
pub use openai::OpenAiSummarizer;
