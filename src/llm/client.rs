//! The Summarizer trait.

use crate::types::Result;
use async_trait::async_trait;

/// Opaque text-completion capability.
///
/// The workflow supplies two prompt templates (source summarization and
/// report composition) but never inspects the implementation. Swapping
/// providers, or substituting a deterministic fake in tests, only
/// requires another implementation of this trait.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Generate a completion for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// The model identifier, for logging.
    fn model_name(&self) -> &str;
}
