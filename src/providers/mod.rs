/*!
 * Provider implementations for the external language-model service.
 *
 * This module contains the client used to reach the model API:
 * - Groq: OpenAI-compatible chat-completions API
 * - Mock: scripted model behaviors for testing
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Opaque chat-completion capability backing the pipeline's prompt steps.
///
/// One invocation sends a fixed system instruction plus a dynamic user
/// payload and returns the raw completion text. The completion is expected,
/// not guaranteed, to be a JSON object; decoding is the caller's concern.
#[async_trait]
pub trait LanguageModel: Send + Sync + Debug {
    /// Complete a single system/user exchange
    ///
    /// # Arguments
    /// * `system_prompt` - The fixed role instruction
    /// * `user_prompt` - The dynamic payload for this invocation
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The completion text or an error
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ProviderError>;
}

pub mod groq;
pub mod mock;
