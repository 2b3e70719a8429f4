//! LLM — multi-provider text generation for the intelligence collaborators.
//!
//! `LlmClient` dispatches to Gemini or an OpenAI-compatible endpoint based on
//! the resolved [`config::LlmConfig`].

pub mod config;
pub mod gemini;
pub mod openai;
pub mod types;

use config::{LlmConfig, LlmProviderKind};
use types::{Completion, LlmComplete, LlmError, Prompt};

/// Concrete LLM client that dispatches to the configured provider.
pub struct LlmClient {
    inner: LlmProvider,
    model: String,
}

enum LlmProvider {
    Gemini(gemini::GeminiClient),
    OpenAi(openai::OpenAiClient),
}

impl LlmClient {
    /// Build an LLM client from a resolved config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let inner = match config.provider {
            LlmProviderKind::Gemini => LlmProvider::Gemini(gemini::GeminiClient::new(config)?),
            LlmProviderKind::OpenAi => LlmProvider::OpenAi(openai::OpenAiClient::new(config)?),
        };
        Ok(Self {
            inner,
            model: config.model.clone(),
        })
    }

    /// Return the configured model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmComplete for LlmClient {
    async fn complete(&self, prompt: &Prompt) -> Result<Completion, LlmError> {
        match &self.inner {
            LlmProvider::Gemini(c) => c.complete(prompt).await,
            LlmProvider::OpenAi(c) => c.complete(prompt).await,
        }
    }
}
