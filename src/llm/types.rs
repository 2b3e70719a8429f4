//! Provider-neutral request/response types and errors for the LLM transport.

use crate::intel::types::GroundingSource;

/// Errors produced by LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the LLM provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The LLM provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The LLM provider response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// A single prompt sent to a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
    /// Ask the provider to search the web and report the sources it used.
    pub grounded: bool,
    /// Ask the provider for a bare JSON body.
    pub json_output: bool,
}

impl Prompt {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            grounded: false,
            json_output: false,
        }
    }

    pub fn grounded(mut self) -> Self {
        self.grounded = true;
        self
    }

    pub fn json(mut self) -> Self {
        self.json_output = true;
        self
    }
}

/// Text answer from a provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    /// Web sources, only populated for grounded prompts on providers that support it.
    pub sources: Vec<GroundingSource>,
    pub model: String,
}

/// Provider-neutral async trait for LLM text generation. Enables mocking in tests.
#[async_trait::async_trait]
pub trait LlmComplete: Send + Sync {
    async fn complete(&self, prompt: &Prompt) -> Result<Completion, LlmError>;
}
