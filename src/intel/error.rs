//! Error handling for the intelligence collaborators

use crate::llm::types::LlmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntelError {
    /// The provider could not be reached or refused the request.
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// The model answered with text that is not the expected JSON document.
    #[error("Malformed model output: {0}")]
    Parse(String),

    /// The request was superseded or cancelled before it finished.
    #[error("Request cancelled")]
    Cancelled,
}

impl IntelError {
    /// One-line description suitable for a status bar.
    pub fn short_message(&self) -> String {
        match self {
            IntelError::Llm(LlmError::MissingApiKey { var }) => {
                format!("API key missing (set {var})")
            }
            IntelError::Llm(LlmError::ApiResponse { status, .. }) => {
                format!("provider returned HTTP {status}")
            }
            IntelError::Llm(LlmError::ApiRequest(_)) => "provider unreachable".to_string(),
            IntelError::Llm(_) => "provider error".to_string(),
            IntelError::Parse(_) => "unreadable model response".to_string(),
            IntelError::Cancelled => "cancelled".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_messages() {
        let err = IntelError::from(LlmError::ApiResponse {
            status: 503,
            body: "overloaded".to_string(),
        });
        assert_eq!(err.short_message(), "provider returned HTTP 503");
        assert_eq!(
            IntelError::Parse("x".to_string()).short_message(),
            "unreadable model response"
        );
        assert!(err.to_string().contains("503"));
    }
}
