use crate::intel::error::IntelError;
use crate::llm::types::LlmError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Log level for a failed intelligence request.
    pub fn classify_intel_error(&self, error: &IntelError) -> LogLevel {
        match error {
            IntelError::Llm(llm) => self.classify_llm_error(llm),

            // The model answered, but not in the shape we asked for
            IntelError::Parse(_) => LogLevel::Warn,

            // Operator asked for it
            IntelError::Cancelled => LogLevel::Info,
        }
    }

    pub fn classify_llm_error(&self, error: &LlmError) -> LogLevel {
        match error {
            // Rate limiting - low priority
            LlmError::ApiResponse { status, .. } if *status == 429 => LogLevel::Debug,

            // Server errors - temporary issues
            LlmError::ApiResponse { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Authentication errors - critical
            LlmError::ApiResponse { status, .. } if *status == 401 || *status == 403 => {
                LogLevel::Error
            }

            // Misconfiguration never fixes itself
            LlmError::MissingApiKey { .. } | LlmError::ConfigParse(_) => LogLevel::Error,
            LlmError::HttpClientBuild(_) => LogLevel::Error,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
