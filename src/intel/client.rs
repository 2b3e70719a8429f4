//! LLM-backed intelligence client.

use super::IntelligenceService;
use super::error::IntelError;
use super::prompts::{
    campaign_prompt, market_analysis_prompt, parse_campaign_insight, parse_intelligence_report,
    parse_sales_script, sales_pitch_prompt,
};
use super::types::{CampaignInsight, IntelligenceReport, SalesScript};
use crate::llm::LlmClient;
use crate::llm::config::LlmConfig;
use crate::llm::types::{LlmComplete, LlmError};

pub struct IntelClient {
    llm: Box<dyn LlmComplete>,
    label: String,
}

impl IntelClient {
    /// Build a client talking to the configured provider.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let llm = LlmClient::from_config(config)?;
        let label = format!("{:?} {}", config.provider, llm.model());
        Ok(Self::with_llm(Box::new(llm), label))
    }

    pub fn with_llm(llm: Box<dyn LlmComplete>, label: String) -> Self {
        Self { llm, label }
    }
}

#[async_trait::async_trait]
impl IntelligenceService for IntelClient {
    fn backend_name(&self) -> String {
        self.label.clone()
    }

    async fn analyze_market(&self, industry: &str) -> Result<IntelligenceReport, IntelError> {
        let completion = self.llm.complete(&market_analysis_prompt(industry)).await?;
        let mut report = parse_intelligence_report(&completion.text)?;
        report.grounding_sources = completion.sources;
        Ok(report)
    }

    async fn generate_pitch(
        &self,
        lead_context: &str,
        product: &str,
    ) -> Result<SalesScript, IntelError> {
        let completion = self
            .llm
            .complete(&sales_pitch_prompt(lead_context, product))
            .await?;
        parse_sales_script(&completion.text)
    }

    async fn plan_campaign(&self, objective: &str) -> Result<CampaignInsight, IntelError> {
        let completion = self.llm.complete(&campaign_prompt(objective)).await?;
        parse_campaign_insight(&completion.text, objective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intel::types::GroundingSource;
    use crate::llm::types::{Completion, Prompt};

    /// Returns a fixed answer, or a fixed HTTP failure status.
    struct CannedLlm {
        answer: Result<Completion, u16>,
        expect_in_prompt: Option<String>,
    }

    impl CannedLlm {
        fn answering(text: &str, sources: Vec<GroundingSource>) -> Self {
            Self {
                answer: Ok(Completion {
                    text: text.to_string(),
                    sources,
                    model: "test-model".to_string(),
                }),
                expect_in_prompt: None,
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                answer: Err(status),
                expect_in_prompt: None,
            }
        }

        fn expecting(mut self, fragment: &str) -> Self {
            self.expect_in_prompt = Some(fragment.to_string());
            self
        }
    }

    #[async_trait::async_trait]
    impl LlmComplete for CannedLlm {
        async fn complete(&self, prompt: &Prompt) -> Result<Completion, LlmError> {
            if let Some(fragment) = &self.expect_in_prompt {
                assert!(prompt.user.contains(fragment.as_str()), "prompt: {}", prompt.user);
            }
            match &self.answer {
                Ok(completion) => Ok(completion.clone()),
                Err(status) => Err(LlmError::ApiResponse {
                    status: *status,
                    body: String::new(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_analyze_market_attaches_grounding_sources() {
        let source = GroundingSource {
            uri: "https://news.test/fintech".to_string(),
            title: "Fintech outlook".to_string(),
        };
        let llm = CannedLlm::answering(
            r#"{"summary": "Payments are consolidating."}"#,
            vec![source.clone()],
        );
        let client = IntelClient::with_llm(Box::new(llm), "test".to_string());

        let report = client.analyze_market("Fintech").await.unwrap();
        assert_eq!(report.summary, "Payments are consolidating.");
        assert_eq!(report.grounding_sources, vec![source]);
    }

    #[tokio::test]
    async fn test_generate_pitch_sends_lead_context() {
        let llm = CannedLlm::answering(
            r#"{"opening": "Hi Alex", "valueProp": "Ship faster", "handlingObjections": [], "closing": "Chat Tuesday?"}"#,
            Vec::new(),
        )
        .expecting("Alex Rivera from CloudScale Inc. in the SaaS sector");
        let client = IntelClient::with_llm(Box::new(llm), "test".to_string());

        let script = client
            .generate_pitch("Alex Rivera from CloudScale Inc. in the SaaS sector", "Product")
            .await
            .unwrap();
        assert_eq!(script.opening, "Hi Alex");
    }

    #[tokio::test]
    async fn test_provider_failure_is_reported() {
        let client = IntelClient::with_llm(Box::new(CannedLlm::failing(500)), "test".to_string());
        let err = client.plan_campaign("Grow").await.unwrap_err();
        assert!(matches!(err, IntelError::Llm(LlmError::ApiResponse { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_prose_answer_is_a_parse_error() {
        let llm = CannedLlm::answering("I cannot help with that.", Vec::new());
        let client = IntelClient::with_llm(Box::new(llm), "test".to_string());
        assert!(matches!(
            client.analyze_market("Mining").await,
            Err(IntelError::Parse(_))
        ));
    }
}
