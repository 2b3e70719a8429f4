use crate::intel::error::IntelError;
use crate::intel::types::{CampaignInsight, IntelligenceReport, SalesScript};

pub(crate) mod client;
pub use client::IntelClient;
pub mod demo;
pub use demo::DemoIntel;
pub mod error;
pub mod prompts;
pub mod types;

#[cfg(test)]
use mockall::automock;

/// The generative collaborators behind the dashboard.
///
/// Every call is all-or-nothing: a fully formed value or an error.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait IntelligenceService: Send + Sync {
    /// Human-readable backend name shown in the dashboard header.
    fn backend_name(&self) -> String;

    /// Produce a market intelligence report for an industry.
    async fn analyze_market(&self, industry: &str) -> Result<IntelligenceReport, IntelError>;

    /// Write a sales script for a lead, pitching the given product.
    async fn generate_pitch(
        &self,
        lead_context: &str,
        product: &str,
    ) -> Result<SalesScript, IntelError>;

    /// Suggest audience, channels and a campaign idea for an objective.
    async fn plan_campaign(&self, objective: &str) -> Result<CampaignInsight, IntelError>;
}
