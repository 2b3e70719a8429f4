//! Offline intelligence backend with canned, industry-templated answers.
//!
//! Lets the dashboard run without an API key. Answers are deterministic for a
//! given input so they can be asserted on.

use std::time::Duration;

use super::IntelligenceService;
use super::error::IntelError;
use super::types::{
    CampaignInsight, CompetitiveInsight, GroundingSource, IntelligenceReport, MarketTrend,
    SalesScript, Sentiment, ThreatLevel,
};

#[derive(Debug, Clone, Default)]
pub struct DemoIntel {
    /// Simulated provider latency.
    latency: Duration,
}

impl DemoIntel {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

fn slug(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

pub fn demo_report(industry: &str) -> IntelligenceReport {
    let industry = industry.trim();
    let slug = slug(industry);
    IntelligenceReport {
        summary: format!(
            "{industry} buyers are consolidating vendors and demanding measurable ROI within two quarters. \
             AI-assisted workflows are moving from pilots to budgeted line items, while compliance pressure \
             keeps lengthening enterprise sales cycles."
        ),
        trends: vec![
            MarketTrend {
                topic: "AI-assisted operations".to_string(),
                sentiment: Sentiment::Positive,
                growth: 24.0,
                description: format!("{industry} teams are funding automation out of headcount budgets."),
            },
            MarketTrend {
                topic: "Vendor consolidation".to_string(),
                sentiment: Sentiment::Neutral,
                growth: 9.5,
                description: "Platforms are displacing point solutions at renewal time.".to_string(),
            },
            MarketTrend {
                topic: "Regulatory scrutiny".to_string(),
                sentiment: Sentiment::Negative,
                growth: 4.0,
                description: "New reporting rules add friction to procurement.".to_string(),
            },
        ],
        opportunities: vec![
            format!("Mid-market {industry} firms without a dedicated analytics team"),
            "Renewal windows of incumbents with recent price increases".to_string(),
            "Compliance-driven buying committees that need audit trails".to_string(),
        ],
        competitors: vec![
            CompetitiveInsight {
                competitor: "Incumbent Suite Co.".to_string(),
                strategy: "Bundle discounts".to_string(),
                threat_level: ThreatLevel::High,
                notes: "Wins on procurement simplicity, loses on depth.".to_string(),
            },
            CompetitiveInsight {
                competitor: "Upstart Analytics".to_string(),
                strategy: "Product-led growth".to_string(),
                threat_level: ThreatLevel::Medium,
                notes: "Strong with individual contributors, weak in enterprise security reviews."
                    .to_string(),
            },
            CompetitiveInsight {
                competitor: "Consultancy Partners".to_string(),
                strategy: "Services-heavy engagements".to_string(),
                threat_level: ThreatLevel::Low,
                notes: "Expensive and slow; a natural channel partner.".to_string(),
            },
        ],
        grounding_sources: vec![GroundingSource {
            uri: format!("https://example.com/reports/{slug}-outlook"),
            title: format!("{industry} market outlook (demo)"),
        }],
    }
}

pub fn demo_script(lead_context: &str, product: &str) -> SalesScript {
    SalesScript {
        opening: format!(
            "I noticed the momentum around {lead_context}, and wanted to share how peers are getting ahead of it."
        ),
        value_prop: format!(
            "{product} turns live market signals into ranked outreach, so your team spends time on accounts \
             that are ready to buy instead of guessing."
        ),
        handling_objections: vec![
            "\"We already have a CRM.\" We sit on top of it and feed it better signals.".to_string(),
            "\"No budget this quarter.\" Most teams fund us from one recovered deal.".to_string(),
            "\"Security review takes months.\" We ship with SOC 2 reports and an SSO-only setup.".to_string(),
        ],
        closing: "Would a 20-minute walkthrough on Thursday make sense?".to_string(),
    }
}

pub fn demo_campaign(objective: &str) -> CampaignInsight {
    CampaignInsight {
        objective: objective.to_string(),
        target_audience: "Revenue leaders at 200-2000 employee B2B companies".to_string(),
        channels: vec![
            "LinkedIn thought leadership".to_string(),
            "Targeted webinars".to_string(),
            "Account-based email sequences".to_string(),
        ],
        campaign_idea: format!(
            "\"Signal to Signature\": a four-week series showing how teams hit the goal \"{}\" using live market intelligence.",
            objective.trim()
        ),
    }
}

#[async_trait::async_trait]
impl IntelligenceService for DemoIntel {
    fn backend_name(&self) -> String {
        "Demo (offline)".to_string()
    }

    async fn analyze_market(&self, industry: &str) -> Result<IntelligenceReport, IntelError> {
        self.simulate_latency().await;
        if industry.trim().is_empty() {
            return Err(IntelError::Parse("industry is empty".to_string()));
        }
        Ok(demo_report(industry))
    }

    async fn generate_pitch(
        &self,
        lead_context: &str,
        product: &str,
    ) -> Result<SalesScript, IntelError> {
        self.simulate_latency().await;
        Ok(demo_script(lead_context, product))
    }

    async fn plan_campaign(&self, objective: &str) -> Result<CampaignInsight, IntelError> {
        self.simulate_latency().await;
        Ok(demo_campaign(objective))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug() {
        assert_eq!(slug("  Clean Energy / Storage "), "clean-energy-storage");
    }

    #[tokio::test]
    async fn test_demo_report_mentions_industry() {
        let report = DemoIntel::default().analyze_market("Fintech").await.unwrap();
        assert!(report.summary.starts_with("Fintech"));
        assert_eq!(report.trends.len(), 3);
        assert_eq!(
            report.grounding_sources[0].uri,
            "https://example.com/reports/fintech-outlook"
        );
    }

    #[tokio::test]
    async fn test_demo_rejects_blank_industry() {
        assert!(DemoIntel::default().analyze_market("   ").await.is_err());
    }

    #[tokio::test]
    async fn test_demo_pitch_uses_product() {
        let script = DemoIntel::default()
            .generate_pitch("Sarah Chen from Nova Health in the Healthtech sector", "Widget")
            .await
            .unwrap();
        assert!(script.value_prop.starts_with("Widget"));
        assert!(script.opening.contains("Nova Health"));
        assert_eq!(script.handling_objections.len(), 3);
    }
}
