//! Value records produced by the intelligence collaborators.
//!
//! Field names follow the camelCase JSON the models are prompted to return.
//! Every record is replaced wholesale; nothing here is ever patched in place.

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketTrend {
    pub topic: String,
    pub sentiment: Sentiment,
    /// Growth in percent, e.g. `12.5`.
    pub growth: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveInsight {
    pub competitor: String,
    pub strategy: String,
    #[serde(alias = "threat")]
    pub threat_level: ThreatLevel,
    #[serde(default)]
    pub notes: String,
}

/// A web citation backing a claim in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub uri: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntelligenceReport {
    pub summary: String,
    #[serde(default)]
    pub trends: Vec<MarketTrend>,
    #[serde(default)]
    pub opportunities: Vec<String>,
    #[serde(default)]
    pub competitors: Vec<CompetitiveInsight>,
    /// Filled from the provider's grounding metadata, not from model text.
    #[serde(default)]
    pub grounding_sources: Vec<GroundingSource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesScript {
    pub opening: String,
    #[serde(alias = "valueProposition")]
    pub value_prop: String,
    #[serde(default)]
    pub handling_objections: Vec<String>,
    pub closing: String,
}

/// A sales script together with the lead it was written for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedScript {
    pub lead_id: String,
    pub script: SalesScript,
}

/// Answer to a campaign objective: who to target, where, and with what idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignInsight {
    #[serde(default)]
    pub objective: String,
    pub target_audience: String,
    #[serde(default)]
    pub channels: Vec<String>,
    pub campaign_idea: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_deserializes_camel_case() {
        let json = r#"{
            "summary": "Zero trust is consolidating.",
            "trends": [{"topic": "SASE", "sentiment": "positive", "growth": 18, "description": "Edge security"}],
            "opportunities": ["Mid-market MSSPs"],
            "competitors": [{"competitor": "Fortinet", "strategy": "Bundling", "threatLevel": "high", "notes": "Aggressive pricing"}]
        }"#;

        let report: IntelligenceReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.trends[0].sentiment, Sentiment::Positive);
        assert_eq!(report.trends[0].growth, 18.0);
        assert_eq!(report.competitors[0].threat_level, ThreatLevel::High);
        assert!(report.grounding_sources.is_empty());
    }

    #[test]
    fn test_script_accepts_long_value_prop_key() {
        let json = r#"{"opening": "Hi", "valueProposition": "Faster", "handlingObjections": ["Price"], "closing": "Talk soon"}"#;
        let script: SalesScript = serde_json::from_str(json).unwrap();
        assert_eq!(script.value_prop, "Faster");
        assert_eq!(script.handling_objections, vec!["Price".to_string()]);
    }

    #[test]
    fn test_unknown_threat_level_is_rejected() {
        let json = r#"{"competitor": "X", "strategy": "Y", "threatLevel": "extreme"}"#;
        assert!(serde_json::from_str::<CompetitiveInsight>(json).is_err());
    }
}
