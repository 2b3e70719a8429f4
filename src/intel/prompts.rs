//! Prompt construction and model-output parsing for the intelligence requests.
//!
//! Models are asked for a single JSON object. Grounded answers often arrive
//! fenced or wrapped in prose, so the object is located before deserializing.

use serde::de::DeserializeOwned;

use super::error::IntelError;
use super::types::{CampaignInsight, IntelligenceReport, SalesScript};
use crate::llm::types::Prompt;

const ANALYST_SYSTEM: &str = "You are a senior market intelligence analyst for a B2B sales team. \
Answer with one JSON object and nothing else.";

const COPYWRITER_SYSTEM: &str = "You are an elite B2B sales copywriter. \
Answer with one JSON object and nothing else.";

const STRATEGIST_SYSTEM: &str = "You are a Sales and Marketing Intelligence AI. \
Answer with one JSON object and nothing else.";

pub fn market_analysis_prompt(industry: &str) -> Prompt {
    let user = format!(
        r#"Research the current state of the "{industry}" industry using recent web sources.

Return JSON with exactly these keys:
{{
  "summary": "3-4 sentence executive summary",
  "trends": [{{"topic": "string", "sentiment": "positive|neutral|negative", "growth": number (percent), "description": "one sentence"}}],
  "opportunities": ["string"],
  "competitors": [{{"competitor": "string", "strategy": "string", "threatLevel": "low|medium|high", "notes": "one sentence"}}]
}}

Give 3-4 trends, 3-5 opportunities and 3 competitors."#
    );
    Prompt::new(ANALYST_SYSTEM, user).grounded().json()
}

pub fn sales_pitch_prompt(lead_context: &str, product: &str) -> Prompt {
    let user = format!(
        r#"Write an outreach script for {lead_context}.
We are selling: {product}.

Return JSON with exactly these keys:
{{
  "opening": "personalised first line",
  "valueProp": "2-3 sentence value proposition",
  "handlingObjections": ["likely objection and the answer to it"],
  "closing": "call to action"
}}

Give 3 objections."#
    );
    Prompt::new(COPYWRITER_SYSTEM, user).json()
}

pub fn campaign_prompt(objective: &str) -> Prompt {
    let user = format!(
        r#"Based on the objective below, provide:
1. Target Audience
2. Best Marketing Channels
3. Campaign Idea

Objective:
{objective}

Return JSON with exactly these keys:
{{
  "targetAudience": "string",
  "channels": ["string"],
  "campaignIdea": "string"
}}"#
    );
    Prompt::new(STRATEGIST_SYSTEM, user).json()
}

/// Extract a JSON object from the response text.
/// Handles responses with markdown fences or surrounding text.
pub fn extract_json_from_response(response: &str) -> Option<&str> {
    // ```json fence
    if let Some(start) = response.find("```json") {
        let json_start = start + "```json".len();
        if let Some(end) = response[json_start..].find("```") {
            return Some(response[json_start..json_start + end].trim());
        }
    }
    // Any other fence whose body is an object
    if let Some(start) = response.find("```") {
        let after_fence = start + 3;
        if let Some(nl) = response[after_fence..].find('\n') {
            let body_start = after_fence + nl + 1;
            if let Some(end) = response[body_start..].find("```") {
                let candidate = response[body_start..body_start + end].trim();
                if candidate.starts_with('{') {
                    return Some(candidate);
                }
            }
        }
    }

    let trimmed = response.trim();
    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        return Some(trimmed);
    }

    // Balanced object embedded in prose
    let start = response.find('{')?;
    let candidate = &response[start..];
    let mut depth = 0i32;
    let mut in_string = false;
    let mut escape = false;
    for (i, ch) in candidate.char_indices() {
        if escape {
            escape = false;
            continue;
        }
        match ch {
            '\\' if in_string => escape = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&candidate[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

fn parse_json<T: DeserializeOwned>(response: &str, what: &str) -> Result<T, IntelError> {
    let json = extract_json_from_response(response)
        .ok_or_else(|| IntelError::Parse(format!("no JSON object in {what} response")))?;
    serde_json::from_str(json).map_err(|e| IntelError::Parse(format!("{what}: {e}")))
}

/// Parse a market analysis answer. Grounding sources are attached by the caller.
pub fn parse_intelligence_report(response: &str) -> Result<IntelligenceReport, IntelError> {
    let report: IntelligenceReport = parse_json(response, "market analysis")?;
    if report.summary.trim().is_empty() {
        return Err(IntelError::Parse("market analysis: empty summary".to_string()));
    }
    Ok(report)
}

pub fn parse_sales_script(response: &str) -> Result<SalesScript, IntelError> {
    parse_json(response, "sales pitch")
}

pub fn parse_campaign_insight(
    response: &str,
    objective: &str,
) -> Result<CampaignInsight, IntelError> {
    let mut insight: CampaignInsight = parse_json(response, "campaign")?;
    insight.objective = objective.to_string();
    Ok(insight)
}
