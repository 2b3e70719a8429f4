//! Google Gemini `generateContent` client.
//!
//! Grounded prompts enable the `google_search` tool; the citations come back
//! in `groundingMetadata.groundingChunks` rather than in the model text.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::config::{LlmConfig, LlmTimeouts};
use super::types::{Completion, LlmError, Prompt};
use crate::consts::cli_consts::llm::{MAX_OUTPUT_TOKENS, request_timeout};
use crate::intel::types::GroundingSource;

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        let http = build_http(config.timeouts)?;
        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url,
            urlencoding::encode(&self.model)
        )
    }

    pub async fn complete(&self, prompt: &Prompt) -> Result<Completion, LlmError> {
        let body = GenerateRequest::from_prompt(prompt);
        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;
        if !(200..300).contains(&status) {
            return Err(LlmError::ApiResponse { status, body: text });
        }
        parse_generate_response(&text, &self.model)
    }
}

pub(crate) fn build_http(timeouts: LlmTimeouts) -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(request_timeout(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .user_agent(concat!("marketmind/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| LlmError::HttpClientBuild(e.to_string()))
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent<'a>>,
    contents: Vec<GeminiContent<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<GeminiTool>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GeminiTool {
    google_search: EmptyObject,
}

#[derive(Serialize)]
struct EmptyObject {}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
}

impl<'a> GenerateRequest<'a> {
    fn from_prompt(prompt: &'a Prompt) -> Self {
        let system_instruction = if prompt.system.trim().is_empty() {
            None
        } else {
            Some(GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: &prompt.system,
                }],
            })
        };

        // Search grounding and JSON mode cannot be combined; grounded
        // prompts rely on the instructions to shape the output instead.
        let response_mime_type =
            (prompt.json_output && !prompt.grounded).then_some("application/json");
        let tools = if prompt.grounded {
            vec![GeminiTool {
                google_search: EmptyObject {},
            }]
        } else {
            Vec::new()
        };

        Self {
            system_instruction,
            contents: vec![GeminiContent {
                role: Some("user"),
                parts: vec![GeminiPart { text: &prompt.user }],
            }],
            tools,
            generation_config: GenerationConfig {
                max_output_tokens: MAX_OUTPUT_TOKENS,
                response_mime_type,
            },
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    model_version: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize)]
struct GroundingChunk {
    #[serde(default)]
    web: Option<WebChunk>,
}

#[derive(Deserialize)]
struct WebChunk {
    #[serde(default)]
    uri: String,
    #[serde(default)]
    title: String,
}

fn parse_generate_response(body: &str, requested_model: &str) -> Result<Completion, LlmError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::ApiParse("response has no candidates".to_string()))?;

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Err(LlmError::ApiParse("candidate has no text".to_string()));
    }

    let mut sources: Vec<GroundingSource> = Vec::new();
    for chunk in candidate
        .grounding_metadata
        .map(|meta| meta.grounding_chunks)
        .unwrap_or_default()
    {
        if let Some(web) = chunk.web {
            if web.uri.is_empty() || sources.iter().any(|s| s.uri == web.uri) {
                continue;
            }
            let title = if web.title.is_empty() {
                web.uri.clone()
            } else {
                web.title
            };
            sources.push(GroundingSource { uri: web.uri, title });
        }
    }

    Ok(Completion {
        text,
        sources,
        model: response
            .model_version
            .unwrap_or_else(|| requested_model.to_string()),
    })
}
