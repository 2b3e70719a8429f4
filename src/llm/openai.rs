//! OpenAI-compatible `chat/completions` client.
//!
//! Works against api.openai.com and any server exposing the same endpoint.
//! Search grounding is not available here, so completions carry no sources.

use serde::{Deserialize, Serialize};

use super::config::LlmConfig;
use super::gemini::build_http;
use super::types::{Completion, LlmError, Prompt};
use crate::consts::cli_consts::llm::MAX_OUTPUT_TOKENS;

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        Ok(Self {
            http: build_http(config.timeouts)?,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        })
    }

    pub async fn complete(&self, prompt: &Prompt) -> Result<Completion, LlmError> {
        let body = build_request(&self.model, prompt);
        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;
        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }
        parse_chat_completions_response(&text)
    }
}

// =============================================================================
// CHAT COMPLETIONS — wire types
// =============================================================================

#[derive(Serialize)]
struct CcRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<CcMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<CcResponseFormat>,
}

#[derive(Serialize)]
struct CcMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct CcResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

fn build_request<'a>(model: &'a str, prompt: &'a Prompt) -> CcRequest<'a> {
    let mut messages = Vec::with_capacity(2);
    if !prompt.system.trim().is_empty() {
        messages.push(CcMessage {
            role: "system",
            content: &prompt.system,
        });
    }
    messages.push(CcMessage {
        role: "user",
        content: &prompt.user,
    });

    CcRequest {
        model,
        max_tokens: MAX_OUTPUT_TOKENS,
        messages,
        response_format: prompt.json_output.then_some(CcResponseFormat {
            format_type: "json_object",
        }),
    }
}

#[derive(Deserialize)]
struct CcResponse {
    #[serde(default)]
    model: String,
    #[serde(default)]
    choices: Vec<CcChoice>,
}

#[derive(Deserialize)]
struct CcChoice {
    message: CcResponseMessage,
}

#[derive(Deserialize)]
struct CcResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

fn parse_chat_completions_response(body: &str) -> Result<Completion, LlmError> {
    let response: CcResponse =
        serde_json::from_str(body).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::ApiParse("response has no choices".to_string()))?;
    let text = choice
        .message
        .content
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| LlmError::ApiParse("choice has no content".to_string()))?;

    Ok(Completion {
        text,
        sources: Vec::new(),
        model: response.model,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_includes_system_and_json_mode() {
        let prompt = Prompt::new("be terse", "pitch this").json();
        let body = serde_json::to_value(build_request("gpt-4o", &prompt)).unwrap();

        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "pitch this");
        assert_eq!(body["response_format"]["type"], "json_object");
    }

    #[test]
    fn test_request_skips_blank_system() {
        let prompt = Prompt::new("  ", "hello");
        let body = serde_json::to_value(build_request("gpt-4o", &prompt)).unwrap();

        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
        assert!(body.get("response_format").is_none());
    }

    #[test]
    fn test_parse_text_response() {
        let json = serde_json::json!({
            "model": "gpt-4o",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "{\"opening\":\"Hi\"}" },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 10, "completion_tokens": 5 }
        })
        .to_string();

        let completion = parse_chat_completions_response(&json).unwrap();
        assert_eq!(completion.text, "{\"opening\":\"Hi\"}");
        assert_eq!(completion.model, "gpt-4o");
        assert!(completion.sources.is_empty());
    }

    #[test]
    fn test_parse_missing_choices() {
        let json = serde_json::json!({ "model": "gpt-4o", "choices": [] }).to_string();
        assert!(parse_chat_completions_response(&json).is_err());
    }

    #[test]
    fn test_parse_null_content() {
        let json = serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": null } }]
        })
        .to_string();
        assert!(parse_chat_completions_response(&json).is_err());
    }
}
