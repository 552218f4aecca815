// src/providers/gemini.rs

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::GeminiConfig;
use crate::errors::{Result, SynergyError};
use crate::providers::{LlmProvider, ResponseSchema};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
    pub generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub role: &'a str,
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Part<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig<'a> {
    pub response_mime_type: &'a str,
    pub response_schema: &'a ResponseSchema,
}

impl<'a> GenerateContentRequest<'a> {
    /// A single user turn asking for JSON that matches `schema`.
    pub fn json_prompt(prompt: &'a str, schema: &'a ResponseSchema) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
    }
}

/// A provider for interacting with Google's Gemini models.
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
}

impl GeminiProvider {
    /// Creates a new `GeminiProvider`.
    pub fn new(client: Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }
}

impl LlmProvider for GeminiProvider {
    /// Calls `generateContent` once. No retry and no client-side timeout.
    async fn generate_json(&self, prompt: &str, schema: &ResponseSchema) -> Result<(String, u64)> {
        let api_key = self
            .config
            .api_key
            .resolve()
            .ok_or_else(|| SynergyError::MissingCredential {
                var: self.config.api_key.describe(),
            })?;

        let url = self.endpoint();
        log::info!("📡 Calling Gemini: {} with model: {}", url, self.config.model);

        let body = GenerateContentRequest::json_prompt(prompt, schema);
        let start = Instant::now();

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        log::info!("📥 Gemini response status: {} ({}ms)", status, latency_ms);

        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            log::error!("API Error Response: {}", error_body);
            return Err(SynergyError::ApiError {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let response_json: serde_json::Value = resp.json().await?;

        if let Some(error) = response_json.get("error") {
            return Err(SynergyError::ApiResponse(error.to_string()));
        }

        let parsed = GenerateContentResponse::deserialize(&response_json)
            .map_err(|_| SynergyError::UnexpectedResponse(response_json.to_string()))?;

        let output = parsed
            .first_text()
            .ok_or_else(|| SynergyError::UnexpectedResponse(response_json.to_string()))?;

        if output.trim().is_empty() {
            return Err(SynergyError::EmptyResponse);
        }

        Ok((output.to_string(), latency_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::SchemaType;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let schema = ResponseSchema::object([
            ("synergyScore", ResponseSchema::scalar(SchemaType::Number)),
            ("justification", ResponseSchema::scalar(SchemaType::String)),
        ]);
        let body = GenerateContentRequest::json_prompt("hello", &schema);

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "contents": [{"role": "user", "parts": [{"text": "hello"}]}],
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": {
                        "type": "OBJECT",
                        "properties": {
                            "synergyScore": {"type": "NUMBER"},
                            "justification": {"type": "STRING"}
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn test_first_text_extraction() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "{\"a\":1}"}, {"text": "ignored"}]}}]
        }))
        .unwrap();
        assert_eq!(resp.first_text(), Some("{\"a\":1}"));

        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.first_text(), None);

        let no_content: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "SAFETY"}]})).unwrap();
        assert_eq!(no_content.first_text(), None);
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let provider = GeminiProvider::new(
            Client::new(),
            GeminiConfig {
                api_base: "http://localhost:1234/".to_string(),
                model: "gemini-2.0-flash".to_string(),
                api_key: crate::config::ApiKeySource::Fixed(None),
            },
        );
        assert_eq!(
            provider.endpoint(),
            "http://localhost:1234/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }
}
