use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{ApiError, CompletionClient};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const PROVIDER: &str = "gemini";

#[derive(Serialize)]
struct GeminiPartRequest<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GeminiContentRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<GeminiPartRequest<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContentRequest<'a>>,
    system_instruction: GeminiContentRequest<'a>,
    generation_config: GenerationConfig,
}

#[derive(Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: Option<String>,
    // Reasoning summaries are not part of the visible answer
    #[serde(default)]
    thought: bool,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContent>,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

impl GeminiResponse {
    /// Text of the first candidate; empty when the model produced nothing.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter(|p| !p.thought)
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: model.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(
        &self,
        user_text: &str,
        system_instruction: &str,
        temperature: f32,
    ) -> Result<String, ApiError> {
        let api_key = self.api_key.as_deref().ok_or(ApiError::MissingApiKey)?;

        let request = GeminiRequest {
            contents: vec![GeminiContentRequest {
                role: Some("user"),
                parts: vec![GeminiPartRequest { text: user_text }],
            }],
            system_instruction: GeminiContentRequest {
                role: None,
                parts: vec![GeminiPartRequest {
                    text: system_instruction,
                }],
            },
            generation_config: GenerationConfig { temperature },
        };

        tracing::debug!(model = %self.model, "sending generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::transport(PROVIDER, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::transport(PROVIDER, e))?;

        if !status.is_success() {
            return Err(ApiError::Status {
                provider: PROVIDER,
                status,
                body,
            });
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::malformed(PROVIDER, e.to_string()))?;
        Ok(gemini_response.text())
    }

    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn model(&self) -> &str {
        &self.model
    }
}
