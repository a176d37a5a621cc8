//! Gemini API content generator adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ContentGenerator, GenerationError};
use crate::domain::config::DEFAULT_MODEL;
use crate::domain::lesson::IntegrationPrompt;

/// Gemini API base URL
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Header carrying the API key, which keeps the key out of URLs and logs
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Some creativity for ideas, low enough to respect the delimiter format
const TEMPERATURE: f32 = 0.5;

// Request types for Gemini API

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

// Response types for Gemini API

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
    status: Option<String>,
    code: Option<u16>,
}

/// Gemini API generator
pub struct GeminiGenerator {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiGenerator {
    /// Create a new generator with the given API key and the default model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    /// Create a new generator with a custom model
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: API_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Point at a different endpoint (proxies, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the API URL
    fn api_url(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }

    /// Build the request body
    fn build_request(prompt: &IntegrationPrompt) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.content().to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
            },
        }
    }

    /// Extract text from response
    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        let parts: Vec<&str> = response
            .candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(""))
        }
    }
}

/// Map a failed call to the error the user can act on.
fn classify_failure(status: Option<u16>, api_status: Option<&str>, message: &str) -> GenerationError {
    let lower = message.to_lowercase();

    if status == Some(503) || api_status == Some("UNAVAILABLE") || lower.contains("overloaded") {
        return GenerationError::Overloaded;
    }
    if status == Some(429) || api_status == Some("RESOURCE_EXHAUSTED") {
        return GenerationError::QuotaExceeded;
    }
    if matches!(status, Some(401) | Some(403))
        || api_status == Some("UNAUTHENTICATED")
        || lower.contains("api key not valid")
    {
        return GenerationError::InvalidApiKey;
    }

    match status {
        Some(code) => GenerationError::ApiError(format!("HTTP {}: {}", code, message)),
        None => GenerationError::ApiError(message.to_string()),
    }
}

#[async_trait]
impl ContentGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &IntegrationPrompt) -> Result<String, GenerationError> {
        let url = self.api_url();
        let body = Self::build_request(prompt);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;

        let status = response.status();

        // Handle HTTP errors
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(match serde_json::from_str::<ErrorEnvelope>(&error_text) {
                Ok(envelope) => classify_failure(
                    Some(status.as_u16()),
                    envelope.error.status.as_deref(),
                    &envelope.error.message,
                ),
                Err(_) => classify_failure(Some(status.as_u16()), None, &error_text),
            });
        }

        // Parse response
        let response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::ParseError(e.to_string()))?;

        // Check for API error in response body
        if let Some(error) = response.error {
            return Err(classify_failure(
                error.code,
                error.status.as_deref(),
                &error.message,
            ));
        }

        let text = Self::extract_text(&response).ok_or(GenerationError::EmptyResponse)?;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        Ok(trimmed.to_string())
    }
}
