//! Content generation port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::lesson::IntegrationPrompt;

/// Generation errors, split by what the user can do about them
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("The AI service is overloaded right now. Please retry in a minute.")]
    Overloaded,

    #[error("API quota exhausted for this key. Wait for the quota to reset or use a different API key.")]
    QuotaExceeded,

    #[error("Invalid API key. Please check the configured key.")]
    InvalidApiKey,

    #[error("No response from the AI service within {0}. Please retry.")]
    Timeout(String),

    #[error("Empty response from the AI service")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for the generative model
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Send the prompt and return the raw response text.
    ///
    /// The text is expected to follow the delimiter grammar but is not
    /// validated here.
    async fn generate(&self, prompt: &IntegrationPrompt) -> Result<String, GenerationError>;
}
