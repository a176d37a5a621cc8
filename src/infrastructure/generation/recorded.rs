//! Replay a saved model response instead of calling the API

use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{ContentGenerator, GenerationError};
use crate::domain::lesson::IntegrationPrompt;

/// Generator that returns the contents of a file, ignoring the prompt.
///
/// Pairs with `--save-response` for re-running injection offline.
pub struct RecordedResponse {
    path: PathBuf,
}

impl RecordedResponse {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentGenerator for RecordedResponse {
    async fn generate(&self, _prompt: &IntegrationPrompt) -> Result<String, GenerationError> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            GenerationError::RequestFailed(format!(
                "cannot read response file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(trimmed.to_string())
    }
}
