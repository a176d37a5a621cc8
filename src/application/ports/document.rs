//! Document port interfaces

use std::sync::Arc;

use thiserror::Error;

use crate::domain::content::GeneratedContent;
use crate::domain::document::{InjectionOptions, InjectionReport};

/// Callback receiving human-readable status lines
pub type ProgressCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Document reading/writing errors
#[derive(Debug, Clone, Error)]
pub enum DocumentError {
    #[error("Not a valid Word document: {0}")]
    InvalidPackage(String),

    #[error("Document part missing: {0}")]
    MissingPart(String),

    #[error("Malformed document XML: {0}")]
    MalformedXml(String),

    #[error("Failed to write document: {0}")]
    WriteFailed(String),
}

/// The modified document plus what was done to it
#[derive(Debug, Clone)]
pub struct InjectionOutcome {
    pub document: Vec<u8>,
    pub report: InjectionReport,
}

/// Port for turning a document into prompt context
pub trait TextExtractor: Send + Sync {
    /// Plain text of the document, one line per paragraph.
    fn extract_text(&self, document: &[u8]) -> Result<String, DocumentError>;
}

/// Port for merging generated content into a document
pub trait DocumentInjector: Send + Sync {
    /// Produce a new document with the insertions applied.
    ///
    /// The input bytes are never modified. Anchors or headings that cannot be
    /// located are reported through `on_progress` and in the report, not as
    /// errors.
    fn inject(
        &self,
        document: &[u8],
        content: &GeneratedContent,
        options: &InjectionOptions,
        on_progress: &dyn Fn(&str),
    ) -> Result<InjectionOutcome, DocumentError>;
}
