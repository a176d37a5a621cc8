//! Integration request value object

use super::{Grade, Subject};

/// Everything the prompt needs: the lesson text plus the selections.
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationRequest {
    source_text: String,
    subject: Subject,
    grade: Grade,
}

impl IntegrationRequest {
    pub fn new(source_text: impl Into<String>, subject: Subject, grade: Grade) -> Self {
        Self {
            source_text: source_text.into(),
            subject,
            grade,
        }
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn subject(&self) -> Subject {
        self.subject
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }
}
