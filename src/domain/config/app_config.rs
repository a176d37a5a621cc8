//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::document::{HighlightColor, InjectionOptions};
use crate::domain::duration::Duration;
use crate::domain::lesson::{Grade, Subject};

/// Default Gemini model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// `[injection]` section: which parts of the document get insertions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InjectionConfig {
    pub objectives: Option<bool>,
    pub materials: Option<bool>,
    pub activities: Option<bool>,
    pub appendix: Option<bool>,
    pub color: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub timeout: Option<String>,
    pub subject: Option<String>,
    pub grade: Option<String>,
    pub injection: Option<InjectionConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            model: Some(DEFAULT_MODEL.to_string()),
            timeout: Some(Duration::default_timeout().to_string()),
            subject: None,
            grade: None,
            injection: Some(InjectionConfig {
                objectives: Some(true),
                materials: Some(true),
                activities: Some(true),
                appendix: Some(true),
                color: Some(HighlightColor::default().to_string()),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            model: other.model.or(self.model),
            timeout: other.timeout.or(self.timeout),
            subject: other.subject.or(self.subject),
            grade: other.grade.or(self.grade),
            injection: Self::merge_injection_config(self.injection, other.injection),
        }
    }

    fn merge_injection_config(
        base: Option<InjectionConfig>,
        other: Option<InjectionConfig>,
    ) -> Option<InjectionConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(InjectionConfig {
                objectives: o.objectives.or(b.objectives),
                materials: o.materials.or(b.materials),
                activities: o.activities.or(b.activities),
                appendix: o.appendix.or(b.appendix),
                color: o.color.or(b.color),
            }),
        }
    }

    /// Get model, or the default model if not set
    pub fn model_or_default(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Get timeout as parsed Duration, or default if not set/invalid
    pub fn timeout_or_default(&self) -> Duration {
        self.timeout
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Duration::default_timeout)
    }

    /// Get subject, or None if not set/invalid
    pub fn subject_parsed(&self) -> Option<Subject> {
        self.subject.as_ref().and_then(|s| s.parse().ok())
    }

    /// Get grade, or None if not set/invalid
    pub fn grade_parsed(&self) -> Option<Grade> {
        self.grade.as_ref().and_then(|s| s.parse().ok())
    }

    /// Resolve the injection section into options, defaulting every toggle to on
    pub fn injection_options(&self) -> InjectionOptions {
        let section = self.injection.clone().unwrap_or_default();
        InjectionOptions {
            objectives: section.objectives.unwrap_or(true),
            materials: section.materials.unwrap_or(true),
            activities: section.activities.unwrap_or(true),
            appendix: section.appendix.unwrap_or(true),
            color: section
                .color
                .as_ref()
                .and_then(|c| c.parse().ok())
                .unwrap_or_default(),
        }
    }
}
