//! Domain layer - Core business logic
//!
//! Contains value objects, the response parser, the session state machine
//! and domain errors. This layer has no dependencies on external systems.

pub mod config;
pub mod content;
pub mod document;
pub mod duration;
pub mod error;
pub mod lesson;
pub mod session;

// Re-export common types
pub use config::AppConfig;
pub use content::{parse_response, ActivityInsertion, AppendixTable, GeneratedContent};
pub use document::{
    HighlightColor, InjectionOptions, InjectionReport, ResultArtifact, SourceDocument,
};
pub use duration::Duration;
pub use error::*;
pub use lesson::{Grade, IntegrationPrompt, IntegrationRequest, Subject};
pub use session::{IntegrationSession, SessionState};
