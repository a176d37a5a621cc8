//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod document;
pub mod generator;

// Re-export common types
pub use config::ConfigStore;
pub use document::{
    DocumentError, DocumentInjector, InjectionOutcome, ProgressCallback, TextExtractor,
};
pub use generator::{ContentGenerator, GenerationError};
