//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces:
//! the Gemini API, `.docx` packages and the XDG config file.

pub mod config;
pub mod docx;
pub mod generation;

// Re-export adapters
pub use config::XdgConfigStore;
pub use docx::{DocxInjector, DocxTextExtractor};
pub use generation::{GeminiGenerator, RecordedResponse};
