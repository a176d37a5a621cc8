//! Application layer - Use cases and port interfaces
//!
//! Contains the integration pipeline and the trait definitions
//! for external system interactions.

pub mod integrate;
pub mod ports;

// Re-export use cases
pub use integrate::{
    IntegrateCallbacks, IntegrateError, IntegrateInput, IntegrateLessonUseCase, IntegrateOutput,
    MIN_SOURCE_CHARS,
};
