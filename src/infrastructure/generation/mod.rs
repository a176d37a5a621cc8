//! Content generation adapters

mod gemini;
mod recorded;

pub use gemini::GeminiGenerator;
pub use recorded::RecordedResponse;
