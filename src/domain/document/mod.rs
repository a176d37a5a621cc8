//! Document domain module

mod artifact;
mod options;
mod report;
mod source;

pub use artifact::{output_file_name, ResultArtifact, OUTPUT_PREFIX};
pub use options::{HighlightColor, InjectionOptions};
pub use report::InjectionReport;
pub use source::{SourceDocument, DOCX_EXTENSION};
