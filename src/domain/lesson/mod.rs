//! Lesson domain module

mod grade;
mod prompt;
mod request;
mod subject;

pub use grade::{Grade, ALL_GRADES};
pub use prompt::IntegrationPrompt;
pub use request::IntegrationRequest;
pub use subject::{Subject, ALL_SUBJECTS};
