//! Domain error types

use thiserror::Error;

/// Error when parsing a duration string
#[derive(Debug, Clone, Error)]
#[error("Invalid duration format: \"{input}\". Expected format: <number>s, <number>m, or <number>m<number>s (e.g., 30s, 2m, 1m30s)")]
pub struct DurationParseError {
    pub input: String,
}

/// Error when an unknown subject is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid subject: \"{input}\". Valid subjects are: math, physics, chemistry, biology, natural-science, literature, english, informatics, history, geography, civics")]
pub struct InvalidSubjectError {
    pub input: String,
}

/// Error when an unknown grade is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid grade: \"{input}\". Valid grades are 6 to 12")]
pub struct InvalidGradeError {
    pub input: String,
}

/// Error when a highlight color is not a 6-digit hex RGB value
#[derive(Debug, Clone, Error)]
#[error("Invalid color: \"{input}\". Expected a 6-digit hex RGB value (e.g., FF0000)")]
pub struct InvalidColorError {
    pub input: String,
}

/// Rejections raised before any pipeline step runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("No lesson plan file provided")]
    MissingFile,

    #[error("No subject selected. Use --subject or 'nls-integrator config set subject <subject>'")]
    MissingSubject,

    #[error("No grade selected. Use --grade or 'nls-integrator config set grade <grade>'")]
    MissingGrade,

    #[error("Not a Word document (.docx): {0}")]
    NotDocx(String),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
