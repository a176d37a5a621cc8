//! Integrate lesson plan use case

use thiserror::Error;

use crate::domain::content::{parse_response, GeneratedContent};
use crate::domain::document::{InjectionOptions, InjectionReport, ResultArtifact, SourceDocument};
use crate::domain::duration::Duration;
use crate::domain::error::InputError;
use crate::domain::lesson::{Grade, IntegrationPrompt, IntegrationRequest, Subject};

use super::ports::{
    ContentGenerator, DocumentError, DocumentInjector, GenerationError, ProgressCallback,
    TextExtractor,
};

/// Below this many characters the extracted text is not a usable lesson plan
pub const MIN_SOURCE_CHARS: usize = 50;

/// Errors from the integrate use case
#[derive(Debug, Error)]
pub enum IntegrateError {
    #[error("Could not read the lesson plan: {0}")]
    Extraction(DocumentError),

    #[error("The lesson plan is too short or unreadable ({chars} characters of text, at least {min} required)")]
    SourceTooShort { chars: usize, min: usize },

    #[error("AI generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Could not build the modified document: {0}")]
    Injection(DocumentError),
}

/// Validated input for one run
#[derive(Debug, Clone)]
pub struct IntegrateInput {
    pub document: SourceDocument,
    pub subject: Subject,
    pub grade: Grade,
    pub options: InjectionOptions,
}

impl IntegrateInput {
    /// Reject incomplete selections before any pipeline step runs.
    pub fn validate(
        document: Option<SourceDocument>,
        subject: Option<Subject>,
        grade: Option<Grade>,
        options: InjectionOptions,
    ) -> Result<Self, InputError> {
        let document = document.ok_or(InputError::MissingFile)?;
        let subject = subject.ok_or(InputError::MissingSubject)?;
        let grade = grade.ok_or(InputError::MissingGrade)?;
        Ok(Self {
            document,
            subject,
            grade,
            options,
        })
    }
}

/// Output from the integrate use case
#[derive(Debug, Clone)]
pub struct IntegrateOutput {
    /// The modified document, named after the source
    pub artifact: ResultArtifact,
    /// What the model produced, after decoding
    pub content: GeneratedContent,
    /// What was actually inserted
    pub report: InjectionReport,
    /// Raw model text, kept for `--save-response`
    pub raw_response: String,
}

/// Callbacks for progress and status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct IntegrateCallbacks {
    /// Called with a status line at each pipeline step
    pub on_progress: Option<ProgressCallback>,
    /// Called right before the AI request is sent
    pub on_generating_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called once the AI response arrived
    pub on_generating_end: Option<Box<dyn Fn() + Send + Sync>>,
}

/// Extract → prompt → generate → parse → inject, for one document.
pub struct IntegrateLessonUseCase<G, X, I>
where
    G: ContentGenerator,
    X: TextExtractor,
    I: DocumentInjector,
{
    generator: G,
    extractor: X,
    injector: I,
    timeout: Duration,
}

impl<G, X, I> IntegrateLessonUseCase<G, X, I>
where
    G: ContentGenerator,
    X: TextExtractor,
    I: DocumentInjector,
{
    /// Create a new use case instance with the default timeout
    pub fn new(generator: G, extractor: X, injector: I) -> Self {
        Self {
            generator,
            extractor,
            injector,
            timeout: Duration::default_timeout(),
        }
    }

    /// Bound the wait for the AI response
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Execute the pipeline. Either a complete artifact is returned or an error;
    /// nothing partial escapes.
    pub async fn execute(
        &self,
        input: IntegrateInput,
        callbacks: IntegrateCallbacks,
    ) -> Result<IntegrateOutput, IntegrateError> {
        let progress = |message: &str| {
            if let Some(ref cb) = callbacks.on_progress {
                cb(message);
            }
        };

        progress("Reading document structure...");
        let source_text = self
            .extractor
            .extract_text(input.document.bytes())
            .map_err(IntegrateError::Extraction)?;

        let chars = source_text.trim().chars().count();
        if chars < MIN_SOURCE_CHARS {
            return Err(IntegrateError::SourceTooShort {
                chars,
                min: MIN_SOURCE_CHARS,
            });
        }
        progress(&format!("Extracted {} characters of lesson text", chars));

        let request = IntegrationRequest::new(source_text, input.subject, input.grade);
        let prompt = IntegrationPrompt::build(&request);

        progress(&format!(
            "Connecting to the AI assistant ({}, {})...",
            input.subject.label(),
            input.grade.label()
        ));
        if let Some(ref cb) = callbacks.on_generating_start {
            cb();
        }

        let raw_response =
            match tokio::time::timeout(self.timeout.as_std(), self.generator.generate(&prompt))
                .await
            {
                Ok(result) => result?,
                Err(_) => return Err(GenerationError::Timeout(self.timeout.to_string()).into()),
            };

        if let Some(ref cb) = callbacks.on_generating_end {
            cb();
        }

        let content = parse_response(&raw_response);
        progress(&format!("AI response decoded ({})", content.summary()));
        if content.is_empty() {
            progress("Warning: the AI response contained no recognizable sections; the document will be unchanged");
        }

        progress("Merging content into the original document...");
        let outcome = self
            .injector
            .inject(input.document.bytes(), &content, &input.options, &progress)
            .map_err(IntegrateError::Injection)?;

        let artifact = ResultArtifact::for_source(input.document.file_name(), outcome.document);

        Ok(IntegrateOutput {
            artifact,
            content,
            report: outcome.report,
            raw_response,
        })
    }
}
