//! App runners for the integrate, extract and subjects commands

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use crate::application::ports::{ConfigStore, ContentGenerator, TextExtractor};
use crate::application::{IntegrateCallbacks, IntegrateInput, IntegrateLessonUseCase};
use crate::domain::config::AppConfig;
use crate::domain::document::SourceDocument;
use crate::domain::error::InputError;
use crate::domain::lesson::{ALL_GRADES, ALL_SUBJECTS};
use crate::domain::session::IntegrationSession;
use crate::infrastructure::{
    DocxInjector, DocxTextExtractor, GeminiGenerator, RecordedResponse, XdgConfigStore,
};

use super::args::IntegrateOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// How a single file run ended
enum RunFailure {
    /// Bad input; stop and report a usage error
    Usage(String),
    /// The run failed; other files may still succeed
    Runtime(String),
}

/// Run the integration pipeline over every input, one after another.
pub async fn run_integrate(options: IntegrateOptions, api_key: Option<String>) -> ExitCode {
    let presenter = Arc::new(Presenter::new());

    if options.inputs.is_empty() {
        presenter.error(&InputError::MissingFile.to_string());
        return ExitCode::from(EXIT_USAGE_ERROR);
    }
    if options.save_response.is_some() && options.inputs.len() > 1 {
        presenter.error("--save-response works with a single input file");
        return ExitCode::from(EXIT_USAGE_ERROR);
    }
    if let Err(e) = check_selection(&options) {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    match options.response_file.clone() {
        Some(path) => {
            presenter.info(&format!("Using saved AI response from {}", path.display()));
            run_with_generator(RecordedResponse::new(path), &options, presenter).await
        }
        None => {
            let Some(api_key) = api_key else {
                presenter.error(&format!(
                    "Missing API key. Set {} environment variable or run 'nls-integrator config set api_key <key>'",
                    API_KEY_ENV
                ));
                return ExitCode::from(EXIT_ERROR);
            };
            let generator = GeminiGenerator::with_model(api_key, options.model.clone());
            run_with_generator(generator, &options, presenter).await
        }
    }
}

/// Reject bad file names and missing selections before any work starts,
/// credential lookup included.
fn check_selection(options: &IntegrateOptions) -> Result<(), InputError> {
    for input in &options.inputs {
        SourceDocument::check_name(&file_name_of(input))?;
    }
    options.subject.ok_or(InputError::MissingSubject)?;
    options.grade.ok_or(InputError::MissingGrade)?;
    Ok(())
}

async fn run_with_generator<G: ContentGenerator>(
    generator: G,
    options: &IntegrateOptions,
    presenter: Arc<Presenter>,
) -> ExitCode {
    let use_case =
        IntegrateLessonUseCase::new(generator, DocxTextExtractor::new(), DocxInjector::new())
            .with_timeout(options.timeout);
    let session = Arc::new(Mutex::new(IntegrationSession::new()));

    let mut failures = 0usize;
    for input in &options.inputs {
        match integrate_file(&use_case, input, options, &session, &presenter).await {
            Ok(()) => {}
            Err(RunFailure::Usage(message)) => {
                presenter.error(&message);
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
            Err(RunFailure::Runtime(message)) => {
                presenter.error(&format!("{}: {}", input.display(), message));
                failures += 1;
            }
        }
    }

    if options.inputs.len() > 1 {
        let done = options.inputs.len() - failures;
        presenter.info(&format!("{} of {} file(s) processed", done, options.inputs.len()));
    }

    if failures > 0 {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}

async fn integrate_file<G: ContentGenerator>(
    use_case: &IntegrateLessonUseCase<G, DocxTextExtractor, DocxInjector>,
    path: &Path,
    options: &IntegrateOptions,
    session: &Arc<Mutex<IntegrationSession>>,
    presenter: &Arc<Presenter>,
) -> Result<(), RunFailure> {
    let document = read_source(path).await?;

    let input = IntegrateInput::validate(
        Some(document),
        options.subject,
        options.grade,
        options.injection.clone(),
    )
    .map_err(|e| RunFailure::Usage(e.to_string()))?;

    let first_line = format!("Processing {}", input.document.file_name());
    presenter.info(&first_line);
    with_session(session, |s| s.begin(first_line.clone()))
        .map_err(|e| RunFailure::Runtime(e.to_string()))?;

    let callbacks = callbacks_for(session, presenter);
    let result = use_case.execute(input, callbacks).await;

    if presenter.is_spinner_active() {
        presenter.spinner_fail("AI request failed");
    }

    let output = match result {
        Ok(output) => output,
        Err(e) => {
            let message = e.to_string();
            let last_step = with_session(session, |s| {
                let step = s.logs().last().cloned();
                s.fail(message.clone()).map(|_| step)
            })
            .ok()
            .flatten();
            return Err(RunFailure::Runtime(describe_failure(
                &message,
                last_step.as_deref(),
            )));
        }
    };

    presenter.report(&output.report);

    if let Some(save_path) = &options.save_response {
        tokio::fs::write(save_path, &output.raw_response)
            .await
            .map_err(|e| RunFailure::Runtime(format!("cannot save response: {}", e)))?;
        presenter.info(&format!("AI response saved to {}", save_path.display()));
    }

    let artifact = output.artifact;
    let done_line = format!("Ready: {} ({})", artifact.file_name(), artifact.human_readable_size());
    with_session(session, |s| s.complete(artifact, done_line.clone()))
        .map_err(|e| RunFailure::Runtime(e.to_string()))?;

    let artifact = with_session(session, |s| Ok::<_, std::convert::Infallible>(s.take_result()))
        .ok()
        .flatten()
        .ok_or_else(|| RunFailure::Runtime("result was not kept".to_string()))?;

    let destination = output_path(path, options.output_dir.as_deref(), artifact.file_name());
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| RunFailure::Runtime(format!("cannot create {}: {}", parent.display(), e)))?;
        }
    }
    tokio::fs::write(&destination, artifact.bytes())
        .await
        .map_err(|e| RunFailure::Runtime(format!("cannot write {}: {}", destination.display(), e)))?;

    presenter.success(&done_line);
    presenter.output(&destination.to_string_lossy());
    Ok(())
}

/// Error line for a failed run, naming the step it stopped at
fn describe_failure(message: &str, last_step: Option<&str>) -> String {
    match last_step {
        Some(step) => format!("{} (last step: {})", message, step.trim_end_matches('.')),
        None => message.to_string(),
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Read a lesson plan and check its name before anything else happens
async fn read_source(path: &Path) -> Result<SourceDocument, RunFailure> {
    let name = file_name_of(path);
    SourceDocument::check_name(&name).map_err(|e| RunFailure::Usage(e.to_string()))?;

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| RunFailure::Runtime(format!("cannot read file: {}", e)))?;

    SourceDocument::new(name, bytes).map_err(|e| RunFailure::Usage(e.to_string()))
}

fn callbacks_for(
    session: &Arc<Mutex<IntegrationSession>>,
    presenter: &Arc<Presenter>,
) -> IntegrateCallbacks {
    let progress_session = Arc::clone(session);
    let progress_presenter = Arc::clone(presenter);
    let start_presenter = Arc::clone(presenter);
    let end_presenter = Arc::clone(presenter);

    IntegrateCallbacks {
        on_progress: Some(Arc::new(move |message: &str| {
            progress_presenter.step(message);
            if let Ok(mut session) = progress_session.lock() {
                session.log(message);
            }
        })),
        on_generating_start: Some(Box::new(move || {
            start_presenter.start_spinner("Waiting for the AI response...");
        })),
        on_generating_end: Some(Box::new(move || {
            end_presenter.spinner_success("AI response received");
        })),
    }
}

fn with_session<T, E>(
    session: &Arc<Mutex<IntegrationSession>>,
    f: impl FnOnce(&mut IntegrationSession) -> Result<T, E>,
) -> Result<T, String>
where
    E: std::fmt::Display,
{
    let mut guard = session
        .lock()
        .map_err(|_| "session lock poisoned".to_string())?;
    f(&mut guard).map_err(|e| e.to_string())
}

/// `NLS_<name>` next to the input, or inside `output_dir`
pub fn output_path(input: &Path, output_dir: Option<&Path>, file_name: &str) -> PathBuf {
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input
            .parent()
            .map(|p| p.join(file_name))
            .unwrap_or_else(|| PathBuf::from(file_name)),
    }
}

/// Print the text extracted from a lesson plan
pub async fn run_extract(path: &Path) -> ExitCode {
    let presenter = Presenter::new();

    let document = match read_source(path).await {
        Ok(document) => document,
        Err(RunFailure::Usage(message)) => {
            presenter.error(&message);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
        Err(RunFailure::Runtime(message)) => {
            presenter.error(&message);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match DocxTextExtractor::new().extract_text(document.bytes()) {
        Ok(text) => {
            presenter.output(&text);
            presenter.info(&format!("{} characters", text.trim().chars().count()));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// List subjects and grades with their identifiers
pub fn run_subjects() -> ExitCode {
    let presenter = Presenter::new();

    presenter.output("Subjects:");
    for subject in ALL_SUBJECTS {
        presenter.output(&format!("  {:<16} {}", subject.as_str(), subject.label()));
    }

    presenter.output("Grades:");
    for grade in ALL_GRADES {
        presenter.output(&format!(
            "  {:<16} {} (competency tier {})",
            grade.number(),
            grade.label(),
            grade.competency_tier()
        ));
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    let env_config = AppConfig {
        api_key: env::var(API_KEY_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lesson::{Grade, Subject};

    #[test]
    fn output_next_to_input() {
        let path = output_path(Path::new("/plans/bai5.docx"), None, "NLS_bai5.docx");
        assert_eq!(path, PathBuf::from("/plans/NLS_bai5.docx"));
    }

    #[test]
    fn output_in_directory() {
        let path = output_path(
            Path::new("/plans/bai5.docx"),
            Some(Path::new("/out")),
            "NLS_bai5.docx",
        );
        assert_eq!(path, PathBuf::from("/out/NLS_bai5.docx"));
    }

    #[test]
    fn bare_file_name_stays_relative() {
        let path = output_path(Path::new("bai5.docx"), None, "NLS_bai5.docx");
        assert_eq!(path, PathBuf::from("NLS_bai5.docx"));
    }

    fn options(inputs: &[&str]) -> IntegrateOptions {
        IntegrateOptions {
            inputs: inputs.iter().map(PathBuf::from).collect(),
            subject: Some(Subject::Math),
            grade: Some(Grade::Six),
            injection: Default::default(),
            model: "gemini-2.5-flash".to_string(),
            timeout: Default::default(),
            output_dir: None,
            response_file: None,
            save_response: None,
        }
    }

    #[test]
    fn selection_requires_docx_names() {
        let result = check_selection(&options(&["/plans/bai5.docx", "/plans/bai6.pdf"]));
        assert!(matches!(result, Err(InputError::NotDocx(name)) if name == "bai6.pdf"));
    }

    #[test]
    fn selection_requires_subject_and_grade() {
        let mut no_subject = options(&["bai5.docx"]);
        no_subject.subject = None;
        assert!(matches!(check_selection(&no_subject), Err(InputError::MissingSubject)));

        let mut no_grade = options(&["bai5.docx"]);
        no_grade.grade = None;
        assert!(matches!(check_selection(&no_grade), Err(InputError::MissingGrade)));

        assert!(check_selection(&options(&["bai5.DOCX"])).is_ok());
    }

    #[test]
    fn failure_names_last_step() {
        assert_eq!(
            describe_failure("AI generation failed: timeout", Some("Connecting to the AI assistant...")),
            "AI generation failed: timeout (last step: Connecting to the AI assistant)"
        );
        assert_eq!(describe_failure("boom", None), "boom");
    }

    #[tokio::test]
    async fn read_source_rejects_other_extensions() {
        let result = read_source(Path::new("/tmp/plan.pdf")).await;
        assert!(matches!(result, Err(RunFailure::Usage(m)) if m.contains("plan.pdf")));
    }
}
