//! NLS Integrator CLI entry point

use std::process::ExitCode;

use clap::Parser;

use nls_integrator::cli::{
    app::{load_merged_config, run_extract, run_integrate, run_subjects, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
    IntegrateOptions,
};
use nls_integrator::domain::config::{AppConfig, InjectionConfig};
use nls_integrator::domain::document::{HighlightColor, InjectionOptions};
use nls_integrator::domain::duration::Duration;
use nls_integrator::domain::lesson::{Grade, Subject};
use nls_integrator::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Extract { input }) => return run_extract(&input).await,
        Some(Commands::Subjects) => return run_subjects(),
        None => {}
    }

    // CLI flags only ever switch sections off
    let off = |flag: bool| if flag { Some(false) } else { None };

    let cli_config = AppConfig {
        api_key: None, // API key comes from env/file only
        model: cli.model.clone(),
        timeout: cli.timeout.clone(),
        subject: cli.subject.map(|s| Subject::from(s).as_str().to_string()),
        grade: cli.grade.map(|g| Grade::from(g).to_string()),
        injection: Some(InjectionConfig {
            objectives: off(cli.no_objectives),
            materials: off(cli.no_materials),
            activities: off(cli.no_activities),
            appendix: off(cli.no_appendix),
            color: cli.color.clone(),
        }),
    };

    let config = load_merged_config(cli_config).await;

    let options = match resolve_options(&config, &cli) {
        Ok(options) => options,
        Err(message) => {
            presenter.error(&message);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let api_key = config.api_key.clone().filter(|k| !k.trim().is_empty());
    run_integrate(options, api_key).await
}

/// Turn the merged config into run options, rejecting values that do not parse.
fn resolve_options(config: &AppConfig, cli: &Cli) -> Result<IntegrateOptions, String> {
    let timeout = match config.timeout.as_ref() {
        Some(s) => s
            .parse::<Duration>()
            .map_err(|e| format!("Invalid timeout: {}", e))?,
        None => Duration::default_timeout(),
    };

    let subject = config
        .subject
        .as_ref()
        .map(|s| s.parse::<Subject>())
        .transpose()
        .map_err(|e| e.to_string())?;

    let grade = config
        .grade
        .as_ref()
        .map(|g| g.parse::<Grade>())
        .transpose()
        .map_err(|e| e.to_string())?;

    let section = config.injection.clone().unwrap_or_default();
    let color = match section.color.as_ref() {
        Some(c) => c.parse::<HighlightColor>().map_err(|e| e.to_string())?,
        None => HighlightColor::default(),
    };

    let injection = InjectionOptions {
        color,
        ..config.injection_options()
    };

    Ok(IntegrateOptions {
        inputs: cli.inputs.clone(),
        subject,
        grade,
        injection,
        model: config.model_or_default().to_string(),
        timeout,
        output_dir: cli.output_dir.clone(),
        response_file: cli.response_file.clone(),
        save_response: cli.save_response.clone(),
    })
}
