//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, InjectionConfig};
use crate::domain::document::HighlightColor;
use crate::domain::duration::Duration;
use crate::domain::error::ConfigError;
use crate::domain::lesson::{Grade, Subject};

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;
    let value = normalize_config_value(key, value)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value.clone())?;
    store.save(&config).await?;

    let shown = if key == "api_key" {
        mask_api_key(&value)
    } else {
        value
    };
    presenter.success(&format!("{} = {}", key, shown));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;
    match display_value(&config, key) {
        Some(v) => presenter.output(&v),
        None => presenter.output(NOT_SET),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = display_value(&config, key).unwrap_or_else(|| NOT_SET.to_string());
        presenter.key_value(key, &value);
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Validate a value and return the form that gets stored.
/// Subjects and grades are stored by identifier, colors upper-case.
fn normalize_config_value(key: &str, value: &str) -> Result<String, ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "timeout" => value
            .parse::<Duration>()
            .map(|_| value.trim().to_string())
            .map_err(|e| invalid(e.to_string())),
        "subject" => value
            .parse::<Subject>()
            .map(|s| s.as_str().to_string())
            .map_err(|e| invalid(e.to_string())),
        "grade" => value
            .parse::<Grade>()
            .map(|g| g.to_string())
            .map_err(|e| invalid(e.to_string())),
        "injection.color" => value
            .parse::<HighlightColor>()
            .map(|c| c.to_string())
            .map_err(|e| invalid(e.to_string())),
        "injection.objectives" | "injection.materials" | "injection.activities"
        | "injection.appendix" => parse_bool(value)
            .map(|b| b.to_string())
            .map_err(|_| invalid("Value must be 'true' or 'false'".to_string())),
        "model" | "api_key" if value.trim().is_empty() => {
            Err(invalid("Value must not be empty".to_string()))
        }
        _ => Ok(value.trim().to_string()),
    }
}

fn apply_value(config: &mut AppConfig, key: &str, value: String) -> Result<(), ConfigError> {
    let flag = || {
        parse_bool(&value).map_err(|_| ConfigError::ValidationError {
            key: key.to_string(),
            message: "Value must be 'true' or 'false'".to_string(),
        })
    };

    match key {
        "api_key" => config.api_key = Some(value.clone()),
        "model" => config.model = Some(value.clone()),
        "timeout" => config.timeout = Some(value.clone()),
        "subject" => config.subject = Some(value.clone()),
        "grade" => config.grade = Some(value.clone()),
        _ => {
            let injection = config.injection.get_or_insert_with(InjectionConfig::default);
            match key {
                "injection.objectives" => injection.objectives = Some(flag()?),
                "injection.materials" => injection.materials = Some(flag()?),
                "injection.activities" => injection.activities = Some(flag()?),
                "injection.appendix" => injection.appendix = Some(flag()?),
                "injection.color" => injection.color = Some(value.clone()),
                _ => unreachable!(), // Already validated
            }
        }
    }
    Ok(())
}

/// Stored value of a key, with the API key masked
fn display_value(config: &AppConfig, key: &str) -> Option<String> {
    let injection = config.injection.as_ref();
    match key {
        "api_key" => config.api_key.as_deref().map(mask_api_key),
        "model" => config.model.clone(),
        "timeout" => config.timeout.clone(),
        "subject" => config.subject.clone(),
        "grade" => config.grade.clone(),
        "injection.objectives" => injection.and_then(|i| i.objectives).map(|b| b.to_string()),
        "injection.materials" => injection.and_then(|i| i.materials).map(|b| b.to_string()),
        "injection.activities" => injection.and_then(|i| i.activities).map(|b| b.to_string()),
        "injection.appendix" => injection.and_then(|i| i.appendix).map(|b| b.to_string()),
        "injection.color" => injection.and_then(|i| i.color.clone()),
        _ => None,
    }
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(()),
    }
}

/// Mask API key for display (show first 4 and last 4 chars)
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}
