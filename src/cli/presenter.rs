//! CLI presenter for output formatting
//!
//! Status goes to stderr, results to stdout. The presenter is shared with
//! pipeline callbacks, so every method takes `&self`.

use std::sync::Mutex;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::document::InjectionReport;

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    /// Start a spinner with message
    pub fn start_spinner(&self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg} {elapsed:.dim}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.replace_spinner(Some(spinner));
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&self, message: &str) {
        if let Some(spinner) = self.replace_spinner(None) {
            spinner.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&self, message: &str) {
        if let Some(spinner) = self.replace_spinner(None) {
            spinner.finish_with_message(format!("{} {}", "✗".red(), message));
        }
    }

    pub fn is_spinner_active(&self) -> bool {
        self.spinner.lock().map(|s| s.is_some()).unwrap_or(false)
    }

    /// A pipeline step. Printed above the spinner when one is running.
    pub fn step(&self, message: &str) {
        let line = format!("{} {}", "›".dimmed(), message);
        match self.spinner.lock() {
            Ok(guard) => match guard.as_ref() {
                Some(spinner) => spinner.println(line),
                None => eprintln!("{}", line),
            },
            Err(_) => eprintln!("{}", line),
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Summarize what a run inserted; skipped anchors are warnings.
    pub fn report(&self, report: &InjectionReport) {
        self.info(&format_report(report));
        for anchor in &report.skipped_anchors {
            self.warn(&format!("Activity anchor not found in document: \"{}\"", anchor));
        }
    }

    fn replace_spinner(&self, next: Option<ProgressBar>) -> Option<ProgressBar> {
        match self.spinner.lock() {
            Ok(mut guard) => std::mem::replace(&mut *guard, next),
            Err(_) => None,
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// One-line summary of an injection report
pub fn format_report(report: &InjectionReport) -> String {
    let mut parts = Vec::new();
    if report.objectives_inserted {
        parts.push("objectives".to_string());
    }
    if report.materials_inserted {
        parts.push("materials".to_string());
    }
    if report.activities_inserted > 0 {
        parts.push(format!("{} activity insertion(s)", report.activities_inserted));
    }
    if report.appendix_appended {
        parts.push("appendix".to_string());
    }

    if parts.is_empty() {
        "Nothing was inserted".to_string()
    } else {
        format!("Inserted: {}", parts.join(", "))
    }
}
