//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::document::InjectionOptions;
use crate::domain::duration::Duration;
use crate::domain::lesson::{Grade, Subject};

/// NLS Integrator - digital competency content for lesson plans
#[derive(Parser, Debug)]
#[command(name = "nls-integrator")]
#[command(version)]
#[command(about = "Integrate digital competency (NLS) content into .docx lesson plans using Google Gemini")]
#[command(long_about = None)]
pub struct Cli {
    /// Lesson plan files (.docx)
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Subject of the lesson plan
    #[arg(short = 's', long, value_name = "SUBJECT")]
    pub subject: Option<SubjectArg>,

    /// Grade level (6-12)
    #[arg(short = 'g', long, value_name = "GRADE")]
    pub grade: Option<GradeArg>,

    /// Write results here instead of next to each input
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Gemini model name
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Maximum wait for the AI response (e.g., 90s, 2m)
    #[arg(short = 't', long, value_name = "TIME")]
    pub timeout: Option<String>,

    /// Color of inserted text as hex RGB (e.g., FF0000)
    #[arg(long, value_name = "HEX")]
    pub color: Option<String>,

    /// Do not add to the objectives section
    #[arg(long)]
    pub no_objectives: bool,

    /// Do not add to the teaching materials section
    #[arg(long)]
    pub no_materials: bool,

    /// Do not insert content after activities
    #[arg(long)]
    pub no_activities: bool,

    /// Do not append the competency table
    #[arg(long)]
    pub no_appendix: bool,

    /// Use a saved AI response instead of calling the service
    #[arg(long, value_name = "FILE")]
    pub response_file: Option<PathBuf>,

    /// Save the raw AI response to a file
    #[arg(long, value_name = "FILE")]
    pub save_response: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Print the text that would be sent to the AI for a lesson plan
    Extract {
        /// Lesson plan file (.docx)
        input: PathBuf,
    },
    /// List subjects and grades
    Subjects,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Subject argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SubjectArg {
    Math,
    Physics,
    Chemistry,
    Biology,
    NaturalScience,
    Literature,
    English,
    Informatics,
    History,
    Geography,
    Civics,
}

impl From<SubjectArg> for Subject {
    fn from(arg: SubjectArg) -> Self {
        match arg {
            SubjectArg::Math => Subject::Math,
            SubjectArg::Physics => Subject::Physics,
            SubjectArg::Chemistry => Subject::Chemistry,
            SubjectArg::Biology => Subject::Biology,
            SubjectArg::NaturalScience => Subject::NaturalScience,
            SubjectArg::Literature => Subject::Literature,
            SubjectArg::English => Subject::English,
            SubjectArg::Informatics => Subject::Informatics,
            SubjectArg::History => Subject::History,
            SubjectArg::Geography => Subject::Geography,
            SubjectArg::Civics => Subject::Civics,
        }
    }
}

/// Grade argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum GradeArg {
    #[value(name = "6")]
    Six,
    #[value(name = "7")]
    Seven,
    #[value(name = "8")]
    Eight,
    #[value(name = "9")]
    Nine,
    #[value(name = "10")]
    Ten,
    #[value(name = "11")]
    Eleven,
    #[value(name = "12")]
    Twelve,
}

impl From<GradeArg> for Grade {
    fn from(arg: GradeArg) -> Self {
        match arg {
            GradeArg::Six => Grade::Six,
            GradeArg::Seven => Grade::Seven,
            GradeArg::Eight => Grade::Eight,
            GradeArg::Nine => Grade::Nine,
            GradeArg::Ten => Grade::Ten,
            GradeArg::Eleven => Grade::Eleven,
            GradeArg::Twelve => Grade::Twelve,
        }
    }
}

/// Parsed integrate options, after merging config sources
#[derive(Debug, Clone)]
pub struct IntegrateOptions {
    pub inputs: Vec<PathBuf>,
    pub subject: Option<Subject>,
    pub grade: Option<Grade>,
    pub injection: InjectionOptions,
    pub model: String,
    pub timeout: Duration,
    pub output_dir: Option<PathBuf>,
    pub response_file: Option<PathBuf>,
    pub save_response: Option<PathBuf>,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "model",
    "timeout",
    "subject",
    "grade",
    "injection.objectives",
    "injection.materials",
    "injection.activities",
    "injection.appendix",
    "injection.color",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
