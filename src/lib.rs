//! NLS Integrator - digital competency content for lesson plans
//!
//! This crate reads a Vietnamese lesson plan (`.docx`), asks Google Gemini for
//! digital competency (Năng lực số, NLS) additions, and writes a copy of the
//! plan with those additions merged in, colored so they stand out.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects, the response parser, the session state machine and errors
//! - **Application**: The integration use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Gemini, `.docx` packages, XDG config)
//! - **CLI**: Command-line interface, argument parsing and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
