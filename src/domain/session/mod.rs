//! Session domain module

mod session;

pub use session::{IntegrationSession, InvalidStateTransition, SessionState};
