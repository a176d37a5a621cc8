//! Integration session state machine

use std::fmt;
use thiserror::Error;

use crate::domain::document::ResultArtifact;

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Processing,
    Completed,
}

impl SessionState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Processing => "processing",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while {current_state}")]
pub struct InvalidStateTransition {
    pub current_state: SessionState,
    pub action: String,
}

/// One user's run state: log lines, processing flag and the latest result.
///
/// State machine:
///   IDLE | COMPLETED -> PROCESSING (begin)
///   PROCESSING -> COMPLETED (complete)
///   PROCESSING -> IDLE (fail)
///
/// A result exists only in COMPLETED; a failed run never leaves one behind.
#[derive(Debug, Default)]
pub struct IntegrationSession {
    state: SessionState,
    logs: Vec<String>,
    result: Option<ResultArtifact>,
}

impl IntegrationSession {
    /// Create a new idle session
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Log lines of the current (or last) run
    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    /// Latest result, if the last run completed
    pub fn result(&self) -> Option<&ResultArtifact> {
        self.result.as_ref()
    }

    /// Start a run. Clears the previous log and result.
    pub fn begin(&mut self, first_line: impl Into<String>) -> Result<(), InvalidStateTransition> {
        if self.state == SessionState::Processing {
            return Err(self.invalid("start a new run"));
        }
        self.state = SessionState::Processing;
        self.logs = vec![first_line.into()];
        self.result = None;
        Ok(())
    }

    /// Append a log line to the current run
    pub fn log(&mut self, line: impl Into<String>) {
        self.logs.push(line.into());
    }

    /// Finish the run with its artifact
    pub fn complete(
        &mut self,
        artifact: ResultArtifact,
        last_line: impl Into<String>,
    ) -> Result<(), InvalidStateTransition> {
        if self.state != SessionState::Processing {
            return Err(self.invalid("complete a run"));
        }
        self.state = SessionState::Completed;
        self.logs.push(last_line.into());
        self.result = Some(artifact);
        Ok(())
    }

    /// Abort the run; no result is kept
    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), InvalidStateTransition> {
        if self.state != SessionState::Processing {
            return Err(self.invalid("fail a run"));
        }
        self.state = SessionState::Idle;
        self.logs.push(reason.into());
        self.result = None;
        Ok(())
    }

    /// Hand the result to the caller (the "download"), returning to idle
    pub fn take_result(&mut self) -> Option<ResultArtifact> {
        let result = self.result.take();
        if result.is_some() {
            self.state = SessionState::Idle;
        }
        result
    }

    fn invalid(&self, action: &str) -> InvalidStateTransition {
        InvalidStateTransition {
            current_state: self.state,
            action: action.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact() -> ResultArtifact {
        ResultArtifact::for_source("a.docx", vec![1])
    }

    #[test]
    fn new_session_is_idle() {
        let session = IntegrationSession::new();
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.logs().is_empty());
        assert!(session.result().is_none());
    }

    #[test]
    fn begin_while_processing_fails() {
        let mut session = IntegrationSession::new();
        session.begin("start").unwrap();

        let err = session.begin("again").unwrap_err();
        assert_eq!(err.current_state, SessionState::Processing);
        assert!(err.to_string().contains("start a new run"));
    }

    #[test]
    fn complete_stores_result() {
        let mut session = IntegrationSession::new();
        session.begin("start").unwrap();
        session.log("working");
        session.complete(artifact(), "done").unwrap();

        assert_eq!(session.state(), SessionState::Completed);
        assert_eq!(session.logs(), &["start", "working", "done"]);
        assert_eq!(session.result().unwrap().file_name(), "NLS_a.docx");
    }

    #[test]
    fn fail_returns_to_idle_without_result() {
        let mut session = IntegrationSession::new();
        session.begin("start").unwrap();
        session.fail("boom").unwrap();

        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.result().is_none());
        assert_eq!(session.logs().last().unwrap(), "boom");
    }

    #[test]
    fn complete_from_idle_fails() {
        let mut session = IntegrationSession::new();
        let err = session.complete(artifact(), "done").unwrap_err();
        assert_eq!(err.current_state, SessionState::Idle);
    }

    #[test]
    fn new_run_clears_previous_result() {
        let mut session = IntegrationSession::new();
        session.begin("one").unwrap();
        session.complete(artifact(), "done").unwrap();

        session.begin("two").unwrap();
        assert!(session.result().is_none());
        assert_eq!(session.logs(), &["two"]);
    }

    #[test]
    fn take_result_returns_to_idle() {
        let mut session = IntegrationSession::new();
        session.begin("one").unwrap();
        session.complete(artifact(), "done").unwrap();

        assert!(session.take_result().is_some());
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.take_result().is_none());
    }

    #[test]
    fn state_display() {
        assert_eq!(SessionState::Idle.to_string(), "idle");
        assert_eq!(SessionState::Processing.to_string(), "processing");
        assert_eq!(SessionState::Completed.to_string(), "completed");
    }
}
