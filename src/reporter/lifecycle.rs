use super::error::ReportError;
use super::model::{Attachment, ErrorDetails, RunnerStatus};
use serde_derive::Deserialize;
use std::path::PathBuf;

/// Terminal result of a single test as reported by the runner.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestOutcome {
    #[serde(default)]
    pub status: RunnerStatus,
    #[serde(default, deserialize_with = "crate::configuration::deserialize::millis::deserialize")]
    pub duration: u64,
    #[serde(default)]
    pub error: Option<ErrorDetails>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl TestOutcome {
    pub fn new(status: RunnerStatus, duration: u64) -> Self {
        Self {
            status,
            duration,
            error: None,
            attachments: Vec::new(),
        }
    }

    pub fn with_error<M: Into<String>>(mut self, message: M) -> Self {
        self.error = Some(ErrorDetails::from(message.into()));
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }
}

/// Callbacks a test runner invokes, in order, while a run progresses.
///
/// Implementations are single writer: events must be delivered from one
/// execution context even when tests run on parallel workers.
pub trait Lifecycle {
    fn on_run_begin(&mut self);
    fn on_suite_begin(&mut self, title: &str);
    fn on_test_begin(&mut self, title: &str, file: Option<&str>);
    fn on_test_end(&mut self, outcome: TestOutcome);
    /// Finalizes the run and returns the location of the written report.
    fn on_run_end(&mut self) -> Result<PathBuf, ReportError>;
}
