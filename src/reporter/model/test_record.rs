use super::{attachment::Attachment, status::TestStatus};
use crate::reporter::lifecycle::TestOutcome;
use chrono::{DateTime, Local};
use serde_derive::Serialize;

#[derive(Debug, Serialize, Clone, Builder)]
#[serde(rename_all = "camelCase")]
pub struct TestRecord {
    name: String,
    #[builder(default)]
    status: TestStatus,
    #[builder(default)]
    duration_ms: u64,
    started_at: DateTime<Local>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default = "None")]
    error_message: Option<String>,
    #[builder(default = "Vec::new()")]
    attachments: Vec<Attachment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default = "Vec::new()")]
    logs: Vec<String>,
}

impl TestRecord {
    pub fn builder() -> TestRecordBuilder {
        TestRecordBuilder::default()
    }

    /// Applies the terminal outcome. Called once, right before the record is
    /// handed to its suite.
    pub(crate) fn complete(&mut self, outcome: TestOutcome) {
        self.status = TestStatus::from(outcome.status);
        self.duration_ms = outcome.duration;
        if self.status == TestStatus::Fail {
            let message = outcome
                .error
                .and_then(|error| error.message)
                .filter(|message| !message.is_empty());
            if let Some(message) = message {
                self.logs.push(format!("Error: {}", message));
                self.error_message = Some(message);
            }
        }
        self.attachments.extend(outcome.attachments);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> TestStatus {
        self.status
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn started_at(&self) -> &DateTime<Local> {
        &self.started_at
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    pub fn logs(&self) -> &[String] {
        &self.logs
    }
}

#[cfg(test)]
mod tests {
    use super::TestRecord;
    use crate::reporter::lifecycle::TestOutcome;
    use crate::reporter::model::{Attachment, ErrorDetails, RunnerStatus, TestStatus};
    use chrono::Local;

    fn started(name: &str) -> TestRecord {
        TestRecord::builder()
            .name(name.to_owned())
            .started_at(Local::now())
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_record_is_provisionally_passing() {
        let record = started("valid login");

        assert_eq!(record.status(), TestStatus::Pass);
        assert_eq!(record.duration_ms(), 0);
        assert!(record.error_message().is_none());
        assert!(record.attachments().is_empty());
    }

    #[test]
    fn test_failed_outcome_keeps_error_message_and_log() {
        let mut record = started("invalid login");
        let outcome = TestOutcome {
            status: RunnerStatus::Failed,
            duration: 800,
            error: Some(ErrorDetails::from("Timeout".to_owned())),
            attachments: vec![Attachment::new("screenshot", "shots/invalid.png")],
        };

        record.complete(outcome);

        assert_eq!(record.status(), TestStatus::Fail);
        assert_eq!(record.duration_ms(), 800);
        assert_eq!(record.error_message(), Some("Timeout"));
        assert_eq!(record.logs(), &["Error: Timeout".to_owned()]);
        assert_eq!(record.attachments().len(), 1);
    }

    #[test]
    fn test_empty_error_message_is_not_recorded() {
        let mut record = started("failed silently");
        let outcome = TestOutcome {
            status: RunnerStatus::Failed,
            duration: 3,
            error: Some(ErrorDetails::from(String::new())),
            attachments: vec![],
        };

        record.complete(outcome);

        assert_eq!(record.status(), TestStatus::Fail);
        assert!(record.error_message().is_none());
        assert!(record.logs().is_empty());
    }

    #[test]
    fn test_error_message_ignored_for_non_failed_outcome() {
        let mut record = started("skipped with reason");
        let outcome = TestOutcome {
            status: RunnerStatus::Skipped,
            duration: 0,
            error: Some(ErrorDetails::from("not relevant".to_owned())),
            attachments: vec![],
        };

        record.complete(outcome);

        assert_eq!(record.status(), TestStatus::Skip);
        assert!(record.error_message().is_none());
    }

    #[test]
    fn test_builder_requires_name() {
        let result = TestRecord::builder().started_at(Local::now()).build();

        assert!(result.is_err());
    }
}
