pub mod stream;

use crate::reporter::error::ReportError;
use crate::reporter::lifecycle::{Lifecycle, TestOutcome};
use serde_derive::Deserialize;
use std::path::PathBuf;

/// One lifecycle notification emitted by the test runner, tagged by `event`.
///
/// ```json
/// {"event": "suiteBegin", "title": "Login Tests"}
/// {"event": "testEnd", "status": "failed", "duration": 800, "error": {"message": "Timeout"}}
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum LifecycleEvent {
    RunBegin,
    SuiteBegin {
        #[serde(default)]
        title: String,
    },
    TestBegin {
        #[serde(default)]
        title: String,
        #[serde(default)]
        file: Option<String>,
    },
    TestEnd(TestOutcome),
    RunEnd,
}

impl LifecycleEvent {
    /// Forwards the event to `lifecycle`. Yields the report path for `RunEnd`.
    pub fn dispatch<L: Lifecycle>(self, lifecycle: &mut L) -> Result<Option<PathBuf>, ReportError> {
        match self {
            LifecycleEvent::RunBegin => lifecycle.on_run_begin(),
            LifecycleEvent::SuiteBegin { title } => lifecycle.on_suite_begin(&title),
            LifecycleEvent::TestBegin { title, file } => {
                lifecycle.on_test_begin(&title, file.as_deref())
            }
            LifecycleEvent::TestEnd(outcome) => lifecycle.on_test_end(outcome),
            LifecycleEvent::RunEnd => return lifecycle.on_run_end().map(Some),
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::LifecycleEvent;
    use crate::reporter::model::{Attachment, RunnerStatus};

    fn parse(json: &str) -> LifecycleEvent {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_unit_events() {
        assert_eq!(parse(r#"{"event": "runBegin"}"#), LifecycleEvent::RunBegin);
        assert_eq!(parse(r#"{"event": "runEnd"}"#), LifecycleEvent::RunEnd);
    }

    #[test]
    fn test_parse_suite_and_test_begin() {
        assert_eq!(
            parse(r#"{"event": "suiteBegin", "title": "Login Tests"}"#),
            LifecycleEvent::SuiteBegin {
                title: "Login Tests".to_owned()
            }
        );
        assert_eq!(
            parse(r#"{"event": "testBegin", "title": "valid login", "file": "tests/login.spec.ts"}"#),
            LifecycleEvent::TestBegin {
                title: "valid login".to_owned(),
                file: Some("tests/login.spec.ts".to_owned()),
            }
        );
        assert_eq!(
            parse(r#"{"event": "suiteBegin"}"#),
            LifecycleEvent::SuiteBegin {
                title: String::new()
            }
        );
    }

    #[test]
    fn test_parse_test_end_with_error_and_attachments() {
        let event = parse(
            r#"{"event": "testEnd", "status": "failed", "duration": 800,
                "error": {"message": "Timeout", "stack": "at login.spec.ts:12"},
                "attachments": [
                    {"name": "screenshot", "path": "test-results/shot.png", "contentType": "image/png"},
                    {"name": "stdout", "body": "aGVsbG8="}
                ]}"#,
        );

        match event {
            LifecycleEvent::TestEnd(outcome) => {
                assert_eq!(outcome.status, RunnerStatus::Failed);
                assert_eq!(outcome.duration, 800);
                assert_eq!(
                    outcome.error.and_then(|e| e.message),
                    Some("Timeout".to_owned())
                );
                assert_eq!(outcome.attachments.len(), 2);
                assert_eq!(
                    outcome.attachments[0].content_type.as_deref(),
                    Some("image/png")
                );
                assert_eq!(outcome.attachments[1], Attachment::new("stdout", ""));
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_parse_test_end_with_unknown_status() {
        match parse(r#"{"event": "testEnd", "status": "flaky"}"#) {
            LifecycleEvent::TestEnd(outcome) => {
                assert_eq!(outcome.status, RunnerStatus::Unknown);
                assert_eq!(outcome.duration, 0);
                assert!(outcome.attachments.is_empty());
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_unknown_event_is_rejected() {
        assert!(serde_json::from_str::<LifecycleEvent>(r#"{"event": "stepBegin"}"#).is_err());
    }
}
