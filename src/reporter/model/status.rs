use serde_derive::{Deserialize, Serialize};

/// Final classification of a test as it appears in the report.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestStatus {
    Pass,
    Fail,
    Skip,
    Error,
}

impl Default for TestStatus {
    fn default() -> Self {
        TestStatus::Pass
    }
}

impl TestStatus {
    pub fn label(self) -> &'static str {
        match self {
            TestStatus::Pass => "PASS",
            TestStatus::Fail => "FAIL",
            TestStatus::Skip => "SKIP",
            TestStatus::Error => "ERROR",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            TestStatus::Pass => "pass",
            TestStatus::Fail => "fail",
            TestStatus::Skip => "skip",
            TestStatus::Error => "error",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TestStatus::Pass => "\u{2713}",
            TestStatus::Fail => "\u{2717}",
            TestStatus::Skip => "\u{2298}",
            TestStatus::Error => "!",
        }
    }
}

/// Outcome vocabulary of the test runner.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RunnerStatus {
    Passed,
    Failed,
    Skipped,
    TimedOut,
    Interrupted,
    #[serde(other)]
    Unknown,
}

impl Default for RunnerStatus {
    fn default() -> Self {
        RunnerStatus::Unknown
    }
}

impl From<RunnerStatus> for TestStatus {
    fn from(status: RunnerStatus) -> Self {
        match status {
            RunnerStatus::Passed => TestStatus::Pass,
            RunnerStatus::Failed => TestStatus::Fail,
            RunnerStatus::Skipped => TestStatus::Skip,
            // Timeouts, interruptions and unrecognised statuses are recorded as passes.
            RunnerStatus::TimedOut | RunnerStatus::Interrupted | RunnerStatus::Unknown => {
                TestStatus::Pass
            }
        }
    }
}

/// Error reported by the runner alongside a terminal status.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub stack: Option<String>,
}

impl From<String> for ErrorDetails {
    fn from(message: String) -> Self {
        Self {
            message: Some(message),
            stack: None,
        }
    }
}
