use super::{status::TestStatus, suite_record::SuiteRecord};
use serde_derive::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_tests: usize,
    pub passed_tests: usize,
    pub failed_tests: usize,
    pub skipped_tests: usize,
    pub pass_rate_percent: f64,
    #[serde(rename = "totalDurationMs", with = "crate::reporter::serialize::millis")]
    pub total_duration: Duration,
}

impl ReportSummary {
    /// Tallies every test of every suite in one pass.
    pub fn collect(suites: &[SuiteRecord], total_duration: Duration) -> Self {
        let mut summary = Self {
            total_tests: 0,
            passed_tests: 0,
            failed_tests: 0,
            skipped_tests: 0,
            pass_rate_percent: 0.0,
            total_duration,
        };
        for test in suites.iter().flat_map(|suite| suite.tests()) {
            summary.total_tests += 1;
            match test.status() {
                TestStatus::Pass => summary.passed_tests += 1,
                TestStatus::Fail => summary.failed_tests += 1,
                TestStatus::Skip => summary.skipped_tests += 1,
                TestStatus::Error => {}
            }
        }
        summary.pass_rate_percent = pass_rate(summary.passed_tests, summary.total_tests);
        summary
    }

    pub fn pass_rate_label(&self) -> String {
        format!("{:.2}", self.pass_rate_percent)
    }

    pub fn duration_seconds_label(&self) -> String {
        format!("{:.2}", self.total_duration.as_millis() as f64 / 1000.0)
    }
}

fn pass_rate(passed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = passed as f64 / total as f64 * 100.0;
    (percent * 100.0).round() / 100.0
}
