use crate::reporter::error::ReportError;
use crate::reporter::model::{ReportSummary, SuiteRecord, TestRecord};
use chrono::{DateTime, Local};
use serde_derive::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    summary: &'a ReportSummary,
    suites: Vec<JsonSuite<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSuite<'a> {
    name: &'a str,
    started_at: &'a DateTime<Local>,
    duration_ms: u64,
    tests: &'a [TestRecord],
}

/// Machine-readable rendition of the same report, for CI consumers.
pub fn render(summary: &ReportSummary, suites: &[SuiteRecord]) -> Result<String, ReportError> {
    let report = JsonReport {
        summary,
        suites: suites
            .iter()
            .map(|suite| JsonSuite {
                name: suite.name(),
                started_at: suite.started_at(),
                duration_ms: suite.duration_ms(),
                tests: suite.tests(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
