pub mod error;
pub mod html;
pub mod json;
pub mod lifecycle;
pub mod model;
pub mod serialize;

use self::error::ReportError;
use self::html::HtmlRenderer;
use self::lifecycle::{Lifecycle, TestOutcome};
use self::model::{ReportSummary, SuiteRecord, TestRecord};
use crate::configuration::constants::common::{
    DEFAULT_SUITE_NAME, JSON_FILE_NAME, REPORT_FILE_NAME,
};
use crate::configuration::settings::ReporterSettings;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Accumulates lifecycle notifications of one run and writes the report
/// when the run ends.
#[derive(Debug)]
pub struct ReportAggregator {
    settings: ReporterSettings,
    suites: Vec<SuiteRecord>,
    current_suite: Option<usize>,
    current_test: Option<TestRecord>,
    started: Instant,
}

impl ReportAggregator {
    pub fn new(settings: ReporterSettings) -> Self {
        Self {
            settings,
            suites: Vec::new(),
            current_suite: None,
            current_test: None,
            started: Instant::now(),
        }
    }

    pub fn suites(&self) -> &[SuiteRecord] {
        &self.suites
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary::collect(&self.suites, self.started.elapsed())
    }

    fn open_suite(&mut self, name: &str) {
        self.suites.push(SuiteRecord::new(name, Local::now()));
        self.current_suite = Some(self.suites.len() - 1);
    }
}

impl Lifecycle for ReportAggregator {
    fn on_run_begin(&mut self) {
        info!("Extent reporter: starting test execution");
        self.suites.clear();
        self.current_suite = None;
        self.current_test = None;
        self.started = Instant::now();
    }

    fn on_suite_begin(&mut self, title: &str) {
        let name = if title.is_empty() {
            DEFAULT_SUITE_NAME
        } else {
            title
        };
        debug!("Suite '{}' started", name);
        self.open_suite(name);
    }

    fn on_test_begin(&mut self, title: &str, file: Option<&str>) {
        if self.current_suite.is_none() {
            let name = file.filter(|f| !f.is_empty()).unwrap_or(DEFAULT_SUITE_NAME);
            warn!(
                "Test '{}' started outside of any suite, grouping it under '{}'",
                title, name
            );
            self.open_suite(name);
        }
        if let Some(orphan) = self.current_test.take() {
            warn!(
                "Test '{}' started before '{}' finished, discarding the unfinished test",
                title,
                orphan.name()
            );
        }
        let record = TestRecord::builder()
            .name(title.to_owned())
            .started_at(Local::now())
            .build();
        match record {
            Ok(record) => {
                debug!("Test '{}' started", title);
                self.current_test = Some(record);
            }
            Err(e) => error!("Cannot track test '{}': {}", title, e),
        }
    }

    fn on_test_end(&mut self, outcome: TestOutcome) {
        let mut record = match self.current_test.take() {
            Some(record) => record,
            None => {
                warn!("Test end received without a started test, ignoring it");
                return;
            }
        };
        record.complete(outcome);
        match self.current_suite.and_then(|index| self.suites.get_mut(index)) {
            Some(suite) => {
                debug!(
                    "Test '{}' finished with {} in {} ms",
                    record.name(),
                    record.status().label(),
                    record.duration_ms()
                );
                suite.push(record);
            }
            None => warn!("No suite to hold test '{}', dropping it", record.name()),
        }
    }

    fn on_run_end(&mut self) -> Result<PathBuf, ReportError> {
        if let Some(orphan) = self.current_test.take() {
            warn!(
                "Test '{}' never finished, leaving it out of the report",
                orphan.name()
            );
        }
        let summary = self.summary();
        info!(
            "Run finished: {} tests, {} passed, {} failed, {} skipped",
            summary.total_tests, summary.passed_tests, summary.failed_tests, summary.skipped_tests
        );

        let folder = self.settings.output_folder.as_path();
        let html = HtmlRenderer::new(&self.settings)?.render(&summary, &self.suites)?;
        let path = write_artifact(folder, REPORT_FILE_NAME, html.as_bytes())?;
        if self.settings.json {
            let json = json::render(&summary, &self.suites)?;
            let json_path = write_artifact(folder, JSON_FILE_NAME, json.as_bytes())?;
            info!("JSON report generated: {}", json_path.display());
        }
        info!("Extent report generated: {}", path.display());
        Ok(path)
    }
}

fn write_artifact(folder: &Path, file_name: &str, contents: &[u8]) -> Result<PathBuf, ReportError> {
    fs::create_dir_all(folder).map_err(|source| ReportError::write(folder, source))?;
    let path = folder.join(file_name);
    fs::write(&path, contents).map_err(|source| ReportError::write(path.as_path(), source))?;
    Ok(path)
}
