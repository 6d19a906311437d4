use super::test_record::TestRecord;
use chrono::{DateTime, Local};

/// Tests grouped under one suite notification, in execution order.
#[derive(Debug, Clone)]
pub struct SuiteRecord {
    name: String,
    tests: Vec<TestRecord>,
    started_at: DateTime<Local>,
}

impl SuiteRecord {
    pub fn new<N: Into<String>>(name: N, started_at: DateTime<Local>) -> Self {
        Self {
            name: name.into(),
            tests: Vec::new(),
            started_at,
        }
    }

    pub(crate) fn push(&mut self, test: TestRecord) {
        self.tests.push(test);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tests(&self) -> &[TestRecord] {
        &self.tests
    }

    pub fn started_at(&self) -> &DateTime<Local> {
        &self.started_at
    }

    /// Sum of the durations of the suite's tests.
    pub fn duration_ms(&self) -> u64 {
        self.tests.iter().map(TestRecord::duration_ms).sum()
    }
}
