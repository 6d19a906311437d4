pub mod escape;
pub mod template;

use self::escape::escape_html;
use self::template::REPORT_TEMPLATE;
use crate::configuration::settings::ReporterSettings;
use crate::reporter::error::ReportError;
use crate::reporter::model::{ReportSummary, SuiteRecord, TestRecord};
use chrono::{DateTime, Local};
use derivative::*;
use liquid::model::Value;
use liquid::{Object, ParserBuilder, Template};

/// Renders the aggregated run into a self-contained HTML document.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct HtmlRenderer {
    #[derivative(Debug = "ignore")]
    template: Template,
    title: String,
    subtitle: String,
}

impl HtmlRenderer {
    pub fn new(settings: &ReporterSettings) -> Result<Self, ReportError> {
        let template = ParserBuilder::with_stdlib().build()?.parse(REPORT_TEMPLATE)?;
        Ok(Self {
            template,
            title: settings.title.clone(),
            subtitle: settings.subtitle.clone(),
        })
    }

    pub fn render(
        &self,
        summary: &ReportSummary,
        suites: &[SuiteRecord],
    ) -> Result<String, ReportError> {
        let globals = self.globals(summary, suites, Local::now());
        Ok(self.template.render(&globals)?)
    }

    fn globals(
        &self,
        summary: &ReportSummary,
        suites: &[SuiteRecord],
        generated_at: DateTime<Local>,
    ) -> Object {
        let rows = suites
            .iter()
            .flat_map(|suite| suite.tests().iter().map(move |test| row(suite, test)))
            .collect();

        let mut globals = Object::new();
        globals.insert("title".into(), text(&self.title));
        globals.insert("subtitle".into(), text(&self.subtitle));
        globals.insert("total".into(), count(summary.total_tests));
        globals.insert("passed".into(), count(summary.passed_tests));
        globals.insert("failed".into(), count(summary.failed_tests));
        globals.insert("skipped".into(), count(summary.skipped_tests));
        globals.insert("pass_rate".into(), Value::scalar(summary.pass_rate_label()));
        globals.insert(
            "duration".into(),
            Value::scalar(summary.duration_seconds_label()),
        );
        globals.insert(
            "generated_at".into(),
            Value::scalar(generated_at.format("%Y-%m-%d %H:%M:%S").to_string()),
        );
        globals.insert("rows".into(), Value::Array(rows));
        globals
    }
}

fn row(suite: &SuiteRecord, test: &TestRecord) -> Value {
    let status = test.status();
    let attachments = test
        .attachments()
        .iter()
        .filter(|attachment| attachment.has_path())
        .map(|attachment| {
            let mut link = Object::new();
            link.insert("name".into(), text(&attachment.name));
            link.insert("path".into(), text(&attachment.path));
            Value::Object(link)
        })
        .collect();

    let mut row = Object::new();
    row.insert("name".into(), text(test.name()));
    row.insert("suite".into(), text(suite.name()));
    row.insert("status".into(), Value::scalar(status.label()));
    row.insert("class".into(), Value::scalar(status.css_class()));
    row.insert("icon".into(), Value::scalar(status.icon()));
    row.insert("duration".into(), Value::scalar(test.duration_ms() as i64));
    row.insert(
        "error".into(),
        test.error_message().map(text).unwrap_or(Value::Nil),
    );
    row.insert("attachments".into(), Value::Array(attachments));
    Value::Object(row)
}

fn text(raw: &str) -> Value {
    Value::scalar(escape_html(raw).into_owned())
}

fn count(value: usize) -> Value {
    Value::scalar(value as i64)
}
