pub mod cargo_env {
    pub const CARGO_PKG_NAME: &'static str = env!("CARGO_PKG_NAME");
}

pub mod common {
    pub const REPORT_FILE_NAME: &'static str = "index.html";
    pub const JSON_FILE_NAME: &'static str = "report.json";
    pub const DEFAULT_OUTPUT_FOLDER: &'static str = "extent-report";
    pub const DEFAULT_SUITE_NAME: &'static str = "Default Suite";
    pub const DEFAULT_TITLE: &'static str = "Extent HTML Report";
    pub const DEFAULT_SUBTITLE: &'static str = "Automation Test Results";
    pub const ENV_PREFIX: &'static str = "EXTENT";
}
