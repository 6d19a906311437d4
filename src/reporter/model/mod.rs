pub mod attachment;
pub mod status;
pub mod suite_record;
pub mod summary;
pub mod test_record;

pub use self::attachment::Attachment;
pub use self::status::{ErrorDetails, RunnerStatus, TestStatus};
pub use self::suite_record::SuiteRecord;
pub use self::summary::ReportSummary;
pub use self::test_record::{TestRecord, TestRecordBuilder};
