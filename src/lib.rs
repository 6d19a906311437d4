//! Aggregates test lifecycle events into a self-contained HTML report.

extern crate chrono;
extern crate derivative;
extern crate serde_derive;

#[macro_use]
extern crate log;

#[macro_use]
extern crate derive_builder;

pub mod configuration;
pub mod event;
pub mod reporter;

pub use self::configuration::settings::ReporterSettings;
pub use self::event::stream::{replay, EventReader};
pub use self::event::LifecycleEvent;
pub use self::reporter::error::ReportError;
pub use self::reporter::lifecycle::{Lifecycle, TestOutcome};
pub use self::reporter::ReportAggregator;
