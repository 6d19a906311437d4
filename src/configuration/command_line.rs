use crate::configuration::constants::cargo_env::CARGO_PKG_NAME;
use crate::configuration::settings::ReporterSettings;
use clap::arg_enum;
use config::ConfigError;
use log::LevelFilter;
use std::path::PathBuf;
use structopt::StructOpt;

arg_enum! {
    #[derive(Debug, Clone, Copy)]
    pub enum LogLevel {
        Off, Error, Warn, Info, Debug, Trace,
    }
}

#[derive(StructOpt, Debug)]
#[structopt(name = CARGO_PKG_NAME)]
pub struct Opt {
    /// JSON-lines file with lifecycle events, stdin is read when omitted
    #[structopt(parse(from_os_str))]
    pub events: Option<PathBuf>,

    /// Set a custom reporter configuration file. Supported: YAML, JSON, TOML, HJSON
    #[structopt(long, short = "c", parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// Directory where the report is written, overrides the configuration file
    #[structopt(long, short = "o", parse(from_os_str))]
    pub output_folder: Option<PathBuf>,

    /// Also write report.json next to the HTML report
    #[structopt(long)]
    pub json: bool,

    /// Sets a logging level
    #[structopt(case_insensitive = true, long, short = "L", possible_values = &LogLevel::variants(), env = "LOG_LEVEL")]
    pub logging: Option<LogLevel>,

    /// File to which application will write logs
    #[structopt(long, short = "O", env = "LOG_OUTPUT_FILE")]
    pub log_output_file: Option<PathBuf>,
}

impl Opt {
    pub fn settings(&self) -> Result<ReporterSettings, ConfigError> {
        let mut settings = ReporterSettings::load(self.config.clone())?;
        if let Some(output_folder) = &self.output_folder {
            settings = settings.with_output_folder(output_folder.clone());
        }
        if self.json {
            settings.json = true;
        }
        Ok(settings)
    }
}

impl Into<LevelFilter> for LogLevel {
    fn into(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
