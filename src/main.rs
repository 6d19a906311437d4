#[macro_use]
extern crate log;

use extent_report::configuration::command_line::{LogLevel, Opt};
use extent_report::{replay, EventReader, ReportAggregator, ReportError};
use log::LevelFilter;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::exit;
use structopt::StructOpt;

fn main() {
    let options = Opt::from_args();

    if let Err(e) = init_logging(
        options.logging.unwrap_or(LogLevel::Info).into(),
        &options.log_output_file,
    ) {
        eprintln!("Failed to initialize logging {}", e);
        exit(1);
    }

    let settings = match options.settings() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load reporter configuration {}", e);
            exit(1);
        }
    };
    debug!("Initiated configuration {:#?}", settings);

    let mut aggregator = ReportAggregator::new(settings);
    let result: Result<PathBuf, ReportError> = match &options.events {
        Some(path) => match File::open(path) {
            Ok(file) => replay(EventReader::new(BufReader::new(file)), &mut aggregator),
            Err(e) => {
                error!("Cannot open event stream '{}': {}", path.display(), e);
                exit(1);
            }
        },
        None => {
            let stdin = io::stdin();
            let locked = stdin.lock();
            replay(EventReader::new(locked), &mut aggregator)
        }
    };

    match result {
        Ok(path) => info!("Report available at {}", path.display()),
        Err(e) => {
            error!("{}", e);
            exit(1);
        }
    }
}

fn init_logging(level: LevelFilter, output: &Option<PathBuf>) -> Result<(), fern::InitError> {
    let mut dispatcher = fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}:{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record
                    .line()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "".to_owned()),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout());

    if let Some(log_file) = output {
        dispatcher = dispatcher.chain(fern::log_file(log_file)?)
    }
    dispatcher.apply()?;
    info!("Logging level {} enabled", level);
    Ok(())
}
