use super::LifecycleEvent;
use crate::reporter::error::ReportError;
use crate::reporter::lifecycle::Lifecycle;
use std::io::{BufRead, Lines};
use std::path::PathBuf;

/// Reads one [`LifecycleEvent`] per line of a JSON-lines stream.
///
/// Blank lines are ignored. Lines that fail to parse are logged and skipped,
/// a read error ends the stream.
pub struct EventReader<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl<R: BufRead> EventReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for EventReader<R> {
    type Item = LifecycleEvent;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    error!("Failed to read event stream after line {}: {}", self.line_number, e);
                    return None;
                }
            };
            self.line_number += 1;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(&line) {
                Ok(event) => return Some(event),
                Err(e) => warn!("Skipping malformed event on line {}: {}", self.line_number, e),
            }
        }
    }
}

/// Drives `lifecycle` with every event in order and returns the path of the
/// written report. Results received after the last `runEnd`, or a stream
/// without any `runEnd`, are finalized here. A bare `runBegin` after `runEnd`
/// leaves the written report untouched.
pub fn replay<I, L>(events: I, lifecycle: &mut L) -> Result<PathBuf, ReportError>
where
    I: IntoIterator<Item = LifecycleEvent>,
    L: Lifecycle,
{
    let mut written = None;
    let mut unreported = false;
    for event in events {
        trace!("Dispatching {:?}", event);
        let carries_results = event != LifecycleEvent::RunBegin;
        match event.dispatch(lifecycle)? {
            Some(path) => {
                written = Some(path);
                unreported = false;
            }
            None => unreported |= carries_results,
        }
    }
    match written {
        Some(path) if !unreported => Ok(path),
        _ => {
            warn!("Event stream ended without runEnd, finalizing the report");
            lifecycle.on_run_end()
        }
    }
}
