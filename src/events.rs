/// Event stream decoding
///
/// The runner writes one JSON object per line, tagged with an `"event"` name
/// ("runner:start", "test:pass", ...). Lines are decoded and handed to the
/// callback one at a time, so output keeps the order of the input.
use crate::types::*;
use log::{debug, warn};
use std::io::{self, BufRead};

/// Counts from reading one event stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    pub handled: usize,
    pub skipped: usize,
}

/// Decode a single line.
///
/// Returns `Ok(None)` for blank lines and for event names the reporter does
/// not know about.
pub fn decode_event(line: &str) -> Result<Option<Event>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let value: serde_json::Value = serde_json::from_str(line).map_err(|e| format!("invalid JSON: {}", e))?;
    let name = value
        .get("event")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "missing \"event\" field".to_string())?
        .to_string();

    let event = match name.as_str() {
        "runner:start" => Event::RunnerStart(payload(value, &name)?),
        "suite:start" => Event::SuiteStart(payload(value, &name)?),
        "suite:end" => Event::SuiteEnd(payload(value, &name)?),
        "runner:end" => Event::RunnerEnd(payload(value, &name)?),
        other => match other.strip_prefix("test:") {
            Some(state) => Event::Test(TestState::from_event_suffix(state), payload(value, &name)?),
            None => {
                debug!("Ignoring event '{}'", other);
                return Ok(None);
            }
        },
    };
    Ok(Some(event))
}

fn payload<T: serde::de::DeserializeOwned>(value: serde_json::Value, name: &str) -> Result<T, String> {
    serde_json::from_value(value).map_err(|e| format!("malformed {} event: {}", name, e))
}

/// Read events line by line and pass each one to `on_event`.
///
/// Lines that cannot be decoded are skipped with a warning. Read errors and
/// errors returned by the callback stop the stream.
pub fn read_events<R, F>(reader: R, mut on_event: F) -> Result<StreamSummary, String>
where
    R: BufRead,
    F: FnMut(Event) -> io::Result<()>,
{
    let mut summary = StreamSummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("Failed to read event stream: {}", e))?;
        match decode_event(&line) {
            Ok(Some(event)) => {
                on_event(event).map_err(|e| format!("Failed to write report: {}", e))?;
                summary.handled += 1;
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Skipping line {}: {}", idx + 1, e);
                summary.skipped += 1;
            }
        }
    }

    debug!("Event stream done: {} handled, {} skipped", summary.handled, summary.skipped);
    Ok(summary)
}

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;
