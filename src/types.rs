/// Core data structures for the reporter
///
/// This module defines the lifecycle events emitted by the test runner and
/// the per-worker counters derived from them. Field names on the wire follow
/// the runner's camelCase JSON.
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Correlation id of a test worker ("0-0", "1-2", ...)
///
/// Stable for the worker's lifetime; every per-worker map is keyed by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct WorkerId(String);

impl WorkerId {
    pub fn new(id: impl Into<String>) -> Self {
        WorkerId(id.into())
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Capabilities a worker runs against (browser or device)
///
/// Every field is optional; missing fields render as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Capabilities {
    pub device_name: Option<String>,
    pub browser_name: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub version: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub platform_version: Option<String>,
    pub platform: Option<String>,
    pub platform_name: Option<String>,
    pub app: Option<String>,
}

/// Error attached to a failing test
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TestError {
    pub message: String,
    pub stack: Option<String>,
}

/// `runner:start` payload, sent once per worker
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RunnerStart {
    pub cid: WorkerId,
    #[serde(default)]
    pub capabilities: Capabilities,
    #[serde(default)]
    pub specs: Vec<String>,
    #[serde(default, rename = "sessionID")]
    pub session_id: Option<String>,
}

/// `runner:end` payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RunnerEnd {
    pub cid: WorkerId,
}

/// `suite:start` / `suite:end` payload
///
/// A suite without a parent (or with an empty one) is a feature; a nested one is a scenario.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SuiteEvent {
    pub cid: WorkerId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub file: String,
    #[serde(default, deserialize_with = "millis")]
    pub duration: Option<u64>,
}

impl SuiteEvent {
    pub fn is_scenario(&self) -> bool {
        self.parent.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// `test:*` payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestEvent {
    pub cid: WorkerId,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "millis")]
    pub duration: Option<u64>,
    #[serde(default)]
    pub err: Option<TestError>,
}

/// Outcome carried by a `test:*` event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestState {
    Pending,
    Pass,
    Fail,
    /// Any other `test:<state>`; rendered with a placeholder, never counted
    Unknown(String),
}

impl TestState {
    pub fn from_event_suffix(suffix: &str) -> Self {
        match suffix {
            "pending" => TestState::Pending,
            "pass" => TestState::Pass,
            "fail" => TestState::Fail,
            other => TestState::Unknown(other.to_string()),
        }
    }
}

/// A single lifecycle event from the runner
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    RunnerStart(RunnerStart),
    SuiteStart(SuiteEvent),
    SuiteEnd(SuiteEvent),
    Test(TestState, TestEvent),
    RunnerEnd(RunnerEnd),
}

impl Event {
    pub fn cid(&self) -> &WorkerId {
        match self {
            Event::RunnerStart(e) => &e.cid,
            Event::SuiteStart(e) | Event::SuiteEnd(e) => &e.cid,
            Event::Test(_, e) => &e.cid,
            Event::RunnerEnd(e) => &e.cid,
        }
    }

    /// Wire name of the event, e.g. "suite:start"
    pub fn name(&self) -> String {
        match self {
            Event::RunnerStart(_) => "runner:start".to_string(),
            Event::SuiteStart(_) => "suite:start".to_string(),
            Event::SuiteEnd(_) => "suite:end".to_string(),
            Event::Test(TestState::Pending, _) => "test:pending".to_string(),
            Event::Test(TestState::Pass, _) => "test:pass".to_string(),
            Event::Test(TestState::Fail, _) => "test:fail".to_string(),
            Event::Test(TestState::Unknown(state), _) => format!("test:{}", state),
            Event::RunnerEnd(_) => "runner:end".to_string(),
        }
    }
}

/// Per-worker test counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ResultCounters {
    pub passing: usize,
    pub pending: usize,
    pub failing: usize,
}

impl ResultCounters {
    pub fn total(&self) -> usize {
        self.passing + self.pending + self.failing
    }
}

impl std::ops::AddAssign for ResultCounters {
    fn add_assign(&mut self, other: Self) {
        self.passing += other.passing;
        self.pending += other.pending;
        self.failing += other.failing;
    }
}

// Runners report versions both as "91" and 91
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

// Durations may arrive as fractional milliseconds; the fraction is dropped
fn millis<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.filter(|ms| ms.is_finite() && *ms >= 0.0).map(|ms| ms as u64))
}
