//! Run statistics store.
//!
//! The failure report reads run metadata (capabilities, session id, executed
//! suites, failures) through the [`StatsSource`] trait. [`RunStats`] is the
//! in-memory implementation, fed by the same event stream before the
//! reporter sees each event.

use crate::types::{Capabilities, Event, TestError, TestState, WorkerId};
use log::debug;
use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Suites executed for one set of spec files
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecStats {
    /// Suite titles in the order they started, without duplicates
    pub suites: Vec<String>,
}

/// What the store knows about one worker
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunnerStats {
    pub capabilities: Capabilities,
    pub session_id: String,
    /// Keyed by spec hash
    pub specs: HashMap<String, SpecStats>,
}

/// A failed test, possibly seen on several workers
#[derive(Debug, Clone, PartialEq)]
pub struct FailureRecord {
    /// Worker that reported the failure first
    pub cid: WorkerId,
    /// Every worker that hit this failure, first-seen order
    pub runners: Vec<WorkerId>,
    pub parent_title: Option<String>,
    pub title: String,
    pub err: TestError,
}

impl FailureRecord {
    /// Does this failure belong in `cid`'s report?
    pub fn belongs_to(&self, cid: &WorkerId) -> bool {
        self.cid == *cid || self.runners.contains(cid)
    }
}

/// Read-only view of run statistics
pub trait StatsSource {
    fn failures(&self) -> Vec<FailureRecord>;
    fn spec_hash(&self, cid: &WorkerId) -> Option<String>;
    fn runner_stats(&self, cid: &WorkerId) -> Option<&RunnerStats>;
}

/// In-memory statistics built from the event stream
#[derive(Debug, Default)]
pub struct RunStats {
    runners: HashMap<WorkerId, RunnerStats>,
    spec_hashes: HashMap<WorkerId, String>,
    // Titles of suites currently open, innermost last
    open_suites: HashMap<WorkerId, Vec<String>>,
    failures: Vec<FailureRecord>,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the store with one event.
    pub fn record(&mut self, event: &Event) {
        match event {
            Event::RunnerStart(start) => {
                let hash = spec_hash(&start.specs);
                let runner = RunnerStats {
                    capabilities: start.capabilities.clone(),
                    session_id: start.session_id.clone().unwrap_or_default(),
                    specs: HashMap::from([(hash.clone(), SpecStats::default())]),
                };
                self.runners.insert(start.cid.clone(), runner);
                self.spec_hashes.insert(start.cid.clone(), hash);
                self.open_suites.insert(start.cid.clone(), Vec::new());
            }
            Event::SuiteStart(suite) => {
                let hash = self.spec_hashes.entry(suite.cid.clone()).or_insert_with(|| spec_hash(&[])).clone();
                let spec = self.runners.entry(suite.cid.clone()).or_default().specs.entry(hash).or_default();
                if !spec.suites.contains(&suite.title) {
                    spec.suites.push(suite.title.clone());
                }
                self.open_suites.entry(suite.cid.clone()).or_default().push(suite.title.clone());
            }
            Event::SuiteEnd(suite) => {
                if let Some(open) = self.open_suites.get_mut(&suite.cid) {
                    open.pop();
                }
            }
            Event::Test(TestState::Fail, test) => {
                let parent_title = self.open_suites.get(&test.cid).and_then(|open| open.last()).cloned();
                let err = test.err.clone().unwrap_or_default();
                self.record_failure(&test.cid, parent_title, &test.title, err);
            }
            Event::Test(..) | Event::RunnerEnd(_) => {}
        }
    }

    fn record_failure(&mut self, cid: &WorkerId, parent_title: Option<String>, title: &str, err: TestError) {
        // The same failure on several workers is reported once; repeats on one worker each get an entry
        let existing = self.failures.iter_mut().find(|f| {
            f.parent_title == parent_title && f.title == title && f.err.message == err.message && !f.runners.contains(cid)
        });

        match existing {
            Some(failure) => {
                debug!("Failure '{}' also seen on worker {}", title, cid);
                failure.runners.push(cid.clone());
            }
            None => self.failures.push(FailureRecord {
                cid: cid.clone(),
                runners: vec![cid.clone()],
                parent_title,
                title: title.to_string(),
                err,
            }),
        }
    }
}

impl StatsSource for RunStats {
    fn failures(&self) -> Vec<FailureRecord> {
        self.failures.clone()
    }

    fn spec_hash(&self, cid: &WorkerId) -> Option<String> {
        self.spec_hashes.get(cid).cloned()
    }

    fn runner_stats(&self, cid: &WorkerId) -> Option<&RunnerStats> {
        self.runners.get(cid)
    }
}

/// Key for a worker's list of spec files
///
/// Deterministic within one process only; the key is never persisted.
pub fn spec_hash(specs: &[String]) -> String {
    let mut hasher = DefaultHasher::new();
    specs.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;
