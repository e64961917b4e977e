/// Per-worker result state
///
/// All mutable reporter state lives here, partitioned by worker id so that
/// interleaved events from concurrent workers never touch each other's
/// counters. Entries are inserted on first use and never removed.
use crate::types::{ResultCounters, WorkerId};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct ResultAggregator {
    counters: HashMap<WorkerId, ResultCounters>,
    specs: HashMap<WorkerId, Vec<String>>,
    // Passing tests in the currently open suite
    current_passing: HashMap<WorkerId, usize>,
    // Numbering of failures as they are printed
    error_sequence: HashMap<WorkerId, usize>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a worker: zeroed counters and its spec files.
    pub fn on_runner_start(&mut self, cid: &WorkerId, specs: &[String]) {
        self.counters.insert(cid.clone(), ResultCounters::default());
        self.specs.insert(cid.clone(), specs.to_vec());
        self.current_passing.insert(cid.clone(), 0);
    }

    pub fn on_suite_start(&mut self, cid: &WorkerId) {
        self.current_passing.insert(cid.clone(), 0);
    }

    pub fn on_suite_end(&mut self, cid: &WorkerId) {
        self.current_passing.insert(cid.clone(), 0);
    }

    pub fn on_test_pending(&mut self, cid: &WorkerId) {
        self.counters.entry(cid.clone()).or_default().pending += 1;
    }

    pub fn on_test_pass(&mut self, cid: &WorkerId) {
        self.counters.entry(cid.clone()).or_default().passing += 1;
        *self.current_passing.entry(cid.clone()).or_default() += 1;
    }

    pub fn on_test_fail(&mut self, cid: &WorkerId) {
        self.counters.entry(cid.clone()).or_default().failing += 1;
    }

    /// Advance and return the worker's failure number (1, 2, 3, ...).
    pub fn next_error_sequence(&mut self, cid: &WorkerId) -> usize {
        let seq = self.error_sequence.entry(cid.clone()).or_default();
        *seq += 1;
        *seq
    }

    pub fn reset_error_sequence(&mut self, cid: &WorkerId) {
        self.error_sequence.insert(cid.clone(), 0);
    }

    /// Counters for a worker; zero for workers never seen.
    pub fn counters(&self, cid: &WorkerId) -> ResultCounters {
        self.counters.get(cid).copied().unwrap_or_default()
    }

    pub fn current_passing(&self, cid: &WorkerId) -> usize {
        self.current_passing.get(cid).copied().unwrap_or(0)
    }

    pub fn specs(&self, cid: &WorkerId) -> &[String] {
        self.specs.get(cid).map(|s| s.as_slice()).unwrap_or(&[])
    }

    /// Sum of all workers' counters
    pub fn totals(&self) -> ResultCounters {
        let mut totals = ResultCounters::default();
        for counters in self.counters.values() {
            totals += *counters;
        }
        totals
    }

    pub fn worker_count(&self) -> usize {
        self.counters.len()
    }
}

#[cfg(test)]
#[path = "aggregator_test.rs"]
mod aggregator_test;
