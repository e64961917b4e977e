/// Step-by-step reporter
///
/// Ties the pieces together: every event updates the per-worker state and is
/// rendered to the sink right away, in arrival order. Output from concurrent
/// workers interleaves exactly as their events do.
use crate::aggregator::ResultAggregator;
use crate::failure_report;
use crate::render::LineRenderer;
use crate::stats::StatsSource;
use crate::style::Styler;
use crate::types::{Event, TestState};
use log::debug;
use std::io::{self, Write};

pub struct StepReporter<W: Write> {
    out: W,
    renderer: LineRenderer,
    results: ResultAggregator,
}

impl<W: Write> StepReporter<W> {
    pub fn new(out: W, styler: Box<dyn Styler>, ok_symbol: impl Into<String>) -> Self {
        Self { out, renderer: LineRenderer::new(styler, ok_symbol), results: ResultAggregator::new() }
    }

    /// Handle one event; `stats` must already include it.
    pub fn handle(&mut self, event: &Event, stats: &dyn StatsSource) -> io::Result<()> {
        debug!("Handling {} for worker {}", event.name(), event.cid());

        match event {
            Event::RunnerStart(start) => {
                self.results.on_runner_start(&start.cid, &start.specs);
                let lines = self.renderer.runner_start(&start.capabilities);
                self.write_lines(&lines)?;
            }
            Event::SuiteStart(suite) => {
                self.results.on_suite_start(&suite.cid);
                let lines = self.renderer.suite_start(suite);
                self.write_lines(&lines)?;
            }
            Event::SuiteEnd(suite) => {
                let lines = self.renderer.suite_end(
                    suite,
                    self.results.current_passing(&suite.cid),
                    self.results.counters(&suite.cid),
                );
                self.write_lines(&lines)?;
                self.results.on_suite_end(&suite.cid);
            }
            Event::Test(state, test) => {
                let failure_seq = match state {
                    TestState::Pending => {
                        self.results.on_test_pending(&test.cid);
                        None
                    }
                    TestState::Pass => {
                        self.results.on_test_pass(&test.cid);
                        None
                    }
                    TestState::Fail => {
                        self.results.on_test_fail(&test.cid);
                        Some(self.results.next_error_sequence(&test.cid))
                    }
                    TestState::Unknown(name) => {
                        debug!("Unknown test state '{}', not counted", name);
                        None
                    }
                };
                let lines = self.renderer.test_result(state, test, failure_seq);
                self.write_lines(&lines)?;
            }
            Event::RunnerEnd(end) => {
                let report = failure_report::build(&end.cid, &mut self.results, stats, self.renderer.styler());
                writeln!(self.out, "{}", report)?;
            }
        }

        self.out.flush()
    }

    /// Totals across every worker seen so far
    pub fn write_summary(&mut self) -> io::Result<()> {
        let totals = self.results.totals();
        writeln!(self.out, "\n=== Summary ===")?;
        writeln!(self.out, "Passing: {}", totals.passing)?;
        writeln!(self.out, "Failing: {}", totals.failing)?;
        writeln!(self.out, "Pending: {}", totals.pending)?;
        writeln!(self.out, "Total:   {}", totals.total())?;
        writeln!(self.out, "Workers: {}", self.results.worker_count())?;
        self.out.flush()
    }

    pub fn results(&self) -> &ResultAggregator {
        &self.results
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn write_lines(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "reporter_test.rs"]
mod reporter_test;
