/// Line rendering for live progress output
///
/// Each function turns one event into the lines to print, already indented
/// and styled. State (counters, failure numbers) is passed in by the caller;
/// nothing here mutates it.
use crate::combo;
use crate::duration::{self, DurationStyle, Urgency};
use crate::style::{Role, Styler};
use crate::types::{Capabilities, ResultCounters, SuiteEvent, TestEvent, TestState};

/// Indent levels used by the step-by-step layout
pub const FEATURE_LEVEL: usize = 0;
pub const SCENARIO_LEVEL: usize = 1;
pub const TEST_LEVEL: usize = 3;

/// Shown when a failure carries no stack trace
pub const NO_STACK: &str = "no stack available";

/// Two spaces of base indent plus two per level
pub fn indent(level: usize) -> String {
    "  ".repeat(level + 1)
}

pub struct LineRenderer {
    styler: Box<dyn Styler>,
    ok_symbol: String,
}

impl LineRenderer {
    pub fn new(styler: Box<dyn Styler>, ok_symbol: impl Into<String>) -> Self {
        Self { styler, ok_symbol: ok_symbol.into() }
    }

    pub fn styler(&self) -> &dyn Styler {
        self.styler.as_ref()
    }

    fn paint(&self, role: Role, text: &str) -> String {
        self.styler.paint(role, text)
    }

    pub fn runner_start(&self, caps: &Capabilities) -> Vec<String> {
        vec![self.paint(Role::Bold, &format!("Running: {}", combo::describe(caps, true)))]
    }

    pub fn suite_start(&self, suite: &SuiteEvent) -> Vec<String> {
        let header = if suite.is_scenario() {
            format!("{}Scenario: {} ({})", indent(SCENARIO_LEVEL), suite.title, suite.file)
        } else {
            format!("{}Feature: {} ({})", indent(FEATURE_LEVEL), suite.title, suite.file)
        };
        vec![String::new(), self.paint(Role::Bold, &header)]
    }

    /// Closing line of a suite.
    ///
    /// Scenarios report how many tests passed inside them; features report
    /// the worker's cumulative counters.
    pub fn suite_end(&self, suite: &SuiteEvent, current_passing: usize, counters: ResultCounters) -> Vec<String> {
        let took = duration::format_duration(suite.duration.unwrap_or(0), DurationStyle::Long);
        let line = if suite.is_scenario() {
            format!("{}Scenario duration: {}. Tests: {}", indent(SCENARIO_LEVEL), took, current_passing)
        } else {
            format!(
                "{}Feature duration: {}. Passing: {}, failing: {}, pending: {}",
                indent(FEATURE_LEVEL),
                took,
                counters.passing,
                counters.failing,
                counters.pending
            )
        };
        vec![line]
    }

    /// Symbol in front of a test title
    pub fn symbol(&self, state: &TestState, failure_seq: Option<usize>) -> String {
        match state {
            TestState::Pass => self.ok_symbol.clone(),
            TestState::Pending => "-".to_string(),
            TestState::Fail => match failure_seq {
                Some(n) => format!("{})", n),
                None => "?".to_string(),
            },
            TestState::Unknown(_) => "?".to_string(),
        }
    }

    /// Lines for a finished test; `failure_seq` numbers failed tests.
    pub fn test_result(&self, state: &TestState, test: &TestEvent, failure_seq: Option<usize>) -> Vec<String> {
        let symbol = self.symbol(state, failure_seq);
        let prefix = indent(TEST_LEVEL);

        match state {
            TestState::Pending => {
                vec![format!("{}{} {}", prefix, self.paint(Role::Pending, &symbol), self.paint(Role::Pending, &test.title))]
            }
            TestState::Pass => {
                vec![format!("{}{} {}{}", prefix, self.paint(Role::Pass, &symbol), test.title, self.duration_token(test))]
            }
            TestState::Fail => {
                let mut lines =
                    vec![format!("{}{} {}{}", prefix, self.paint(Role::Fail, &symbol), test.title, self.duration_token(test))];
                let (message, stack) = match &test.err {
                    Some(err) => (err.message.as_str(), err.stack.as_deref().filter(|s| !s.is_empty()).unwrap_or(NO_STACK)),
                    None => ("", NO_STACK),
                };
                lines.push(self.paint(Role::FailMessage, message));
                lines.push("Callstack:".to_string());
                lines.extend(stack.lines().map(|l| self.paint(Role::Stack, l)));
                lines.push(String::new());
                lines
            }
            TestState::Unknown(_) => vec![format!("{}{} {}{}", prefix, symbol, test.title, self.duration_token(test))],
        }
    }

    // " (342ms)" colored by urgency, or nothing when the runner sent no duration
    fn duration_token(&self, test: &TestEvent) -> String {
        match test.duration {
            Some(ms) => {
                let role = match duration::urgency(ms) {
                    Urgency::Low => Role::UrgencyLow,
                    Urgency::Medium => Role::UrgencyMedium,
                    Urgency::High => Role::UrgencyHigh,
                };
                format!(" ({})", self.paint(role, &duration::format_duration(ms, DurationStyle::Short)))
            }
            None => String::new(),
        }
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;
