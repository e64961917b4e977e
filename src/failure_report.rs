//! End-of-worker failure report.
//!
//! When a worker finishes, its failures are collected from the stats store
//! and printed as one block: session, specs, environment, then every failure
//! with message and stack. Failures are numbered afresh for the report.

use crate::aggregator::ResultAggregator;
use crate::combo;
use crate::render::NO_STACK;
use crate::stats::StatsSource;
use crate::style::{Role, Styler};
use crate::types::WorkerId;
use log::debug;

/// Separator opening every report
pub const SEPARATOR: &str = "------------------------------------------------------------------";

/// Build the report for `cid`.
///
/// Returns an empty string when the worker executed no suites.
pub fn build(cid: &WorkerId, results: &mut ResultAggregator, stats: &dyn StatsSource, styler: &dyn Styler) -> String {
    results.reset_error_sequence(cid);

    let Some(runner) = stats.runner_stats(cid) else {
        debug!("No stats for worker {}, skipping failure report", cid);
        return String::new();
    };
    let executed_suites = stats
        .spec_hash(cid)
        .and_then(|hash| runner.specs.get(&hash))
        .map(|spec| spec.suites.len())
        .unwrap_or(0);
    if executed_suites == 0 {
        debug!("Worker {} executed no suites, skipping failure report", cid);
        return String::new();
    }

    let mut output = String::new();
    output.push_str(SEPARATOR);
    output.push('\n');
    output.push_str(&format!(" Session ID: {}\n", runner.session_id));
    output.push_str(&format!(" Feature: {}\n", results.specs(cid).join(",")));
    output.push_str(&format!(" Running: {}\n", combo::describe(&runner.capabilities, true)));
    output.push('\n');

    for failure in stats.failures().iter().filter(|f| f.belongs_to(cid)) {
        let seq = results.next_error_sequence(cid);
        let title = match &failure.parent_title {
            Some(parent) => format!("{} {}", parent, failure.title),
            None => failure.title.clone(),
        };

        output.push('\n');
        output.push_str(&format!(" {}\n", styler.paint(Role::ErrorTitle, &format!("{}) {}:", seq, title))));
        output.push_str(&format!(" {}\n", styler.paint(Role::ErrorMessage, &failure.err.message)));
        match failure.err.stack.as_deref().filter(|s| !s.is_empty()) {
            Some(stack) => {
                for line in stack.split('\n') {
                    output.push_str(&format!(" {}\n", styler.paint(Role::ErrorStack, line)));
                }
            }
            None => output.push_str(&format!(" {}\n", styler.paint(Role::ErrorStack, NO_STACK))),
        }
    }

    output.push('\n');
    output
}

#[cfg(test)]
#[path = "failure_report_test.rs"]
mod failure_report_test;
