//! Duration formatting for console output.
//!
//! Suite durations use a long, rounded "1m30s" form; test durations use raw
//! milliseconds with a color bucket picked by how slow the test was.

/// Tests at or above this many milliseconds are slow
pub const SLOW_THRESHOLD_MS: u64 = 5000;
/// Tests at or above this many milliseconds are worth a second look
pub const MEDIUM_THRESHOLD_MS: u64 = 1000;

/// How a duration is spelled out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationStyle {
    /// Minutes and seconds, rounded to whole seconds ("1m30s")
    Long,
    /// Whole milliseconds, no further rounding ("342ms")
    Short,
}

/// Coarse classification of a test duration, used only to choose a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// Format a duration given in milliseconds.
pub fn format_duration(ms: u64, style: DurationStyle) -> String {
    match style {
        DurationStyle::Short => format!("{}ms", ms),
        DurationStyle::Long => {
            // Round half up to whole seconds, carrying into minutes
            let total_secs = (ms + 500) / 1000;
            let minutes = total_secs / 60;
            let seconds = total_secs % 60;

            let mut out = String::new();
            if minutes > 0 {
                out.push_str(&format!("{}m", minutes));
            }
            if seconds > 0 || minutes == 0 {
                out.push_str(&format!("{}s", seconds));
            }
            out
        }
    }
}

/// Pick the urgency bucket for a test duration.
pub fn urgency(ms: u64) -> Urgency {
    if ms >= SLOW_THRESHOLD_MS {
        Urgency::High
    } else if ms >= MEDIUM_THRESHOLD_MS {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}

#[cfg(test)]
#[path = "duration_test.rs"]
mod duration_test;
