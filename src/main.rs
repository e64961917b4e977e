mod aggregator;
mod cli;
mod combo;
mod config;
mod duration;
mod events;
mod failure_report;
mod render;
mod reporter;
mod stats;
mod style;
mod types;
mod ui;

use config::{InputSource, ReporterConfig};
use events::StreamSummary;
use reporter::StepReporter;
use stats::RunStats;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    let config = match config::build_reporter_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    match run(&config) {
        Ok(summary) => {
            if summary.skipped > 0 {
                ui::status(&format!("skipped {} malformed event line(s)", summary.skipped));
            }
        }
        Err(e) => {
            ui::print_error(&e);
            std::process::exit(1);
        }
    }
}

/// Stream events from the configured input through the reporter
fn run(config: &ReporterConfig) -> Result<StreamSummary, String> {
    let reader: Box<dyn BufRead> = match &config.input {
        InputSource::Stdin => Box::new(io::stdin().lock()),
        InputSource::File(path) => {
            let file = File::open(path).map_err(|e| format!("Failed to open {}: {}", path.display(), e))?;
            Box::new(BufReader::new(file))
        }
    };

    let stdout = io::stdout();
    let mut reporter = StepReporter::new(stdout.lock(), style::styler(config.use_colors), config.ok_symbol.clone());
    let mut stats = RunStats::new();

    // Stats see each event before the reporter, so runner:end finds its failures
    let summary = events::read_events(reader, |event| {
        stats.record(&event);
        reporter.handle(&event, &stats)
    })?;

    if config.summary {
        reporter.write_summary().map_err(|e| format!("Failed to write summary: {}", e))?;
    }

    Ok(summary)
}
