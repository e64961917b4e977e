/// Configuration resolution module
///
/// This module handles:
/// - Building a ReporterConfig from CLI arguments
/// - Environment fallbacks for the input source
/// - Resolving color support and the pass symbol for the platform
use crate::cli::{CliArgs, ColorChoice};
use crate::style;
use log::debug;
use std::env;
use std::path::PathBuf;

/// Environment variable consulted when --input is absent
pub const INPUT_ENV: &str = "STEP_REPORTER_INPUT";

/// Where events are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

/// Fully resolved, immutable reporter settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterConfig {
    pub input: InputSource,
    pub use_colors: bool,
    pub ok_symbol: String,
    pub summary: bool,
}

/// Build a complete ReporterConfig from CLI arguments
pub fn build_reporter_config(args: &CliArgs) -> Result<ReporterConfig, String> {
    let input = resolve_input(args.input.clone().or_else(|| env::var(INPUT_ENV).ok().map(PathBuf::from)))?;
    debug!("Reading events from {:?}", input);

    let use_colors = match args.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => style::stdout_supports_color(),
    };
    debug!("Colors {}", if use_colors { "enabled" } else { "disabled" });

    Ok(ReporterConfig {
        input,
        use_colors,
        ok_symbol: args.ok_symbol.clone().unwrap_or_else(|| default_ok_symbol().to_string()),
        summary: args.summary,
    })
}

fn resolve_input(path: Option<PathBuf>) -> Result<InputSource, String> {
    match path {
        None => Ok(InputSource::Stdin),
        Some(p) if p.as_os_str() == "-" => Ok(InputSource::Stdin),
        Some(p) if p.is_dir() => Err(format!("Input is a directory: {}", p.display())),
        Some(p) => Ok(InputSource::File(p)),
    }
}

/// Pass symbol for this platform's console
pub fn default_ok_symbol() -> &'static str {
    if cfg!(windows) { "√" } else { "✓" }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
