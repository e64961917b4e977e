use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// When to emit ANSI colors
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Color when stdout is a color-capable terminal
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "step-reporter")]
#[command(about = "Render a parallel test run's lifecycle events as step-by-step console progress")]
#[command(version)]
pub struct CliArgs {
    /// JSON Lines event stream to read ("-" for stdin)
    /// Falls back to $STEP_REPORTER_INPUT, then stdin
    #[arg(long, short = 'i', value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Colorize output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Symbol printed in front of passing tests (default: ✓, √ on Windows)
    #[arg(long, value_name = "GLYPH")]
    pub ok_symbol: Option<String>,

    /// Print totals across all workers once the stream ends
    #[arg(long)]
    pub summary: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref symbol) = self.ok_symbol {
            if symbol.trim().is_empty() {
                return Err("--ok-symbol must not be empty".to_string());
            }
        }

        if let Some(ref path) = self.input {
            if path.as_os_str() != "-" && !path.exists() {
                return Err(format!("Input file not found: {}", path.display()));
            }
        }

        Ok(())
    }
}
