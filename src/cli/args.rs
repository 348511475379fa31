//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use super::driver::OutputFormat;
use clap::Parser;

/// toolver - Detect installed versions of GNU command-line utilities.
#[derive(Debug, Parser)]
#[command(name = "toolver")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Programs to probe, in order (default: grep awk bash tar)
    #[arg(value_name = "PROGRAM")]
    pub programs: Vec<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Keep probing after a failure and report all failures at the end
    #[arg(short, long, env = "TOOLVER_KEEP_GOING")]
    pub keep_going: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, env = "TOOLVER_DEBUG")]
    pub debug: bool,
}

impl Cli {
    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}
