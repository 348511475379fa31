//! toolver CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use toolver::cli::{Cli, Driver};
use toolver::ui::Theme;
use toolver::version::ProgramRegistry;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so stdout carries only the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("toolver=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("toolver=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> toolver::Result<()> {
    let registry = ProgramRegistry::new();
    let names: Vec<&str> = if cli.programs.is_empty() {
        registry.names()
    } else {
        cli.programs.iter().map(String::as_str).collect()
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = Driver::new(&registry)
        .with_format(cli.format())
        .with_keep_going(cli.keep_going)
        .run(&names, &mut out);

    out.flush().context("Failed to flush stdout")?;
    result.map(|_| ())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("toolver starting with args: {:?}", cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Probe run aborted: {:?}", e);
            let theme = Theme::detect(cli.no_color);
            eprintln!("{}", theme.format_error(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}
