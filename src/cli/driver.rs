//! Probe driver: runs each requested program and prints the results.

use crate::error::{ProbeReport, Result};
use crate::shell::run_combined;
use crate::version::{probe_with, ProgramInfo, ProgramRegistry};
use anyhow::Context;
use std::io::Write;
use tracing::{debug, warn};

/// How results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Two labelled lines per program followed by a blank line.
    #[default]
    Text,
    /// One JSON array of all results, written after every probe finishes.
    Json,
}

/// Drives probes over a list of program names.
///
/// By default the first failure stops the run. With `keep_going` every
/// program is probed and failures are collected into a
/// [`ProbeError::Multiple`](crate::ProbeError::Multiple).
#[derive(Debug, Clone)]
pub struct Driver<'a> {
    registry: &'a ProgramRegistry,
    format: OutputFormat,
    keep_going: bool,
}

impl<'a> Driver<'a> {
    pub fn new(registry: &'a ProgramRegistry) -> Self {
        Self {
            registry,
            format: OutputFormat::default(),
            keep_going: false,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// Probe `names` on the real system, writing records to `out`.
    pub fn run<W: Write>(&self, names: &[&str], out: &mut W) -> Result<Vec<ProgramInfo>> {
        self.run_with(names, out, |args: &[&str]| run_combined(args))
    }

    /// Probe `names` using a custom runner.
    pub fn run_with<W, F>(&self, names: &[&str], out: &mut W, runner: F) -> Result<Vec<ProgramInfo>>
    where
        W: Write,
        F: Fn(&[&str]) -> Result<Vec<String>>,
    {
        let mut results = Vec::with_capacity(names.len());
        let mut report = ProbeReport::new();

        for name in names {
            debug!("Probing {}", name);
            let outcome = self
                .registry
                .lookup(name)
                .and_then(|spec| probe_with(spec, &runner));

            match outcome {
                Ok(info) => {
                    if self.format == OutputFormat::Text {
                        write_record(out, &info)?;
                    }
                    results.push(info);
                }
                Err(err) if self.keep_going => {
                    warn!("Probe for {} failed: {}", name, err);
                    report.push(name, err);
                }
                Err(err) => return Err(err),
            }
        }

        if self.format == OutputFormat::Json {
            serde_json::to_writer_pretty(&mut *out, &results)
                .context("Failed to write JSON report")?;
            writeln!(out).context("Failed to write JSON report")?;
        }

        report.into_result()?;
        Ok(results)
    }
}

/// Label for a program in text output: its name with the first letter capitalized.
pub fn label(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn write_record<W: Write>(out: &mut W, info: &ProgramInfo) -> Result<()> {
    let label = label(&info.name);
    let write = |out: &mut W| -> std::io::Result<()> {
        writeln!(out, "{} Variant: {}", label, info.variant)?;
        writeln!(out, "{} Version: {}", label, info.version)?;
        writeln!(out)
    };
    write(out).context("Failed to write report")?;
    Ok(())
}
