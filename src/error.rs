//! Error types for version probing.
//!
//! This module defines [`ProbeError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every failure in the runner, matcher, or registry is a `ProbeError`
//!   variant and propagates to the caller with `?`
//! - Use `anyhow::Error` (via `ProbeError::Other`) for top-level glue
//! - Nothing on these paths panics; `main` turns errors into exit code 1

use std::fmt;
use thiserror::Error;

/// Core error type for version probing.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Program name is not in the fixed registry.
    #[error("Unsupported program: {name}")]
    UnsupportedProgram { name: String },

    /// Runner was handed a command line with no executable.
    #[error("Cannot run an empty command line")]
    EmptyCommand,

    /// The command could not be spawned or its output could not be read.
    #[error("Failed to execute '{command}': {source}")]
    Execution {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran but exited abnormally.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A version pattern failed to compile.
    #[error("Invalid version pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The matcher asked for a line the command never printed.
    #[error("Output line {line} requested but only {available} line(s) were produced")]
    LineOutOfRange { line: usize, available: usize },

    /// The pattern did not match the selected line.
    #[error("Pattern '{pattern}' did not match output line {line}")]
    NoMatch { line: usize, pattern: String },

    /// No matcher candidates were supplied.
    #[error("No version matchers configured")]
    NoCandidates,

    /// One or more probes failed during a keep-going run.
    #[error("{0}")]
    Multiple(ProbeReport),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for probing operations.
pub type Result<T> = std::result::Result<T, ProbeError>;

/// A single program's failure, recorded during a keep-going run.
#[derive(Debug)]
pub struct ProbeFailure {
    /// Program that failed.
    pub program: String,
    /// What went wrong.
    pub error: ProbeError,
}

/// Consolidated failures from a keep-going run.
#[derive(Debug, Default)]
pub struct ProbeReport {
    failures: Vec<ProbeFailure>,
}

impl ProbeReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for a program.
    pub fn push(&mut self, program: &str, error: ProbeError) {
        self.failures.push(ProbeFailure {
            program: program.to_string(),
            error,
        });
    }

    /// All recorded failures, in probe order.
    pub fn failures(&self) -> &[ProbeFailure] {
        &self.failures
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Convert into `Ok(())` when nothing failed, otherwise `ProbeError::Multiple`.
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ProbeError::Multiple(self))
        }
    }
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} probe(s) failed", self.failures.len())?;
        for failure in &self.failures {
            write!(f, "\n  {}: {}", failure.program, failure.error)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_program_displays_name() {
        let err = ProbeError::UnsupportedProgram { name: "sed".into() };
        assert!(err.to_string().contains("sed"));
    }

    #[test]
    fn execution_error_displays_command_and_source() {
        let err = ProbeError::Execution {
            command: "nope --version".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("nope --version"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = ProbeError::CommandFailed {
            command: "tar --version".into(),
            code: Some(2),
        };
        let msg = err.to_string();
        assert!(msg.contains("tar --version"));
        assert!(msg.contains("2"));
    }

    #[test]
    fn line_out_of_range_displays_counts() {
        let err = ProbeError::LineOutOfRange {
            line: 3,
            available: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("3"));
        assert!(msg.contains("1 line"));
    }

    #[test]
    fn no_match_displays_pattern() {
        let err = ProbeError::NoMatch {
            line: 0,
            pattern: "^GNU Awk".into(),
        };
        assert!(err.to_string().contains("^GNU Awk"));
    }

    #[test]
    fn empty_report_is_ok() {
        assert!(ProbeReport::new().into_result().is_ok());
    }

    #[test]
    fn report_lists_every_failure() {
        let mut report = ProbeReport::new();
        report.push("awk", ProbeError::NoCandidates);
        report.push("sed", ProbeError::UnsupportedProgram { name: "sed".into() });

        let err = report.into_result().unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("2 probe(s) failed"));
        assert!(msg.contains("awk: No version matchers configured"));
        assert!(msg.contains("sed: Unsupported program: sed"));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: ProbeError = anyhow::anyhow!("write failed").into();
        assert!(matches!(err, ProbeError::Other(_)));
    }
}
