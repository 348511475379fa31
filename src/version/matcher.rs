//! Version extraction from command output.
//!
//! A [`Matcher`] names one output line and a regex with a `version` named
//! group. [`extract_version`] tries candidates in order and returns the first
//! capture, so a program can list fallback formats after its primary one.

use crate::error::{ProbeError, Result};
use regex::Regex;
use tracing::debug;

/// Name of the capture group every version pattern must define.
pub const VERSION_GROUP: &str = "version";

/// A single extraction candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matcher {
    /// Zero-based index into the output lines.
    pub line: usize,
    /// Regex with a `(?<version>...)` group.
    pub pattern: &'static str,
}

impl Matcher {
    pub const fn new(line: usize, pattern: &'static str) -> Self {
        Self { line, pattern }
    }

    /// Apply this candidate to `lines`.
    pub fn apply(&self, lines: &[String]) -> Result<String> {
        let text = lines.get(self.line).ok_or(ProbeError::LineOutOfRange {
            line: self.line,
            available: lines.len(),
        })?;

        let re = Regex::new(self.pattern).map_err(|source| ProbeError::InvalidPattern {
            pattern: self.pattern.to_string(),
            source,
        })?;

        re.captures(text)
            .and_then(|caps| caps.name(VERSION_GROUP))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| ProbeError::NoMatch {
                line: self.line,
                pattern: self.pattern.to_string(),
            })
    }
}

/// Extract a version by trying `matchers` in order.
///
/// Returns the first successful capture. An invalid pattern aborts the search
/// immediately. When every candidate misses, the last candidate's error is
/// returned.
pub fn extract_version(lines: &[String], matchers: &[Matcher]) -> Result<String> {
    let mut last_error = ProbeError::NoCandidates;

    for matcher in matchers {
        match matcher.apply(lines) {
            Ok(version) => return Ok(version),
            Err(err @ ProbeError::InvalidPattern { .. }) => return Err(err),
            Err(err) => {
                debug!("Matcher on line {} missed: {}", matcher.line, err);
                last_error = err;
            }
        }
    }

    Err(last_error)
}
