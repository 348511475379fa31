//! Probing a single program for its version.
//!
//! # Example
//!
//! ```
//! use toolver::version::{probe_with, ProgramRegistry};
//!
//! let registry = ProgramRegistry::new();
//! let grep = registry.lookup("grep").unwrap();
//! let info = probe_with(grep, |_args: &[&str]| {
//!     Ok(vec!["grep (GNU grep) 3.11".to_string(), String::new()])
//! })
//! .unwrap();
//! assert_eq!(info.version, "3.11");
//! ```

use super::matcher::extract_version;
use super::registry::ProgramSpec;
use crate::error::Result;
use crate::shell::run_combined;
use serde::Serialize;
use tracing::debug;

/// Detected program version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramInfo {
    /// Program name (e.g., "grep").
    pub name: String,
    /// Vendor label (e.g., "GNU").
    pub variant: String,
    /// Extracted version text.
    pub version: String,
}

/// Probe a program by running it on the real system.
pub fn probe(spec: &ProgramSpec) -> Result<ProgramInfo> {
    probe_with(spec, |args: &[&str]| run_combined(args))
}

/// Probe a program with a custom runner.
///
/// The runner receives the invocation and returns the output lines. This
/// allows testing without spawning processes.
pub fn probe_with<F>(spec: &ProgramSpec, run: F) -> Result<ProgramInfo>
where
    F: Fn(&[&str]) -> Result<Vec<String>>,
{
    let lines = run(spec.command)?;
    let version = extract_version(&lines, spec.matchers)?;
    debug!("Detected {} {} {}", spec.variant, spec.name, version);

    Ok(ProgramInfo {
        name: spec.name.to_string(),
        variant: spec.variant.to_string(),
        version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeError;
    use crate::version::registry::ProgramRegistry;
    use std::cell::RefCell;

    fn canned(line: &'static str) -> impl Fn(&[&str]) -> Result<Vec<String>> {
        move |_: &[&str]| Ok(vec![line.to_string(), String::new()])
    }

    #[test]
    fn probe_with_builds_program_info() {
        let registry = ProgramRegistry::new();
        let spec = registry.lookup("tar").unwrap();
        let info = probe_with(spec, canned("tar (GNU tar) 1.35")).unwrap();
        assert_eq!(
            info,
            ProgramInfo {
                name: "tar".to_string(),
                variant: "GNU".to_string(),
                version: "1.35".to_string(),
            }
        );
    }

    #[test]
    fn probe_with_passes_invocation_to_runner() {
        let registry = ProgramRegistry::new();
        let spec = registry.lookup("awk").unwrap();
        let seen = RefCell::new(Vec::new());
        probe_with(spec, |args: &[&str]| {
            seen.borrow_mut()
                .extend(args.iter().map(|a| a.to_string()));
            Ok(vec!["GNU Awk 5.2.1, API 3.2".to_string()])
        })
        .unwrap();
        assert_eq!(*seen.borrow(), vec!["awk", "--version"]);
    }

    #[test]
    fn runner_error_propagates() {
        let registry = ProgramRegistry::new();
        let spec = registry.lookup("bash").unwrap();
        let err = probe_with(spec, |_: &[&str]| {
            Err(ProbeError::Execution {
                command: "bash --version".into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            })
        })
        .unwrap_err();
        assert!(matches!(err, ProbeError::Execution { .. }));
    }

    #[test]
    fn unexpected_output_is_no_match() {
        let registry = ProgramRegistry::new();
        let spec = registry.lookup("grep").unwrap();
        let err = probe_with(spec, canned("grep (BSD grep, GNU compatible) 2.6.0")).unwrap_err();
        assert!(matches!(err, ProbeError::NoMatch { .. }));
    }

    #[test]
    fn empty_output_is_no_match() {
        let registry = ProgramRegistry::new();
        let spec = registry.lookup("grep").unwrap();
        let err = probe_with(spec, |_: &[&str]| Ok(vec![String::new()])).unwrap_err();
        assert!(matches!(err, ProbeError::NoMatch { line: 0, .. }));
    }

    #[test]
    fn repeated_probes_are_identical() {
        let registry = ProgramRegistry::new();
        let spec = registry.lookup("bash").unwrap();
        let runner = canned("GNU bash, version 5.2.21(1)-release (x86_64-pc-linux-gnu)");
        let first = probe_with(spec, &runner).unwrap();
        let second = probe_with(spec, &runner).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.version, "5.2.21(1)-release");
    }

    #[test]
    fn program_info_serializes_to_json() {
        let info = ProgramInfo {
            name: "grep".into(),
            variant: "GNU".into(),
            version: "3.11".into(),
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["name"], "grep");
        assert_eq!(json["variant"], "GNU");
        assert_eq!(json["version"], "3.11");
    }

    #[test]
    fn missing_executable_propagates_from_real_runner() {
        let spec = ProgramSpec {
            name: "nope",
            command: &["toolver-definitely-not-a-real-binary", "--version"],
            variant: "GNU",
            matchers: &[],
        };
        assert!(matches!(probe(&spec), Err(ProbeError::Execution { .. })));
    }
}
