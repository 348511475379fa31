//! Registry of supported programs.
//!
//! The set of programs is closed: each entry fixes the invocation, the vendor
//! label, and the matcher candidates used to pull the version out of the
//! program's output. Entries are kept in probe order.

use super::matcher::Matcher;
use crate::error::{ProbeError, Result};

/// How to probe one program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramSpec {
    /// Program name (e.g., "grep").
    pub name: &'static str,
    /// Executable followed by its arguments.
    pub command: &'static [&'static str],
    /// Vendor label reported alongside the version (e.g., "GNU").
    pub variant: &'static str,
    /// Ordered matcher candidates — first match wins.
    pub matchers: &'static [Matcher],
}

/// Built-in program definitions, in probe order.
const PROGRAM_DEFS: &[ProgramSpec] = &[
    ProgramSpec {
        name: "grep",
        command: &["grep", "--version"],
        variant: "GNU",
        matchers: &[Matcher::new(0, r"^grep \(GNU grep\) (?<version>.+)$")],
    },
    ProgramSpec {
        name: "awk",
        command: &["awk", "--version"],
        variant: "GNU",
        matchers: &[Matcher::new(0, r"^GNU Awk (?<version>.+?),")],
    },
    ProgramSpec {
        name: "bash",
        command: &["bash", "--version"],
        variant: "GNU",
        matchers: &[Matcher::new(0, r"GNU bash, version (?<version>.+?) ")],
    },
    ProgramSpec {
        name: "tar",
        command: &["tar", "--version"],
        variant: "GNU",
        matchers: &[Matcher::new(0, r"^tar \(GNU tar\) (?<version>.+)$")],
    },
];

/// Registry of all supported programs.
#[derive(Debug, Clone)]
pub struct ProgramRegistry {
    programs: &'static [ProgramSpec],
}

impl ProgramRegistry {
    /// Create a registry with the built-in programs.
    pub fn new() -> Self {
        Self {
            programs: PROGRAM_DEFS,
        }
    }

    /// Look up a program by name.
    pub fn lookup(&self, name: &str) -> Result<&ProgramSpec> {
        self.programs
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ProbeError::UnsupportedProgram {
                name: name.to_string(),
            })
    }

    /// Supported program names, in probe order.
    pub fn names(&self) -> Vec<&'static str> {
        self.programs.iter().map(|p| p.name).collect()
    }

    pub fn programs(&self) -> &[ProgramSpec] {
        self.programs
    }
}

impl Default for ProgramRegistry {
    fn default() -> Self {
        Self::new()
    }
}
