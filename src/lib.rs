//! toolver - Detect installed versions of GNU command-line utilities.
//!
//! Each supported program is run with `--version`, its combined output is
//! captured, and the version is extracted from a fixed line with a regex
//! `version` named group.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, argument parsing, and the probe driver
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Subprocess execution with combined output capture
//! - [`ui`] - Terminal styling for diagnostics
//! - [`version`] - Program registry, version matchers, and probing
//!
//! # Example
//!
//! ```
//! use toolver::version::{extract_version, ProgramRegistry};
//!
//! let registry = ProgramRegistry::new();
//! let awk = registry.lookup("awk").unwrap();
//! let output = vec!["GNU Awk 5.1.0, API: 3.0".to_string()];
//! assert_eq!(extract_version(&output, awk.matchers).unwrap(), "5.1.0");
//! ```

pub mod cli;
pub mod error;
pub mod shell;
pub mod ui;
pub mod version;

pub use error::{ProbeError, ProbeReport, Result};
