//! Version detection: program registry, output matching, and probing.

pub mod matcher;
pub mod probe;
pub mod registry;

pub use matcher::{extract_version, Matcher, VERSION_GROUP};
pub use probe::{probe, probe_with, ProgramInfo};
pub use registry::{ProgramRegistry, ProgramSpec};
