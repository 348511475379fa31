//! Shell command execution.

pub mod command;

pub use command::{run_combined, split_lines};
