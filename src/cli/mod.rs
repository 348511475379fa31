//! Command-line interface for toolver.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`driver`] - Probe loop and report formatting

pub mod args;
pub mod driver;

pub use args::Cli;
pub use driver::{label, Driver, OutputFormat};
