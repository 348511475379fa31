//! Subprocess execution with combined output capture.

use crate::error::{ProbeError, Result};
use std::ffi::OsStr;
use std::io::Read;
use std::process::{Command, Stdio};
use tracing::debug;

/// Run a command and return its combined stdout/stderr split into lines.
///
/// Both streams are attached to the same pipe, so lines appear in the order
/// the child wrote them. The output is split on `'\n'` without trimming; a
/// trailing newline produces a trailing empty line.
///
/// The first element of `args` is the executable, the rest are its arguments.
/// There is no timeout: a command that never exits blocks the caller.
pub fn run_combined<S: AsRef<OsStr>>(args: &[S]) -> Result<Vec<String>> {
    let (program, rest) = args.split_first().ok_or(ProbeError::EmptyCommand)?;
    let command = display_command(args);
    debug!("Running command: {}", command);

    let execution = |source: std::io::Error| ProbeError::Execution {
        command: command.clone(),
        source,
    };

    let (mut reader, writer) = std::io::pipe().map_err(execution)?;

    let mut cmd = Command::new(program);
    cmd.args(rest);
    cmd.stdin(Stdio::null());
    cmd.stdout(writer.try_clone().map_err(execution)?);
    cmd.stderr(writer);

    let mut child = cmd.spawn().map_err(execution)?;

    // The Command still owns the write ends; drop it so the read sees EOF.
    drop(cmd);

    let mut output = Vec::new();
    let read = reader.read_to_end(&mut output);
    let status = child.wait().map_err(execution)?;
    read.map_err(execution)?;

    if !status.success() {
        return Err(ProbeError::CommandFailed {
            command,
            code: status.code(),
        });
    }

    let lines = split_lines(&output);
    debug!("Command produced {} line(s)", lines.len());
    Ok(lines)
}

/// Decode raw output as UTF-8 (lossy) and split it on newlines.
pub fn split_lines(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output)
        .split('\n')
        .map(str::to_string)
        .collect()
}

fn display_command<S: AsRef<OsStr>>(args: &[S]) -> String {
    args.iter()
        .map(|a| a.as_ref().to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}
