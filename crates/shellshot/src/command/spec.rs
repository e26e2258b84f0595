// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Invocation configuration and command-line splitting.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Accumulated configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationSpec {
    /// Raw command line, split by [`split_command_line`] at spawn time.
    pub command_line: String,
    /// Working directory of the spawned process. Default: `.`
    pub working_directory: PathBuf,
    /// Variables set for the spawned process.
    pub environment: HashMap<String, String>,
    /// Whether the process starts from the parent environment. When false,
    /// it sees only `environment`.
    pub inherit_env: bool,
    /// Lines written to stdin, each followed by `\n`, before stdin is closed.
    pub stdin_lines: Vec<String>,
}

impl InvocationSpec {
    /// Defaults: current directory, inherited environment, no stdin lines.
    pub fn new(command_line: impl Into<String>) -> Self {
        Self {
            command_line: command_line.into(),
            working_directory: PathBuf::from("."),
            environment: HashMap::new(),
            inherit_env: true,
            stdin_lines: Vec::new(),
        }
    }

    /// Program name and arguments of the command line.
    pub fn argv(&self) -> (&str, Vec<&str>) {
        split_command_line(&self.command_line)
    }

    /// Bytes written to the process's stdin.
    pub(crate) fn stdin_payload(&self) -> Vec<u8> {
        let mut payload = Vec::new();
        for line in &self.stdin_lines {
            payload.extend_from_slice(line.as_bytes());
            payload.push(b'\n');
        }
        payload
    }
}

/// Split a command line into a program name and its arguments.
///
/// Splits on every single space. Consecutive spaces produce empty arguments
/// and quotes are passed through literally, so an argument can never contain
/// a space.
pub fn split_command_line(command_line: &str) -> (&str, Vec<&str>) {
    let mut parts = command_line.split(' ');
    let program = parts.next().unwrap_or_default();
    (program, parts.collect())
}

#[cfg(test)]
#[path = "spec_tests.rs"]
mod tests;
