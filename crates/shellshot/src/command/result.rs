// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The captured outcome of one completed invocation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stdout, stderr, and exit code of one completed process.
///
/// Immutable once produced. A process killed by a signal has no exit status
/// and is recorded with exit code `-1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    stdout: String,
    stderr: String,
    exit_code: i32,
}

impl ExecutionResult {
    /// Assemble a result from captured output and an exit code.
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>, exit_code: i32) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code,
        }
    }

    /// Everything the process wrote to stdout.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Everything the process wrote to stderr.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Exit code, or `-1` when the process was killed by a signal.
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Whether the exit code is zero.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// One of the concurrent branches joined into an [`ExecutionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Stdout drained to a string.
    Stdout,
    /// Stderr drained to a string.
    Stderr,
    /// Process exited.
    Exit,
    /// Input lines written and stdin closed.
    Stdin,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Signal::Stdout => "stdout",
            Signal::Stderr => "stderr",
            Signal::Exit => "exit status",
            Signal::Stdin => "stdin",
        })
    }
}
