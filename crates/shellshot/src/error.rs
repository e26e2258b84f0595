// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type shared by invocations, result chains, and file reads.

use std::path::PathBuf;
use std::sync::Arc;

use crate::command::Signal;
use crate::expect::AssertionError;
use crate::file::Encoding;

/// Errors surfaced when awaiting a [`ResultChain`](crate::ResultChain) or
/// reading a file.
///
/// I/O sources sit behind an [`Arc`] so a failed chain can hand the same
/// error to every clone that awaits it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The program could not be started (missing executable, bad working
    /// directory, permission denied, empty program name).
    #[error("failed to spawn `{command_line}`: {source}")]
    SpawnFailed {
        command_line: String,
        source: Arc<std::io::Error>,
    },

    /// The process started but one of its completion signals failed.
    #[error("failed to collect {signal} of `{command_line}`: {source}")]
    CollectFailed {
        command_line: String,
        signal: Signal,
        source: Arc<std::io::Error>,
    },

    /// A chain was constructed from neither a pending execution nor an
    /// existing chain.
    #[error("invalid chain construction: value is neither a pending execution nor a result chain")]
    InvalidChain,

    /// An execution trigger was called on an invocation that already ran.
    #[error("invocation was already consumed by an earlier execution")]
    AlreadyConsumed,

    /// A check attached to the chain did not hold.
    #[error(transparent)]
    Assertion(#[from] AssertionError),

    /// A file could not be read.
    #[error("failed to read `{}`: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        source: Arc<std::io::Error>,
    },

    /// A file's bytes are not valid in the declared encoding.
    #[error("`{}` is not valid {encoding}", path.display())]
    Decode { path: PathBuf, encoding: Encoding },
}

impl Error {
    /// Returns the command line of the invocation this error came from, if
    /// any.
    pub fn command_line(&self) -> Option<&str> {
        match self {
            Error::SpawnFailed { command_line, .. } | Error::CollectFailed { command_line, .. } => {
                Some(command_line)
            }
            _ => None,
        }
    }

    /// Returns true for failures of an attached check, as opposed to
    /// configuration or process errors.
    pub fn is_assertion(&self) -> bool {
        matches!(self, Error::Assertion(_))
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
