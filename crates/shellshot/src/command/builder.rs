// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fluent builder for a single command invocation.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::expect::{AssertionError, Expectation};
use crate::Error;

use super::chain::ResultChain;
use super::exec;
use super::spec::InvocationSpec;

#[derive(Debug)]
enum State {
    Pending(InvocationSpec),
    Consumed,
}

/// A command waiting to be run.
///
/// Setters have no side effects. The first trigger (`spawn` or a `for_*`
/// check) starts the process and consumes the invocation. Triggering again
/// yields a chain that fails with [`Error::AlreadyConsumed`].
///
/// Setters called after the first trigger are ignored with a warning. The
/// typed failure surfaces at the next trigger, not at the setter.
#[derive(Debug)]
#[must_use = "an invocation does nothing until a check is attached"]
pub struct Invocation {
    state: State,
}

/// Start building an invocation of `command_line`.
///
/// The command line is split on single spaces into a program and its
/// arguments. No quoting or shell syntax is interpreted.
pub fn command(command_line: impl Into<String>) -> Invocation {
    Invocation::new(command_line)
}

impl Invocation {
    /// Same as [`command`].
    pub fn new(command_line: impl Into<String>) -> Self {
        Self {
            state: State::Pending(InvocationSpec::new(command_line)),
        }
    }

    /// Set the working directory of the process.
    pub fn with_cwd(self, cwd: impl Into<PathBuf>) -> Self {
        let cwd = cwd.into();
        self.update("with_cwd", |spec| spec.working_directory = cwd)
    }

    /// Replace the configured environment variables.
    pub fn with_env<I, K, V>(self, environment: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let environment: HashMap<String, String> = environment
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.update("with_env", |spec| spec.environment = environment)
    }

    /// Add one environment variable.
    pub fn env(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let (key, value) = (key.into(), value.into());
        self.update("env", |spec| {
            spec.environment.insert(key, value);
        })
    }

    /// Add several environment variables.
    pub fn envs<I, K, V>(self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: Vec<(String, String)> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.update("envs", |spec| spec.environment.extend(vars))
    }

    /// Start the process from an empty environment instead of the parent's.
    pub fn clear_env(self) -> Self {
        self.update("clear_env", |spec| spec.inherit_env = false)
    }

    /// Set the lines written to stdin. Each line gets a trailing newline.
    pub fn with_stdin<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        self.update("with_stdin", |spec| spec.stdin_lines = lines)
    }

    // Consumed invocations keep failing at the trigger; the setter only warns.
    fn update(mut self, setter: &'static str, apply: impl FnOnce(&mut InvocationSpec)) -> Self {
        match &mut self.state {
            State::Pending(spec) => apply(spec),
            State::Consumed => {
                tracing::warn!(setter, "ignoring configuration of an already executed invocation");
            }
        }
        self
    }

    /// The pending configuration, or `None` once the invocation ran.
    pub fn spec(&self) -> Option<&InvocationSpec> {
        match &self.state {
            State::Pending(spec) => Some(spec),
            State::Consumed => None,
        }
    }

    /// Whether a trigger already ran this invocation.
    pub fn is_consumed(&self) -> bool {
        matches!(self.state, State::Consumed)
    }

    /// Run the command and return the bare result chain.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn(&mut self) -> ResultChain {
        match std::mem::replace(&mut self.state, State::Consumed) {
            State::Pending(spec) => exec::spawn(spec),
            State::Consumed => ResultChain::failed(Error::AlreadyConsumed),
        }
    }

    /// Run the command and check its stdout.
    pub fn for_stdout<F>(&mut self, check: F) -> ResultChain
    where
        F: FnOnce(Expectation<String>) -> Result<(), AssertionError> + Send + 'static,
    {
        self.spawn().for_stdout(check)
    }

    /// Run the command and check its stderr.
    pub fn for_stderr<F>(&mut self, check: F) -> ResultChain
    where
        F: FnOnce(Expectation<String>) -> Result<(), AssertionError> + Send + 'static,
    {
        self.spawn().for_stderr(check)
    }

    /// Run the command and check its exit code.
    pub fn for_exit_code<F>(&mut self, check: F) -> ResultChain
    where
        F: FnOnce(Expectation<i32>) -> Result<(), AssertionError> + Send + 'static,
    {
        self.spawn().for_exit_code(check)
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
