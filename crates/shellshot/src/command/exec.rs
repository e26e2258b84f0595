// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spawning a process and joining its completion signals.

use std::io;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Instant;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::process::{Child, ChildStdin};
use tracing::Instrument;

use crate::Error;

use super::chain::ResultChain;
use super::result::{ExecutionResult, Signal};
use super::spec::InvocationSpec;

/// Spawn the process described by `spec` and return a chain over its result.
///
/// The process starts immediately and the join runs as its own task, so stdin
/// is written and the pipes are drained whether or not the chain is ever
/// awaited. Must be called from within a Tokio runtime.
pub(crate) fn spawn(spec: InvocationSpec) -> ResultChain {
    let start = Instant::now();
    let (program, args) = spec.argv();

    let cmd_span = tracing::info_span!(
        "shellshot.cmd",
        cmd = %program,
        args = ?args,
        exit_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );

    if program.is_empty() {
        return ResultChain::failed(Error::SpawnFailed {
            command_line: spec.command_line.clone(),
            source: Arc::new(io::Error::new(
                io::ErrorKind::InvalidInput,
                "command line has no program name",
            )),
        });
    }

    let mut process = tokio::process::Command::new(program);
    process.args(&args);
    process.current_dir(&spec.working_directory);
    if !spec.inherit_env {
        process.env_clear();
    }
    process.envs(&spec.environment);

    process.stdin(Stdio::piped());
    process.stdout(Stdio::piped());
    process.stderr(Stdio::piped());

    let child = match process.spawn() {
        Ok(child) => child,
        Err(source) => {
            tracing::debug!(parent: &cmd_span, error = %source, "spawn failed");
            return ResultChain::failed(Error::SpawnFailed {
                command_line: spec.command_line.clone(),
                source: Arc::new(source),
            });
        }
    };
    tracing::debug!(parent: &cmd_span, pid = ?child.id(), "spawned");

    let stdin = spec.stdin_payload();
    let command_line = spec.command_line.clone();
    let task = tokio::spawn(join(child, stdin, spec.command_line, start).instrument(cmd_span));

    ResultChain::from_action(async move {
        match task.await {
            Ok(joined) => joined,
            Err(source) => Err(Error::CollectFailed {
                command_line,
                signal: Signal::Exit,
                source: Arc::new(io::Error::other(source)),
            }),
        }
    })
}

/// Wait for stdout, stderr, and exit together, feeding stdin alongside.
///
/// Resolves only once every branch finished, so neither stream can be read
/// short of its end. Any failing branch fails the whole join.
async fn join(
    mut child: Child,
    stdin: Vec<u8>,
    command_line: String,
    start: Instant,
) -> Result<ExecutionResult, Error> {
    let stdin_pipe = child.stdin.take();
    let stdout_pipe = child.stdout.take();
    let stderr_pipe = child.stderr.take();

    let (stdout, stderr, status, ()) = tokio::try_join!(
        async {
            drain(stdout_pipe)
                .await
                .map_err(collect_failed(&command_line, Signal::Stdout))
        },
        async {
            drain(stderr_pipe)
                .await
                .map_err(collect_failed(&command_line, Signal::Stderr))
        },
        async {
            child
                .wait()
                .await
                .map_err(collect_failed(&command_line, Signal::Exit))
        },
        async {
            feed(stdin_pipe, &stdin)
                .await
                .map_err(collect_failed(&command_line, Signal::Stdin))
        },
    )?;

    let exit_code = match status.code() {
        Some(code) => code,
        None => {
            tracing::warn!(%status, "process terminated without an exit code");
            -1
        }
    };

    let span = tracing::Span::current();
    span.record("exit_code", exit_code);
    span.record("duration_ms", start.elapsed().as_millis() as u64);

    Ok(ExecutionResult::new(stdout, stderr, exit_code))
}

/// Read a pipe to its end, decoding lossily as UTF-8.
async fn drain<R>(pipe: Option<R>) -> io::Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut bytes = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut bytes).await?;
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write the payload to stdin, then close it.
///
/// A process that exits or closes stdin before reading everything leaves the
/// remaining input unread, which is not an error.
async fn feed(pipe: Option<ChildStdin>, payload: &[u8]) -> io::Result<()> {
    let Some(mut pipe) = pipe else {
        return Ok(());
    };
    let result = match pipe.write_all(payload).await {
        Ok(()) => pipe.flush().await,
        Err(e) => Err(e),
    };
    drop(pipe); // close pipe to signal EOF

    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdin closed by process before all input was written");
            Ok(())
        }
        other => other,
    }
}

fn collect_failed(command_line: &str, signal: Signal) -> impl FnOnce(io::Error) -> Error + '_ {
    move |source| Error::CollectFailed {
        command_line: command_line.to_string(),
        signal,
        source: Arc::new(source),
    }
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
