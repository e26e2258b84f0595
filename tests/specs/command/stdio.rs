// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stdout and stderr capture, and stdin line feeding.

use crate::prelude::*;

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[tokio::test]
async fn for_stdout_captures_output() {
    script("stdout.sh", "Hello, world!")
        .for_stdout(|out| out.to_be("Hello, world!\n"))
        .await
        .unwrap();
}

#[tokio::test]
async fn for_stderr_captures_output() {
    script("stderr.sh", "Hello, world!")
        .for_stderr(|err| err.to_be("Hello, world!\n"))
        .for_stdout(|out| out.to_be_empty())
        .await
        .unwrap();
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

#[tokio::test]
async fn with_stdin_passes_lines() {
    script("stdin.sh", "2")
        .with_stdin(["Hello", "World"])
        .for_stdout(|out| out.to_be("line: Hello\nline: World\n"))
        .await
        .unwrap();
}

#[tokio::test]
async fn with_stdin_not_enough_lines_reads_eof() {
    script("stdin.sh", "3")
        .with_stdin(["Hello", "World"])
        .for_stdout(|out| out.to_be("line: Hello\nline: World\nline: \n"))
        .await
        .unwrap();
}

#[tokio::test]
async fn with_stdin_too_many_lines_are_left_unread() {
    script("stdin.sh", "1")
        .with_stdin(["Hello", "World"])
        .for_stdout(|out| out.to_be("line: Hello\n"))
        .for_exit_code(|code| code.to_be(0))
        .await
        .unwrap();
}

#[tokio::test]
async fn cat_echoes_stdin() {
    command("cat")
        .with_stdin(["hello"])
        .for_stdout(|out| out.to_be("hello\n"))
        .await
        .unwrap();
}
