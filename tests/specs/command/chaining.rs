// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Several checks against one run, without re-running the process.

use crate::prelude::*;

#[tokio::test]
async fn checks_chain_across_all_fields() {
    command("sh")
        .with_stdin(["echo out", "echo err >&2", "exit 4"])
        .for_stdout(|out| out.to_be("out\n"))
        .for_stderr(|err| err.to_be("err\n"))
        .for_exit_code(|code| code.to_be(4))
        .await
        .unwrap();
}

#[tokio::test]
async fn chaining_is_non_destructive() {
    let chain = script("exitcode.sh", "5").spawn();

    let via_stdout = chain
        .for_stdout(|out| out.to_be_empty())
        .for_exit_code(|code| code.to_be(5))
        .await
        .unwrap();
    let direct = chain.for_exit_code(|code| code.to_be(5)).await.unwrap();

    assert_eq!(via_stdout.exit_code(), direct.exit_code());
}

#[tokio::test]
async fn process_runs_once_for_many_checks() {
    let dir = tempfile::tempdir().unwrap();
    let chain = command("mkdir marker").with_cwd(dir.path()).spawn();

    // A second run of `mkdir marker` would fail with a non-zero exit code.
    for _ in 0..3 {
        chain.for_exit_code(|code| code.to_be(0)).await.unwrap();
    }
    assert!(dir.path().join("marker").is_dir());
}

#[tokio::test]
async fn invalid_chain_fails_before_spawning() {
    let err = ResultChain::new(None).unwrap_err();
    assert!(matches!(err, Error::InvalidChain));
}

#[tokio::test]
async fn reusing_an_invocation_fails() {
    let mut invocation = command("true");
    invocation.for_exit_code(|code| code.to_be(0)).await.unwrap();

    let err = invocation.for_exit_code(|code| code.to_be(0)).await.unwrap_err();
    assert!(matches!(err, Error::AlreadyConsumed));
}

#[tokio::test]
async fn spawn_failure_is_not_an_assertion() {
    let err = command("nonexistent_command_xyz_12345")
        .for_stdout(|out| out.to_be(""))
        .await
        .unwrap_err();

    assert!(!err.is_assertion());
    assert!(err.to_string().contains("nonexistent_command_xyz_12345"));
}
