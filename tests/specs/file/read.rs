// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File contents compared like command output.

use crate::prelude::*;

#[test]
fn expect_file_reads_manifest() {
    let manifest = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
    expect_file(manifest, Encoding::Utf8)
        .unwrap()
        .to_contain("shellshot")
        .unwrap();
}

#[test]
fn expect_file_missing_path_fails() {
    let err = expect_file("tests/fixtures/does-not-exist.txt", Encoding::Utf8).unwrap_err();
    assert!(matches!(err, Error::ReadFailed { .. }), "got: {err:?}");
}

#[tokio::test]
async fn file_written_by_command_can_be_checked() {
    let dir = tempfile::tempdir().unwrap();
    command("tee out.txt")
        .with_cwd(dir.path())
        .with_stdin(["first", "second"])
        .for_exit_code(|code| code.to_be(0))
        .await
        .unwrap();

    expect_file(dir.path().join("out.txt"), Encoding::Utf8)
        .unwrap()
        .to_be("first\nsecond\n")
        .unwrap();
}
