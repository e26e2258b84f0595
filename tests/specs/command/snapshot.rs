// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Completed results serialize for snapshot comparisons.

use crate::prelude::*;

#[tokio::test]
async fn result_serializes_to_json() {
    let result = script("stdin.sh", "2")
        .with_stdin(["a", "b"])
        .spawn()
        .await
        .unwrap();

    let json = serde_json::to_string_pretty(&result).unwrap();
    similar_asserts::assert_eq!(
        json,
        r#"{
  "stdout": "line: a\nline: b\n",
  "stderr": "",
  "exit_code": 0
}"#
    );

    let back: ExecutionResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
