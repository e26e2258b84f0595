// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for specs.

pub use shellshot::prelude::*;

/// Fixture scripts, relative to the workspace root.
pub const SCRIPTS: &str = "tests/fixtures/scripts";

/// An invocation of a fixture script through `sh`, run from the workspace
/// root.
pub fn script(name: &str, args: &str) -> Invocation {
    let line = if args.is_empty() {
        format!("sh {SCRIPTS}/{name}")
    } else {
        format!("sh {SCRIPTS}/{name} {args}")
    };
    command(line).with_cwd(env!("CARGO_MANIFEST_DIR"))
}
