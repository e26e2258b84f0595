// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Everything a test needs to run commands and check files.

pub use crate::command::{command, ExecutionResult, Invocation, ResultChain};
pub use crate::error::Error;
pub use crate::expect::{expect, AssertionError, Expectation};
pub use crate::file::{expect_file, Encoding};
