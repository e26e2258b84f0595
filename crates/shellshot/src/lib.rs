// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! shellshot: run an external command once, then check its stdout, stderr,
//! and exit code through a chainable API.
//!
//! ```no_run
//! # async fn demo() -> Result<(), shellshot::Error> {
//! use shellshot::prelude::*;
//!
//! command("cat")
//!     .with_stdin(["hello"])
//!     .for_stdout(|out| out.to_be("hello\n"))
//!     .for_exit_code(|code| code.to_be(0))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! The command line is split on single spaces. Quoting, escaping, and shell
//! operators are not interpreted, so an argument cannot contain a space.
//! There is no timeout or cancellation: every invocation runs to completion.

pub mod command;
pub mod error;
pub mod expect;
pub mod file;
pub mod prelude;

pub use command::{
    command, split_command_line, ChainSource, ExecutionResult, Invocation, InvocationSpec,
    ResultChain, Signal,
};
pub use error::Error;
pub use expect::{expect, AssertionError, Expectation};
pub use file::{expect_file, Encoding};
