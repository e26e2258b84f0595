// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command invocations: the builder, the single spawn, and the result chain.
//!
//! Data flows one way: an [`Invocation`] accumulates configuration, the
//! first `for_*` trigger spawns the process exactly once, and the completed
//! [`ExecutionResult`] is shared by every [`ResultChain`] derived from it.

mod builder;
mod chain;
mod exec;
mod result;
mod spec;

pub use builder::{command, Invocation};
pub use chain::{ChainSource, ResultChain};
pub use result::{ExecutionResult, Signal};
pub use spec::{split_command_line, InvocationSpec};
